//! Explore command handler: the interactive TUI.

use super::{build_store, exit_codes};
use crate::config::AppConfig;
use crate::tui::{run_explorer_tui, ExplorerApp};
use anyhow::{Context, Result};

/// Run the explore command
pub fn run_explore(config: &AppConfig) -> Result<i32> {
    let store = build_store(config)?;
    tracing::debug!(sources = ?store.sources(), "starting explorer");

    let mut app = ExplorerApp::new();
    run_explorer_tui(&mut app, store, &config.tui).context("Terminal UI failed")?;

    Ok(exit_codes::SUCCESS)
}
