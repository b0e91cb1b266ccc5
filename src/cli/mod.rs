//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the behavior of one subcommand and returns the
//! process exit code.

mod config;
mod explore;
mod list;
mod output;

pub use config::{run_config_init, run_config_schema, run_config_show};
pub use explore::run_explore;
pub use list::{run_certificates, run_products, ListOutput};
pub use output::{should_use_color, write_output, OutputTarget};

use crate::config::{AppConfig, Validatable};
use crate::fetch::{DatasetStore, HttpFetcher};
use anyhow::{bail, Context, Result};
use std::sync::Arc;

/// Exit codes shared by all subcommands.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ERROR: i32 = 1;
}

/// Validate `config` and build the dataset store it describes.
pub fn build_store(config: &AppConfig) -> Result<Arc<DatasetStore>> {
    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", details.join("\n  "));
    }

    let fetcher = HttpFetcher::new(config.fetch.to_fetcher_config())
        .context("Failed to create HTTP client")?;
    Ok(Arc::new(DatasetStore::new(
        Box::new(fetcher),
        config.sources.to_dataset_sources(),
    )))
}
