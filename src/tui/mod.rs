//! Interactive terminal UI using ratatui.
//!
//! One tab per dataset (conforming products, trust list, TSA trust list),
//! each a filterable table with a details modal.
//!
//! # Architecture
//!
//! - [`ExplorerApp`] holds all UI state; every filter mutation re-derives the
//!   visible rows immediately.
//! - [`events`] turns terminal input and background loads into state changes.
//!   Datasets arrive as [`Event::Loaded`] from loader threads, so rendering
//!   never waits on the network.
//! - `views` and `widgets` are pure render functions over the state.

mod app;
pub(crate) mod clipboard;
pub(crate) mod constants;
pub mod events;
mod logging;
pub mod state;
pub mod theme;
mod ui;
pub mod viewmodel;
pub(crate) mod views;
pub(crate) mod widgets;

pub use app::{CertificateTab, ExplorerApp, ExplorerTab, PickerOption, ProductsTab};
pub use events::{Event, EventHandler};
pub use logging::{terminal_active, LogWriter};
pub use state::{ListNavigation, ListState};
pub use theme::{colors, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme};
pub use ui::{render, run_explorer_tui};
pub use viewmodel::{
    CycleFilter, OptionCycle, OverlayKind, OverlayState, PickerState, SearchInput, StatusMessage,
};
