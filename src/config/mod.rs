//! Configuration for the explorer.
//!
//! Settings come from an optional YAML file layered under command-line
//! flags. Nothing is ever written back except by `config init`.
//!
//! # Configuration File
//!
//! Place a `.c2pa-explorer.yaml` file in the working directory or in
//! `~/.config/c2pa-explorer/`:
//!
//! ```yaml
//! sources:
//!   products: ./mirror/conforming-products-list.json
//! fetch:
//!   timeout_secs: 10
//! tui:
//!   mouse_enabled: false
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, FetchConfig, SourcesConfig, TuiConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config,
    init_config_file, load_config_file, load_or_default, ConfigFileError, CONFIG_FILE_NAME,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.c2pa-explorer.yaml`.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}
