//! **Browse the C2PA conformance datasets from the terminal.**
//!
//! `c2pa-explorer` loads the three datasets the C2PA conformance program
//! publishes and makes them searchable:
//!
//! - the **conforming-products list** (JSON), normalized into [`Product`] records;
//! - the **C2PA trust list** and the **TSA trust list** (PEM bundles), split into
//!   [`Certificate`] records with their subject fields extracted.
//!
//! Each dataset is fetched at most once per process through a [`DatasetStore`];
//! every consumer afterwards shares the same normalized collection.
//!
//! ## Modules
//!
//! - **[`model`]**: the normalized [`Product`] and [`Certificate`] records and [`DatasetKind`].
//! - **[`parsers`]**: turning raw JSON and PEM text into the model.
//! - **[`fetch`]**: dataset locations, the HTTP/file fetcher and the memoizing store.
//! - **[`filter`]**: pure filter and sort engines behind both the TUI and the CLI.
//! - **[`reports`]**: table and JSON renderings of filtered lists.
//! - **[`tui`]**: the tabbed interactive explorer.
//! - **[`config`]**: the optional `.c2pa-explorer.yaml` configuration file.
//!
//! ## Filtering a local copy of the products list
//!
//! ```no_run
//! use c2pa_explorer::{parse_products_str, ProductFilter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let json = std::fs::read_to_string("conforming-products-list.json")?;
//!     let products = parse_products_str(&json)?;
//!
//!     let mut filter = ProductFilter::new();
//!     filter.product_type = "Validator".to_string();
//!     filter.toggle_media_type("image");
//!
//!     for product in filter.apply(&products) {
//!         println!("{} ({})", product.product_name, product.vendor_name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Reading a trust list
//!
//! ```
//! use c2pa_explorer::parse_pem_bundle;
//!
//! let certificates = parse_pem_bundle("no certificates here");
//! assert!(certificates.is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! - `remote` (default): fetch `http(s)` sources with `reqwest`. Without it only
//!   local file sources can be loaded.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize/u16 casts are pervasive in TUI layout math and bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod model;
pub mod parsers;
pub mod reports;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigError, TuiConfig, Validatable};
pub use error::{ErrorContext, ExplorerError, FetchErrorKind, Result};
pub use fetch::{DatasetSource, DatasetSources, DatasetStore, HttpFetcher, TextFetcher};
pub use filter::{CertificateFilter, ProductFilter, ProductSortKey};
pub use model::{Certificate, DatasetKind, Product};
pub use parsers::{parse_pem_bundle, parse_products_str};
pub use reports::{ReportFormat, ReportGenerator};
