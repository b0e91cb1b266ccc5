//! One-time, memoized loading of the published datasets.
//!
//! [`DatasetStore`] owns one [`SharedDataset`] per dataset. The first caller
//! of e.g. [`DatasetStore::products`] fetches and normalizes the resource;
//! every later or concurrent caller shares the same `Arc`. Failures are
//! logged and degrade to an empty collection.

mod client;
mod shared;
mod source;
mod store;

pub use client::{FetcherConfig, HttpFetcher, TextFetcher, DEFAULT_USER_AGENT};
pub use shared::SharedDataset;
pub use source::{DatasetSource, DatasetSources};
pub use store::{DatasetStore, LoadedDataset};
