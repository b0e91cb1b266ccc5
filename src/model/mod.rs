//! Data model for the C2PA conformance datasets.
//!
//! Upstream records are deserialized into the `Raw*` types, which mirror the
//! published JSON. Fields of an unexpected shape decode to their empty value
//! rather than rejecting the record. The normalizers in [`crate::parsers`]
//! turn them into the flat, display-ready [`Product`] and [`Certificate`]
//! records that the filters, reports and TUI work with.

mod certificate;
mod dataset;
pub(crate) mod lenient;
mod product;

pub use certificate::Certificate;
pub use dataset::DatasetKind;
pub use product::{
    ContainerFormats, Product, RawAssurance, RawContainers, RawDates, RawDistinguishedName,
    RawProduct, RawProductDescriptor, NOT_AVAILABLE,
};
