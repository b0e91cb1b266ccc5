//! Non-interactive listings of the datasets.
//!
//! - Table: aligned terminal output, optionally colored
//! - JSON: the normalized records with a small metadata envelope

mod json;
mod table;
mod types;

pub use json::JsonReporter;
pub use table::TableReporter;
pub use types::ReportFormat;

use crate::model::{Certificate, DatasetKind, Product};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a filtered, sorted product listing.
    fn generate_products_report(&self, products: &[&Product]) -> Result<String, ReportError>;

    /// Render a certificate listing for one of the trust lists.
    fn generate_certificates_report(
        &self,
        kind: DatasetKind,
        certificates: &[&Certificate],
    ) -> Result<String, ReportError>;

    /// Write a product report to a writer
    fn write_products_report(
        &self,
        products: &[&Product],
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_products_report(products)?;
        writeln!(writer, "{report}")?;
        Ok(())
    }

    /// Write a certificate report to a writer
    fn write_certificates_report(
        &self,
        kind: DatasetKind,
        certificates: &[&Certificate],
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_certificates_report(kind, certificates)?;
        writeln!(writer, "{report}")?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Build the reporter for `format`.
#[must_use]
pub fn create_reporter(format: ReportFormat, colored: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Table if colored => Box::new(TableReporter::new()),
        ReportFormat::Table => Box::new(TableReporter::new().no_color()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_matches_format() {
        for format in [ReportFormat::Table, ReportFormat::Json] {
            assert_eq!(create_reporter(format, false).format(), format);
        }
    }

    #[test]
    fn test_write_appends_newline() {
        let reporter = create_reporter(ReportFormat::Table, false);
        let mut out = Vec::new();
        reporter.write_products_report(&[], &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with('\n'));
    }
}
