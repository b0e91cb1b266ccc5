//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::model::{Certificate, DatasetKind, Product};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, kind: DatasetKind, items: &[&T]) -> Result<String, ReportError> {
        let report = JsonReport {
            dataset: kind,
            source: kind.browse_url(),
            generated_at: Utc::now().to_rfc3339(),
            count: items.len(),
            items,
        };
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a, T> {
    dataset: DatasetKind,
    source: &'static str,
    generated_at: String,
    count: usize,
    items: &'a [&'a T],
}

impl ReportGenerator for JsonReporter {
    fn generate_products_report(&self, products: &[&Product]) -> Result<String, ReportError> {
        self.render(DatasetKind::Products, products)
    }

    fn generate_certificates_report(
        &self,
        kind: DatasetKind,
        certificates: &[&Certificate],
    ) -> Result<String, ReportError> {
        self.render(kind, certificates)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
