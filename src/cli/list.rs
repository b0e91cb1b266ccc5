//! Listing command handlers: `products`, `trust-list`, `tsa-trust-list`.
//!
//! These run the same filter/sort engine as the TUI and print the result
//! through a [`ReportGenerator`](crate::reports::ReportGenerator).

use super::output::{should_use_color, write_output, OutputTarget};
use super::exit_codes;
use crate::fetch::DatasetStore;
use crate::filter::{CertificateFilter, ProductFilter};
use crate::model::DatasetKind;
use crate::reports::{create_reporter, ReportFormat};
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Output options shared by the listing commands.
#[derive(Debug, Clone, Default)]
pub struct ListOutput {
    pub format: ReportFormat,
    /// Output file (stdout when `None`)
    pub file: Option<PathBuf>,
    pub no_color: bool,
    pub quiet: bool,
}

impl ListOutput {
    fn target(&self) -> OutputTarget {
        OutputTarget::from_option(self.file.clone())
    }

    /// Colors only make sense on a terminal.
    fn colored(&self, target: &OutputTarget) -> bool {
        should_use_color(self.no_color) && target.is_terminal()
    }
}

/// Print the conforming products that pass `filter`.
pub fn run_products(
    store: &DatasetStore,
    filter: &ProductFilter,
    output: &ListOutput,
) -> Result<i32> {
    let products = store.products();
    let visible = filter.apply(&products);
    tracing::debug!(
        total = products.len(),
        shown = visible.len(),
        "filtered conforming products"
    );

    let target = output.target();
    let reporter = create_reporter(output.format, output.colored(&target));
    let report = reporter.generate_products_report(&visible)?;
    write_output(&report, &target, output.quiet)?;

    Ok(exit_codes::SUCCESS)
}

/// Print the certificates of a trust list that pass `filter`.
pub fn run_certificates(
    store: &DatasetStore,
    kind: DatasetKind,
    filter: &CertificateFilter,
    output: &ListOutput,
) -> Result<i32> {
    if kind == DatasetKind::Products {
        bail!("{kind} is not a certificate dataset");
    }
    let certificates = store.certificates(kind);
    let visible = filter.apply(&certificates);
    tracing::debug!(
        dataset = %kind,
        total = certificates.len(),
        shown = visible.len(),
        "filtered certificates"
    );

    let target = output.target();
    let reporter = create_reporter(output.format, output.colored(&target));
    let report = reporter.generate_certificates_report(kind, &visible)?;
    write_output(&report, &target, output.quiet)?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{DatasetSource, DatasetSources, TextFetcher};
    use tempfile::TempDir;

    struct FixedFetcher;

    impl TextFetcher for FixedFetcher {
        fn fetch_text(&self, source: &DatasetSource) -> crate::error::Result<String> {
            Ok(if source.to_string().ends_with(".json") {
                r#"[
                    {"recordId": "r1", "applicant": "Acme", "product": {"productType": "generatorProduct", "DN": {"CN": "Cam"}}, "dates": {"conformance": "2024-01-01"}},
                    {"recordId": "r2", "applicant": "Beta", "product": {"productType": "validatorProduct", "DN": {"CN": "Check"}}, "dates": {"conformance": "2024-03-01"}}
                ]"#
                .to_string()
            } else {
                "CN=Root, O=Example\n-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n"
                    .to_string()
            })
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn store() -> DatasetStore {
        DatasetStore::new(Box::new(FixedFetcher), DatasetSources::default())
    }

    fn json_output(dir: &TempDir, name: &str) -> (ListOutput, PathBuf) {
        let path = dir.path().join(name);
        let output = ListOutput {
            format: ReportFormat::Json,
            file: Some(path.clone()),
            quiet: true,
            ..Default::default()
        };
        (output, path)
    }

    #[test]
    fn test_products_report_respects_filter() {
        let dir = TempDir::new().unwrap();
        let (output, path) = json_output(&dir, "products.json");
        let mut filter = ProductFilter::new();
        filter.vendor = "Beta".to_string();

        assert_eq!(run_products(&store(), &filter, &output).unwrap(), 0);
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["recordId"], "r2");
    }

    #[test]
    fn test_certificates_report() {
        let dir = TempDir::new().unwrap();
        let (output, path) = json_output(&dir, "trust.json");
        run_certificates(
            &store(),
            DatasetKind::TrustList,
            &CertificateFilter::new(),
            &output,
        )
        .unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["items"][0]["commonName"], "Root");
    }

    #[test]
    fn test_products_kind_is_not_a_certificate_list() {
        let result = run_certificates(
            &store(),
            DatasetKind::Products,
            &CertificateFilter::new(),
            &ListOutput::default(),
        );
        assert!(result.is_err());
    }
}
