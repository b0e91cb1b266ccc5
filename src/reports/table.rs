//! Aligned table output.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::model::{Certificate, DatasetKind, Product};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if !colored {
        return text.to_string();
    }
    let code = match color {
        "bold" => "1",
        "dim" => "2",
        "green" => "32",
        "yellow" => "33",
        "cyan" => "36",
        _ => return text.to_string(),
    };
    format!("\x1b[{code}m{text}\x1b[0m")
}

/// Table reporter
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    /// Pad then color, so escape codes do not disturb alignment.
    fn cell(&self, text: &str, width: usize, color: &str) -> String {
        self.color(&pad(&truncate(text, width), width), color)
    }

    fn row(&self, cells: &[(&str, usize)], color: &str) -> String {
        cells
            .iter()
            .map(|(text, width)| self.cell(text, *width, color))
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

const PRODUCT_COLUMNS: [(&str, usize); 6] = [
    ("RECORD", 14),
    ("PRODUCT", 32),
    ("VENDOR", 24),
    ("TYPE", 10),
    ("ASSURANCE", 10),
    ("CONFORMANCE", 12),
];

const CERTIFICATE_COLUMNS: [(&str, usize); 3] = [("ID", 5), ("COMMON NAME", 48), ("ORGANIZATION", 36)];

impl ReportGenerator for TableReporter {
    fn generate_products_report(&self, products: &[&Product]) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        lines.push(self.row(&PRODUCT_COLUMNS, "bold"));
        lines.push("─".repeat(table_width(&PRODUCT_COLUMNS)));

        for product in products {
            let date = product
                .conformance_date
                .get(..10)
                .unwrap_or(product.conformance_date.as_str());
            lines.push(self.row(
                &[
                    (product.record_id.as_str(), PRODUCT_COLUMNS[0].1),
                    (product.product_name.as_str(), PRODUCT_COLUMNS[1].1),
                    (product.vendor_name.as_str(), PRODUCT_COLUMNS[2].1),
                    (product.product_type.as_str(), PRODUCT_COLUMNS[3].1),
                    (product.assurance_level.as_str(), PRODUCT_COLUMNS[4].1),
                    (date, PRODUCT_COLUMNS[5].1),
                ],
                "",
            ));
        }

        lines.push(String::new());
        lines.push(self.color(
            &format!("Total: {} products | {}", products.len(), DatasetKind::Products.browse_url()),
            "dim",
        ));
        Ok(lines.join("\n"))
    }

    fn generate_certificates_report(
        &self,
        kind: DatasetKind,
        certificates: &[&Certificate],
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        lines.push(self.row(&CERTIFICATE_COLUMNS, "bold"));
        lines.push("─".repeat(table_width(&CERTIFICATE_COLUMNS)));

        for cert in certificates {
            let id = cert.id.to_string();
            lines.push(self.row(
                &[
                    (id.as_str(), CERTIFICATE_COLUMNS[0].1),
                    (cert.common_name.as_str(), CERTIFICATE_COLUMNS[1].1),
                    (cert.organization.as_str(), CERTIFICATE_COLUMNS[2].1),
                ],
                "",
            ));
        }

        lines.push(String::new());
        lines.push(self.color(
            &format!("Total: {} certificates in {kind} | {}", certificates.len(), kind.browse_url()),
            "dim",
        ));
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

fn table_width(columns: &[(&str, usize)]) -> usize {
    columns.iter().map(|(_, w)| w).sum::<usize>() + columns.len().saturating_sub(1)
}

/// Truncate to `max_width` display columns, marking the cut with "...".
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    if max_width > 3 {
        out.push_str("...");
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_rows() {
        let product = Product {
            record_id: "rec-1".to_string(),
            product_name: "A product name that is far too long for its column".to_string(),
            vendor_name: "Acme".to_string(),
            product_type: "Generator".to_string(),
            assurance_level: "Level 1".to_string(),
            conformance_date: "2024-05-01T00:00:00Z".to_string(),
            ..Default::default()
        };
        let report = TableReporter::new()
            .no_color()
            .generate_products_report(&[&product])
            .unwrap();
        let lines: Vec<_> = report.lines().collect();

        assert!(lines[0].starts_with("RECORD"));
        assert!(lines[2].contains("rec-1"));
        assert!(lines[2].contains("..."));
        assert!(lines[2].ends_with("2024-05-01"));
        assert!(report.contains("Total: 1 products"));
    }

    #[test]
    fn test_certificate_rows() {
        let cert = Certificate {
            id: 7,
            common_name: "Example Root CA".to_string(),
            organization: "Example Org".to_string(),
            ..Default::default()
        };
        let report = TableReporter::new()
            .no_color()
            .generate_certificates_report(DatasetKind::TrustList, &[&cert])
            .unwrap();
        assert!(report.lines().nth(2).unwrap().starts_with("7 "));
        assert!(report.contains("C2PA Trust List"));
    }

    #[test]
    fn test_colored_header() {
        let report = TableReporter::new().generate_products_report(&[]).unwrap();
        assert!(report.starts_with("\x1b[1m"));
    }

    #[test]
    fn test_truncate_is_width_aware() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 6), "abc...");
        assert_eq!(truncate("日本語テキスト", 7), "日本...");
    }
}
