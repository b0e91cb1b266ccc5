//! Tab views of the explorer.

mod certificates;
mod products;

pub use certificates::{render_certificate_details, render_certificates};
pub use products::{render_picker, render_product_details, render_products};

use crate::tui::theme::Styles;
use ratatui::prelude::*;

/// `Label: value` line for a details modal.
pub(crate) fn detail_line(label: &str, value: impl Into<String>) -> Line<'static> {
    let value = value.into();
    let value = if value.is_empty() {
        crate::model::NOT_AVAILABLE.to_string()
    } else {
        value
    };
    Line::from(vec![
        Span::styled(format!("{label}: "), Styles::label()),
        Span::styled(value, Styles::value()),
    ])
}

/// Section heading inside a details modal.
pub(crate) fn section_line(title: &str) -> Line<'static> {
    Line::styled(title.to_string(), Styles::section_title())
}

/// Date portion of an ISO-8601 timestamp.
pub(crate) fn display_date(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-05-01T10:00:00Z"), "2024-05-01");
        assert_eq!(display_date("2024-05-01"), "2024-05-01");
        assert_eq!(display_date(""), "");
    }

    #[test]
    fn test_detail_line_placeholder() {
        let line = detail_line("Status", "");
        assert_eq!(line.spans[1].content, "N/A");
    }
}
