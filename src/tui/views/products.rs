//! Products tab: filter bar, table, details modal and the multi-select pickers.

use super::{detail_line, display_date, section_line};
use crate::filter::MEDIA_TYPES;
use crate::model::Product;
use crate::tui::app::ExplorerApp;
use crate::tui::constants::{EMPTY_LIST_MESSAGE, MODAL_HEIGHT_PERCENT, MODAL_WIDTH_PERCENT};
use crate::tui::theme::{colors, filter_badge, Styles};
use crate::tui::viewmodel::{CycleFilter, OptionCycle, OverlayKind};
use crate::tui::widgets::{self, centered_rect, render_empty_state, render_selection_counter};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table},
};

pub fn render_products(frame: &mut Frame, area: Rect, app: &mut ExplorerApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    render_filter_bar(frame, chunks[0], app);
    render_table(frame, chunks[1], app);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let tab = &app.products;
    let filter = &tab.filter;

    let mut first = Vec::new();
    first.extend(filter_badge(
        "Vendor",
        OptionCycle::display(&filter.vendor),
        !filter.vendor.is_empty(),
    ));
    first.push(Span::raw("  "));
    first.extend(filter_badge(
        "Type",
        OptionCycle::display(&filter.product_type),
        !filter.product_type.is_empty(),
    ));
    first.push(Span::raw("  "));
    first.extend(filter_badge(
        "Assurance",
        OptionCycle::display(&filter.assurance_level),
        !filter.assurance_level.is_empty(),
    ));
    first.push(Span::raw("  "));
    first.extend(filter_badge("Sort", filter.sort.display_name(), false));

    let media = join_or_all(filter.media_types().iter().map(|m| media_label(m)));
    let formats = join_or_all(filter.formats().iter().map(String::as_str));
    let mut second = Vec::new();
    second.extend(filter_badge(
        "Media",
        &media,
        !filter.media_types().is_empty(),
    ));
    second.push(Span::raw("  "));
    second.extend(filter_badge("Formats", &formats, !filter.formats().is_empty()));
    if !filter.search.is_empty() {
        second.push(Span::raw("  "));
        second.extend(filter_badge("Search", &filter.search, true));
    }
    second.push(Span::styled(
        format!("   {} of {} products", tab.visible.len(), tab.products.len()),
        Styles::text_muted(),
    ));

    let bar = Paragraph::new(vec![Line::from(first), Line::from(second)]).block(
        Block::default()
            .title(" Filters ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(bar, area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &mut ExplorerApp) {
    let scheme = colors();
    let tab = &mut app.products;

    if tab.visible.is_empty() {
        let hint = tab.filter.is_active().then_some("Press [r] to reset filters");
        render_empty_state(frame, area, EMPTY_LIST_MESSAGE, hint);
        return;
    }

    let rows: Vec<Row> = tab
        .visible_products()
        .map(|p| {
            Row::new(vec![
                Cell::from(widgets::truncate_str(&p.product_name, 32)),
                Cell::from(widgets::truncate_str(&p.vendor_name, 24)),
                Cell::from(Span::styled(
                    p.product_type.clone(),
                    Style::default().fg(scheme.product_type_color(&p.product_type)),
                )),
                Cell::from(Span::styled(
                    p.assurance_level.clone(),
                    Style::default().fg(scheme.assurance),
                )),
                Cell::from(display_date(&p.conformance_date).to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(32),
        Constraint::Percentage(24),
        Constraint::Length(11),
        Constraint::Length(10),
        Constraint::Length(12),
    ];
    let header = Row::new(vec!["Product", "Vendor", "Type", "Assurance", "Conformance"])
        .style(Style::default().fg(scheme.accent).bold());

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(" Conforming Products ")
                .title_style(Styles::section_title())
                .borders(Borders::ALL)
                .border_style(Styles::border_focused()),
        )
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = tab.list.table_state();
    frame.render_stateful_widget(table, area, &mut state);
    tab.list.save_offset(&state);
}

/// Display label of a media-type key.
fn media_label(key: &str) -> &str {
    MEDIA_TYPES
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, label)| *label)
}

fn join_or_all<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let joined = values.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "All".to_string()
    } else {
        joined
    }
}

/// Lines of the products details modal.
#[must_use]
fn product_detail_lines(product: &Product) -> Vec<Line<'static>> {
    let mut lines = vec![
        section_line("Product"),
        detail_line("Name", product.product_name.clone()),
        detail_line("Vendor", product.vendor_name.clone()),
        detail_line("Organization", product.organization.clone()),
        detail_line("Organizational unit", product.organizational_unit.clone()),
        detail_line("Country", product.country.clone()),
        detail_line("Version", product.product_version.clone()),
        detail_line("Type", product.product_type.clone()),
        detail_line("Assurance", product.assurance_level.clone()),
        detail_line("Record id", product.record_id.clone()),
        Line::from(""),
        section_line("Conformance"),
        detail_line("Status", product.status.clone()),
        detail_line("Spec versions", product.spec_versions.join(", ")),
        detail_line("Program version", product.conformance_program_version.clone()),
        detail_line("Application date", display_date(&product.creation_date).to_string()),
        detail_line("Conformance date", display_date(&product.conformance_date).to_string()),
        detail_line(
            "Public disclosure",
            display_date(&product.earliest_public_disclosure_date).to_string(),
        ),
        detail_line(
            "Last modified",
            display_date(&product.last_modification_date).to_string(),
        ),
        Line::from(""),
        section_line("Supported formats"),
    ];

    if product.formats_by_media_type.is_empty() {
        lines.push(Line::styled("  none listed", Styles::text_muted()));
    }
    for (media, formats) in &product.formats_by_media_type {
        lines.push(detail_line(
            &format!("  {}", media_label(media)),
            formats.join(", "),
        ));
    }
    lines
}

/// Details modal for the selected product.
pub fn render_product_details(frame: &mut Frame, area: Rect, app: &mut ExplorerApp) {
    let Some(product) = app.products.selected() else {
        return;
    };
    let title = product.product_name.clone();
    let lines = product_detail_lines(product);
    app.detail_scroll = widgets::render_modal(
        frame,
        area,
        &title,
        lines,
        (MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT),
        app.detail_scroll,
    );
}

/// Media-type or format multi-select.
pub fn render_picker(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let title = if app.overlays.is_showing(OverlayKind::FormatPicker) {
        "File formats"
    } else {
        "Media types"
    };
    let options = app.picker_options();
    let checked = options.iter().filter(|o| o.checked).count();

    let popup_area = centered_rect(40, 60, area);
    frame.render_widget(Clear, popup_area);

    let scheme = colors();
    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let mark = if option.checked { "[x]" } else { "[ ]" };
            let style = if i == app.picker.cursor {
                Styles::selected()
            } else {
                Styles::text()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{mark} "), Style::default().fg(scheme.accent)),
                Span::styled(option.label.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {title} "))
            .title_style(Styles::section_title())
            .title_bottom(Line::from(render_selection_counter(checked, options.len())))
            .borders(Borders::ALL)
            .border_style(Styles::border_focused()),
    );
    frame.render_widget(list, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_detail_lines_list_formats_per_media_type() {
        let product = Product {
            product_name: "Cam".to_string(),
            formats_by_media_type: BTreeMap::from([
                ("image".to_string(), vec!["jpeg".to_string(), "png".to_string()]),
                ("mlModel".to_string(), vec!["onnx".to_string()]),
            ]),
            ..Default::default()
        };
        let lines = product_detail_lines(&product);
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(text.contains(&"  Image: jpeg, png".to_string()));
        assert!(text.contains(&"  ML Model: onnx".to_string()));
        assert!(text.contains(&"Name: Cam".to_string()));
    }

    #[test]
    fn test_media_label_falls_back_to_key() {
        assert_eq!(media_label("fonts"), "Fonts");
        assert_eq!(media_label("hologram"), "hologram");
    }
}
