//! Trust-list tabs. Both certificate datasets render through this view.

use super::{detail_line, section_line};
use crate::model::{Certificate, DatasetKind};
use crate::parsers::extract_subject_field;
use crate::tui::app::ExplorerApp;
use crate::tui::constants::{EMPTY_LIST_MESSAGE, MODAL_HEIGHT_PERCENT, MODAL_WIDTH_PERCENT};
use crate::tui::theme::{colors, filter_badge, Styles};
use crate::tui::viewmodel::OptionCycle;
use crate::tui::widgets::{self, render_empty_state};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

pub fn render_certificates(frame: &mut Frame, area: Rect, app: &mut ExplorerApp, kind: DatasetKind) {
    let tab = match kind {
        DatasetKind::TrustList => &mut app.trust_list,
        DatasetKind::TsaTrustList => &mut app.tsa_trust_list,
        DatasetKind::Products => return,
    };
    let scheme = colors();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let mut spans = filter_badge(
        "Organization",
        OptionCycle::display(&tab.filter.organization),
        !tab.filter.organization.is_empty(),
    );
    if !tab.filter.search.is_empty() {
        spans.push(Span::raw("  "));
        spans.extend(filter_badge("Search", &tab.filter.search, true));
    }
    spans.push(Span::styled(
        format!(
            "   {} of {} certificates",
            tab.visible.len(),
            tab.certificates.len()
        ),
        Styles::text_muted(),
    ));
    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Filters ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(bar, chunks[0]);

    if tab.visible.is_empty() {
        let hint = tab.filter.is_active().then_some("Press [r] to reset filters");
        render_empty_state(frame, chunks[1], EMPTY_LIST_MESSAGE, hint);
        return;
    }

    let rows: Vec<Row> = tab
        .visible_certificates()
        .map(|c| {
            Row::new(vec![
                Cell::from(Span::styled(
                    widgets::truncate_str(&c.common_name, 48),
                    Style::default().fg(scheme.certificate),
                )),
                Cell::from(widgets::truncate_str(&c.organization, 40)),
                Cell::from(c.id.to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(55),
        Constraint::Percentage(35),
        Constraint::Length(6),
    ];
    let header = Row::new(vec!["Common name", "Organization", "Id"])
        .style(Style::default().fg(scheme.accent).bold());

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" {} ", kind.label()))
                .title_style(Styles::section_title())
                .borders(Borders::ALL)
                .border_style(Styles::border_focused()),
        )
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = tab.list.table_state();
    frame.render_stateful_widget(table, chunks[1], &mut state);
    tab.list.save_offset(&state);
}

/// Lines of the certificate details modal.
#[must_use]
fn certificate_detail_lines(certificate: &Certificate) -> Vec<Line<'static>> {
    let subject = &certificate.subject;
    let mut lines = vec![
        section_line("Subject"),
        Line::styled(subject.clone(), Styles::text()),
        Line::from(""),
        detail_line("Common name", certificate.common_name.clone()),
        detail_line("Organization", certificate.organization.clone()),
        detail_line("Organizational unit", extract_subject_field(subject, "OU")),
        detail_line("Country", extract_subject_field(subject, "C")),
        detail_line("Id", certificate.id.to_string()),
        detail_line("SHA-256", certificate.fingerprint.clone()),
        Line::from(""),
        section_line("PEM"),
    ];
    lines.extend(
        certificate
            .pem
            .lines()
            .map(|l| Line::styled(l.to_string(), Styles::text_muted())),
    );
    lines
}

/// Details modal for the selected certificate of the active tab.
pub fn render_certificate_details(frame: &mut Frame, area: Rect, app: &mut ExplorerApp) {
    let Some(certificate) = app.selected_certificate() else {
        return;
    };
    let title = certificate.common_name.clone();
    let lines = certificate_detail_lines(certificate);
    app.detail_scroll = widgets::render_modal(
        frame,
        area,
        &title,
        lines,
        (MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT),
        app.detail_scroll,
    );
}
