//! Reusable widgets for the explorer TUI.

use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render an empty state placeholder.
pub fn render_empty_state(
    frame: &mut ratatui::Frame,
    area: Rect,
    message: &str,
    hint: Option<&str>,
) {
    let scheme = colors();
    let mut lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(scheme.text_muted)),
    ];

    if let Some(h) = hint {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            h.to_string(),
            Style::default().fg(scheme.text_muted).italic(),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.border)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render a scrollable modal over `area`.
///
/// `scroll` is clamped so the last page of content stays visible; the
/// clamped value is returned so the caller can store it back.
pub fn render_modal(
    frame: &mut ratatui::Frame,
    area: Rect,
    title: &str,
    content: Vec<Line<'static>>,
    (percent_x, percent_y): (u16, u16),
    scroll: u16,
) -> u16 {
    let popup_area = centered_rect(percent_x, percent_y, area);
    frame.render_widget(Clear, popup_area);

    let inner_height = popup_area.height.saturating_sub(2);
    let max_scroll = u16::try_from(content.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(inner_height);
    let scroll = scroll.min(max_scroll);

    let border_color = colors().border_focused;
    let popup = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_style(Style::default().fg(border_color).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(popup, popup_area);
    scroll
}

/// Helper function to create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Truncate a string with ellipsis, using Unicode display width for accuracy.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let budget = if max_width > 3 { max_width - 3 } else { max_width };
    let mut width = 0;
    let truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();
    if max_width > 3 {
        format!("{truncated}...")
    } else {
        truncated
    }
}

/// Tab spans: `[1] Products (42) │ [2] Trust List (7)`.
pub fn tab_bar_spans(tabs: &[(String, String)], selected: usize) -> Vec<Span<'static>> {
    let scheme = colors();
    let mut spans = vec![];

    for (i, (shortcut, name)) in tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(scheme.border)));
        }
        if i == selected {
            spans.push(Span::styled(
                format!("[{shortcut}]"),
                Style::default().fg(scheme.accent).bold(),
            ));
            spans.push(Span::styled(
                format!(" {name} "),
                Style::default()
                    .fg(scheme.badge_fg_dark)
                    .bg(scheme.accent)
                    .bold(),
            ));
        } else {
            spans.push(Span::styled(
                format!("[{shortcut}]"),
                Style::default().fg(scheme.text_muted),
            ));
            spans.push(Span::styled(
                format!(" {name} "),
                Style::default().fg(scheme.text_muted),
            ));
        }
    }

    spans
}

/// Render a selection counter (for multi-select).
pub fn render_selection_counter(selected: usize, total: usize) -> Span<'static> {
    if selected > 0 {
        Span::styled(
            format!(" {selected}/{total} selected "),
            Style::default()
                .fg(colors().badge_fg_dark)
                .bg(colors().accent)
                .bold(),
        )
    } else {
        Span::styled(format!(" 0/{total} "), Style::default().fg(colors().text_muted))
    }
}

// ============================================================================
// Minimum Size Check
// ============================================================================

/// Minimum terminal size requirements.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

/// Check if terminal meets minimum size requirements.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(
    frame: &mut ratatui::Frame,
    area: Rect,
    required_width: u16,
    required_height: u16,
) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(colors().warning).bold(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(colors().accent),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().warning)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
