//! Terminal setup, main loop and top-level layout of the explorer.

use super::app::{ExplorerApp, ExplorerTab};
use super::events::{handle_event, EventHandler, Event};
use super::theme::{colors, render_footer_hints, set_theme, FooterHints, Styles, Theme};
use super::viewmodel::OverlayKind;
use super::views;
use super::widgets::{self, check_terminal_size, render_size_warning, MIN_HEIGHT, MIN_WIDTH};
use crate::config::TuiConfig;
use crate::fetch::DatasetStore;
use crate::model::DatasetKind;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};
use super::logging::{flush_deferred, set_terminal_active};
use std::io::{self, stdout};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Run the explorer TUI until the user quits.
///
/// Each dataset is loaded on its own thread through `store`; results arrive
/// as [`Event::Loaded`] so the first frame draws immediately.
pub fn run_explorer_tui(
    app: &mut ExplorerApp,
    store: Arc<DatasetStore>,
    config: &TuiConfig,
) -> io::Result<()> {
    set_theme(Theme::detect());

    let events = EventHandler::new(Duration::from_millis(config.tick_rate_ms));
    spawn_loaders(&store, &events);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    if config.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    set_terminal_active(true);
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, app, &events);

    // Restore terminal
    set_terminal_active(false);
    disable_raw_mode()?;
    if config.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;
    flush_deferred()?;

    result
}

fn spawn_loaders(store: &Arc<DatasetStore>, events: &EventHandler) {
    for kind in DatasetKind::ALL {
        let store = Arc::clone(store);
        let tx = events.sender();
        thread::spawn(move || {
            let dataset = store.load(kind);
            // The receiver is gone once the user quit; nothing left to do.
            let _ = tx.send(Event::Loaded(dataset));
        });
    }
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut ExplorerApp,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;
        handle_event(app, events.next()?);
        if app.should_quit {
            return Ok(());
        }
    }
}

/// Main render function.
pub fn render(frame: &mut Frame, app: &mut ExplorerApp) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    // Main layout: header, tabs, content, status bar, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(2), // Tabs
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_tabs(frame, chunks[1], app);

    // A dataset that has not arrived yet renders like an empty one.
    let tab = app.active_tab();
    match tab {
        ExplorerTab::Products => views::render_products(frame, chunks[2], app),
        ExplorerTab::TrustList | ExplorerTab::TsaTrustList => {
            views::render_certificates(frame, chunks[2], app, tab.dataset());
        }
    }

    render_status_bar(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);

    match app.overlays.current() {
        Some(OverlayKind::Help) => render_help_overlay(frame, area),
        Some(OverlayKind::Details) => match tab {
            ExplorerTab::Products => views::render_product_details(frame, area, app),
            _ => views::render_certificate_details(frame, area, app),
        },
        Some(OverlayKind::MediaPicker | OverlayKind::FormatPicker) => {
            views::render_picker(frame, area, app);
        }
        None => {}
    }

    if app.search.active {
        render_search_overlay(frame, area, app);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header_line = Line::from(vec![
        Span::styled("c2pa-explorer", Styles::header_title()),
        Span::styled(" │ ", Style::default().fg(colors().muted)),
        Span::styled(
            "C2PA conformance datasets",
            Style::default().fg(colors().text_muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(header_line), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let tabs: Vec<(String, String)> = ExplorerTab::ALL
        .iter()
        .map(|tab| {
            let title = format!("{} ({})", tab.title(), app.visible_count(*tab));
            (tab.shortcut().to_string(), title)
        })
        .collect();

    let spans = widgets::tab_bar_spans(&tabs, app.active_tab().index());
    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Styles::border()),
    );
    frame.render_widget(bar, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let kind = app.active_tab().dataset();
    let mut spans = vec![
        Span::styled(" Source: ", Styles::text_muted()),
        Span::styled(kind.browse_url(), Style::default().fg(colors().primary)),
    ];
    if let Some(msg) = app.status.peek() {
        spans.push(Span::styled(" │ ", Style::default().fg(colors().muted)));
        spans.push(Span::styled(
            msg.to_string(),
            Style::default().fg(colors().accent).bold(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::status_bar()), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let hints = match app.overlays.current() {
        Some(OverlayKind::Details) => {
            FooterHints::details(app.active_tab() != ExplorerTab::Products)
        }
        Some(OverlayKind::MediaPicker | OverlayKind::FormatPicker) => FooterHints::picker(),
        Some(OverlayKind::Help) => vec![("Esc", "close")],
        None => match app.active_tab() {
            ExplorerTab::Products => {
                FooterHints::products(!app.products.filter.media_types().is_empty())
            }
            _ => FooterHints::certificates(),
        },
    };

    let footer = Paragraph::new(Line::from(render_footer_hints(&hints)))
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors().text_muted));
    frame.render_widget(footer, area);
}

fn help_line(keys: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<15}"), Style::default().fg(colors().accent)),
        Span::styled(desc, Style::default().fg(colors().text)),
    ])
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = widgets::centered_rect(65, 80, area);
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::styled(
            "━━━ C2PA Explorer Help ━━━",
            Style::default().fg(colors().accent).bold(),
        ),
        Line::from(""),
        Line::styled("Navigation", Styles::section_title()),
        help_line("1-3", "Jump to tab (Products/Trust List/TSA Trust List)"),
        help_line("Tab", "Next tab / Shift+Tab previous tab"),
        help_line("↑/↓ or j/k", "Move selection"),
        help_line("PgUp/PgDown", "Move by page"),
        help_line("Home/End", "First / last row"),
        help_line("Enter", "Open details"),
        Line::from(""),
        Line::styled("Filters", Styles::section_title()),
        help_line("/", "Search (Enter keeps, Esc clears)"),
        help_line("v / V", "Next / previous vendor"),
        help_line("t", "Cycle product type"),
        help_line("a", "Cycle assurance level"),
        help_line("m", "Pick media types"),
        help_line("f", "Pick file formats (needs a media type)"),
        help_line("s", "Cycle sort order"),
        help_line("o / O", "Next / previous organization"),
        help_line("r", "Reset filters of the current tab"),
        Line::from(""),
        Line::styled("Details", Styles::section_title()),
        help_line("c", "Copy certificate PEM to clipboard"),
        help_line("Esc", "Close"),
        Line::from(""),
        Line::styled("General", Styles::section_title()),
        help_line("d", "Toggle dark/light theme"),
        help_line("?", "Toggle this help"),
        help_line("q", "Quit"),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border_focused()),
    );
    frame.render_widget(help, popup_area);
}

fn render_search_overlay(frame: &mut Frame, area: Rect, app: &ExplorerApp) {
    let width = area.width.saturating_sub(4).min(60);
    let search_area = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + 3,
        width,
        3,
    );
    frame.render_widget(Clear, search_area);

    let input = Paragraph::new(Line::from(vec![
        Span::styled("/", Style::default().fg(colors().accent).bold()),
        Span::styled(app.search.query.clone(), Styles::text()),
        Span::styled("█", Style::default().fg(colors().accent)),
    ]))
    .block(
        Block::default()
            .title(format!(" Search {} ", app.active_tab().title()))
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border_focused()),
    );
    frame.render_widget(input, search_area);
}
