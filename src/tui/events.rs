//! Event handling for the `ExplorerApp`.

use super::app::{ExplorerApp, ExplorerTab};
use super::viewmodel::OverlayKind;
use crate::fetch::LoadedDataset;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Terminal and loader events.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    /// A dataset finished loading on a background thread.
    Loaded(LoadedDataset),
}

/// Event handler.
///
/// A dedicated thread polls the terminal; loader threads post into the same
/// channel through [`EventHandler::sender`].
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    tx: mpsc::Sender<Event>,
}

impl EventHandler {
    #[must_use]
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let event_tx = tx.clone();
        thread::spawn(move || loop {
            let event = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                    Ok(CrosstermEvent::Mouse(mouse)) => Event::Mouse(mouse),
                    Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                    _ => continue,
                }
            } else {
                Event::Tick
            };
            if event_tx.send(event).is_err() {
                break;
            }
        });

        Self { rx, tx }
    }

    /// A sender for posting events from other threads.
    #[must_use]
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.tx.clone()
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

/// Dispatch one event to the app.
pub fn handle_event(app: &mut ExplorerApp, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Loaded(dataset) => app.apply_loaded(dataset),
        Event::Tick => app.on_tick(),
        Event::Resize(_, _) => {}
    }
}

/// Handle key events for `ExplorerApp`.
pub fn handle_key_event(app: &mut ExplorerApp, key: KeyEvent) {
    // Windows terminals report releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.search.active {
        handle_search_key(app, key);
        return;
    }

    match app.overlays.current() {
        Some(OverlayKind::Help) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q' | '?')) {
                app.overlays.close();
            }
            return;
        }
        Some(OverlayKind::Details) => {
            handle_details_key(app, key);
            return;
        }
        Some(OverlayKind::MediaPicker | OverlayKind::FormatPicker) => {
            handle_picker_key(app, key);
            return;
        }
        None => {}
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.overlays.toggle_help(),
        KeyCode::Char('d') => app.toggle_theme(),
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char(c @ '1'..='3') => {
            if let Some(tab) = ExplorerTab::ALL.into_iter().find(|t| t.shortcut() == c) {
                app.select_tab(tab);
            }
        }
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('r') => app.reset_filters(),
        KeyCode::Enter => app.open_details(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Home | KeyCode::Char('g') => app.go_first(),
        KeyCode::End | KeyCode::Char('G') => app.go_last(),
        _ => match app.active_tab() {
            ExplorerTab::Products => handle_products_key(app, key),
            ExplorerTab::TrustList | ExplorerTab::TsaTrustList => {
                handle_certificates_key(app, key);
            }
        },
    }
}

fn handle_products_key(app: &mut ExplorerApp, key: KeyEvent) {
    match key.code {
        KeyCode::Char('v') => app.cycle_vendor(true),
        KeyCode::Char('V') => app.cycle_vendor(false),
        KeyCode::Char('t') => app.cycle_product_type(),
        KeyCode::Char('a') => app.cycle_assurance_level(),
        KeyCode::Char('m') => app.open_media_picker(),
        KeyCode::Char('f') => app.open_format_picker(),
        KeyCode::Char('s') => app.cycle_sort(),
        _ => {}
    }
}

fn handle_certificates_key(app: &mut ExplorerApp, key: KeyEvent) {
    match key.code {
        KeyCode::Char('o') => app.cycle_organization(true),
        KeyCode::Char('O') => app.cycle_organization(false),
        _ => {}
    }
}

fn handle_search_key(app: &mut ExplorerApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => app.confirm_search(),
        KeyCode::Backspace => app.search_pop_char(),
        KeyCode::Char(c) => app.search_push_char(c),
        _ => {}
    }
}

fn handle_details_key(app: &mut ExplorerApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.overlays.close(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_details_down(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_details_up(1),
        KeyCode::PageDown => app.page_details_down(),
        KeyCode::PageUp => app.page_details_up(),
        KeyCode::Home => app.detail_scroll = 0,
        KeyCode::Char('c') if app.active_tab() != ExplorerTab::Products => {
            app.copy_selected_pem();
        }
        _ => {}
    }
}

fn handle_picker_key(app: &mut ExplorerApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.overlays.close(),
        KeyCode::Down | KeyCode::Char('j') => app.picker_down(),
        KeyCode::Up | KeyCode::Char('k') => app.picker_up(),
        KeyCode::Char(' ' | 'x') => app.picker_toggle(),
        KeyCode::Char('c') => app.picker_clear(),
        _ => {}
    }
}

fn handle_mouse_event(app: &mut ExplorerApp, mouse: MouseEvent) {
    let details = app.overlays.is_showing(OverlayKind::Details);
    match mouse.kind {
        MouseEventKind::ScrollDown if details => app.scroll_details_down(1),
        MouseEventKind::ScrollUp if details => app.scroll_details_up(1),
        MouseEventKind::ScrollDown if !app.overlays.has_overlay() => app.select_next(),
        MouseEventKind::ScrollUp if !app.overlays.has_overlay() => app.select_prev(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Certificate;
    use std::sync::Arc;

    fn press(app: &mut ExplorerApp, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app_with_certificates() -> ExplorerApp {
        let mut app = ExplorerApp::new();
        let certificates: Vec<Certificate> = (0..3)
            .map(|id| Certificate {
                id,
                common_name: format!("CA {id}"),
                organization: format!("Org {id}"),
                subject: format!("CN=CA {id}, O=Org {id}"),
                ..Default::default()
            })
            .collect();
        handle_event(
            &mut app,
            Event::Loaded(LoadedDataset::Certificates(
                crate::model::DatasetKind::TrustList,
                Arc::new(certificates),
            )),
        );
        app
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let mut app = ExplorerApp::new();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_tab(), ExplorerTab::TsaTrustList);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_tab(), ExplorerTab::Products);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_tab(), ExplorerTab::TsaTrustList);
    }

    #[test]
    fn test_search_prompt_captures_keys() {
        let mut app = app_with_certificates();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.trust_list.filter.search, "q");

        press(&mut app, KeyCode::Esc);
        assert!(!app.search.active);
        assert!(app.trust_list.filter.search.is_empty());
    }

    #[test]
    fn test_esc_closes_overlay_before_quitting() {
        let mut app = app_with_certificates();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert!(app.overlays.is_showing(OverlayKind::Details));

        press(&mut app, KeyCode::Esc);
        assert!(!app.overlays.has_overlay());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_toggle() {
        let mut app = ExplorerApp::new();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.overlays.is_showing(OverlayKind::Help));
        press(&mut app, KeyCode::Char('?'));
        assert!(!app.overlays.has_overlay());
    }

    #[test]
    fn test_organization_keys_only_on_certificate_tabs() {
        let mut app = app_with_certificates();
        press(&mut app, KeyCode::Char('o'));
        assert!(app.trust_list.filter.organization.is_empty());

        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.trust_list.filter.organization, "Org 0");
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = app_with_certificates();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::End);
        assert_eq!(app.trust_list.list.selected, 2);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.trust_list.list.selected, 1);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.trust_list.list.selected, 0);
    }
}
