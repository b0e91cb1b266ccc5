//! Overlay state management.

/// Available overlay types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// Help/shortcuts overlay
    Help,
    /// Details modal for the selected row
    Details,
    /// Media-type multi-select
    MediaPicker,
    /// File-format multi-select
    FormatPicker,
}

/// Manages overlay visibility with mutual exclusion.
///
/// Only one overlay can be visible at a time; showing a new overlay
/// closes the previous one.
#[derive(Debug, Clone, Default)]
pub struct OverlayState {
    current: Option<OverlayKind>,
}

impl OverlayState {
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    #[must_use]
    pub const fn has_overlay(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn is_showing(&self, kind: OverlayKind) -> bool {
        self.current == Some(kind)
    }

    #[must_use]
    pub const fn current(&self) -> Option<OverlayKind> {
        self.current
    }

    /// Show a specific overlay, closing any other.
    pub fn show(&mut self, kind: OverlayKind) {
        self.current = Some(kind);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// If the overlay is showing, close it. Otherwise, show it.
    pub fn toggle(&mut self, kind: OverlayKind) {
        if self.current == Some(kind) {
            self.current = None;
        } else {
            self.current = Some(kind);
        }
    }

    pub fn toggle_help(&mut self) {
        self.toggle(OverlayKind::Help);
    }
}
