//! Centralized theme and color scheme for the TUI.
//!
//! Two schemes exist, dark and light. The starting scheme follows the
//! terminal background reported in `COLORFGBG`; `d` flips it for the rest of
//! the session. Nothing is persisted.

use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Semantic colors for UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Dataset colors
    pub generator: Color,
    pub validator: Color,
    pub assurance: Color,
    pub certificate: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,

    pub warning: Color,

    /// Foreground for text on bright badge backgrounds
    pub badge_fg_dark: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            generator: Color::Cyan,
            validator: Color::Magenta,
            assurance: Color::Yellow,
            certificate: Color::Green,

            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::DarkGray,
            warning: Color::Yellow,

            badge_fg_dark: Color::Black,
        }
    }

    /// Light theme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            generator: Color::Rgb(0, 100, 150),
            validator: Color::Rgb(128, 0, 128),
            assurance: Color::Rgb(180, 140, 0),
            certificate: Color::Rgb(0, 128, 0),

            primary: Color::Rgb(0, 100, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            selection: Color::Rgb(200, 220, 240),
            warning: Color::Rgb(180, 140, 0),

            badge_fg_dark: Color::Rgb(30, 30, 30),
        }
    }

    /// Color for a product-type label.
    #[must_use]
    pub fn product_type_color(&self, product_type: &str) -> Color {
        match product_type {
            "Generator" => self.generator,
            "Validator" => self.validator,
            _ => self.text_muted,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Theme configuration
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.name == "dark"
    }

    /// The other scheme.
    #[must_use]
    pub fn toggled(&self) -> Self {
        if self.is_dark() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Pick a scheme from a `COLORFGBG` value such as `"15;0"`.
    ///
    /// The last field is the background palette index: 7 and 9-15 are light
    /// backgrounds, everything else (or an unparseable value) is dark.
    #[must_use]
    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        let background = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match background {
            Some(7 | 9..=15) => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Scheme matching the terminal this process runs in.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Switch between dark and light, returning the new theme name.
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.toggled();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Label text style
    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Value text style (for data values)
    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    /// Selection style (for selected rows)
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }
}

/// Render a filter badge: muted label plus highlighted value.
pub fn filter_badge(label: &str, value: &str, active: bool) -> Vec<Span<'static>> {
    let scheme = colors();
    let value_style = if active {
        Style::default()
            .fg(scheme.badge_fg_dark)
            .bg(scheme.accent)
            .bold()
    } else {
        Style::default().fg(scheme.text_muted)
    };
    vec![
        Span::styled(format!("{label}: "), Style::default().fg(scheme.text_muted)),
        Span::styled(format!(" {value} "), value_style),
    ]
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Context-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Hints for the products tab.
    pub fn products(media_selected: bool) -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![
            ("v/V", "vendor"),
            ("t", "type"),
            ("a", "assurance"),
            ("m", "media"),
        ];
        if media_selected {
            hints.push(("f", "formats"));
        }
        hints.extend([("s", "sort"), ("r", "reset"), ("Enter", "details")]);
        hints.extend(Self::global());
        hints
    }

    /// Hints for either trust-list tab.
    pub fn certificates() -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("o/O", "organization"), ("r", "reset"), ("Enter", "details")];
        hints.extend(Self::global());
        hints
    }

    /// Hints while a details modal is open.
    pub fn details(copyable: bool) -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("↑↓", "scroll")];
        if copyable {
            hints.push(("c", "copy PEM"));
        }
        hints.push(("Esc", "close"));
        hints
    }

    /// Hints while a multi-select picker is open.
    pub fn picker() -> Vec<(&'static str, &'static str)> {
        vec![
            ("↑↓", "move"),
            ("Space", "toggle"),
            ("c", "clear"),
            ("Esc", "done"),
        ]
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Tab", "switch"),
            ("/", "search"),
            ("d", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}
