//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::view::common::RowStyleClass;

/// Color palette.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;
    pub const MODAL_BG: Color = Color::Black;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    // Highlight colors
    pub const POSITIVE: Color = Color::Green;
    pub const NEGATIVE: Color = Color::Yellow;
    pub const CRITICAL: Color = Color::Red;
    pub const ACCENT: Color = Color::Cyan;

    // Tab colors
    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::DarkGray;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Header button style (`[s] Send Points`).
    pub fn header_button() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Status message in the header.
    pub fn status() -> Style {
        Style::default().fg(Color::Yellow).bg(Theme::HEADER_BG)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Active tab style.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Inactive tab style.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Detail panel key style.
    pub fn detail_key() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    /// Modal background.
    pub fn modal() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::MODAL_BG)
    }

    /// Modal border.
    pub fn modal_border() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    /// Destructive modal border and warnings.
    pub fn danger() -> Style {
        Style::default()
            .fg(Theme::CRITICAL)
            .add_modifier(Modifier::BOLD)
    }

    /// Error message style.
    pub fn error() -> Style {
        Style::default().fg(Theme::CRITICAL)
    }

    /// Focused input field.
    pub fn input_focused() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Color::Yellow)
    }

    /// Maps a UI-agnostic [`RowStyleClass`] to a ratatui [`Style`].
    pub fn from_class(class: RowStyleClass) -> Style {
        match class {
            RowStyleClass::Normal => Self::default(),
            RowStyleClass::Positive => Style::default().fg(Theme::POSITIVE),
            RowStyleClass::Negative => Style::default().fg(Theme::NEGATIVE),
            RowStyleClass::Dimmed => Self::dim(),
        }
    }
}
