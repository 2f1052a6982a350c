//! Theme and style helpers for the wallet interface.

use ratatui::style::{Color, Modifier, Style};

/// List selection indicator shown next to the selected item.
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

/// Color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Main accent (borders, titles, key UI elements).
    pub primary: Color,
    /// Secondary accent (token symbols, addresses).
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,
}

const THEME: Theme = Theme {
    primary: Color::Magenta,
    secondary: Color::Cyan,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
    text: Color::White,
    text_muted: Color::DarkGray,
    border: Color::DarkGray,
    border_focused: Color::Magenta,
    highlight_bg: Color::DarkGray,
};

/// Get the current theme.
pub fn theme() -> Theme {
    THEME
}

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused_style(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for actions that are currently unavailable.
    pub fn disabled_style(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::DIM)
    }
}
