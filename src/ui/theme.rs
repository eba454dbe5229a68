//! Color theme definitions for the finder TUI

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Brand color for the header, focused borders and key hints
    pub accent: Color,
    /// Secondary brand color
    pub highlight: Color,
    /// Background of the highlighted card
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub border: Color,
    /// Dimmed/inactive text and placeholders
    pub dimmed: Color,
    pub author: Color,
    pub year: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            accent: Color::Indexed(99),
            highlight: Color::Magenta,
            selection_bg: Color::Indexed(54),
            selection_fg: Color::White,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            author: Color::Gray,
            year: Color::DarkGray,
        }
    }

    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the highlighted card
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default().bg(self.selection_bg).fg(self.selection_fg)
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Border of the focused input or highlighted card
    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for the "No Cover" placeholder block
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default()
            .fg(self.dimmed)
            .add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn book_title_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn author_style(&self) -> Style {
        Style::default().fg(self.author)
    }

    #[must_use]
    pub fn year_style(&self) -> Style {
        Style::default().fg(self.year)
    }

    /// Style for key names in hints
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
