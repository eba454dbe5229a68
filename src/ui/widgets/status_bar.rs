//! Status line: the latest message on the left, key hints on the right

use crate::ui::state::{MessageLevel, StatusMessage};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Hints while typing in the query or a filter
pub const INPUT_HINTS: &[KeyHint] = &[
    KeyHint::new("Enter", "search"),
    KeyHint::new("^T", "field"),
    KeyHint::new("^F", "filters"),
    KeyHint::new("Tab", "focus"),
    KeyHint::new("Esc", "quit"),
];

/// Hints while moving through results
pub const RESULTS_HINTS: &[KeyHint] = &[
    KeyHint::new("←↑↓→", "move"),
    KeyHint::new("Enter", "details"),
    KeyHint::new("^G/^L", "grid/list"),
    KeyHint::new("^X", "clear filters"),
    KeyHint::new("Esc", "back"),
];

/// Hints while the detail overlay is open
pub const DETAIL_HINTS: &[KeyHint] = &[
    KeyHint::new("Esc", "close"),
    KeyHint::new("o", "open cover"),
];

pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(
        message: Option<&'a StatusMessage>,
        hints: &'a [KeyHint],
        theme: &'a Theme,
    ) -> Self {
        Self {
            message,
            hints,
            theme,
        }
    }

    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
        }
    }

    fn hint_line(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key, self.theme.key_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = self.hint_line();
        let hints_width = u16::try_from(hints.width()).unwrap_or(u16::MAX);
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

        if let Some(msg) = self.message {
            let style = self.style_for_level(msg.level);
            Paragraph::new(Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]))
            .render(left, buf);
        }

        Paragraph::new(hints)
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}
