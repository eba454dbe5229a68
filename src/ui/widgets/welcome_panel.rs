//! Welcome panel shown before the first search

use crate::search::EXAMPLE_SEARCHES;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub const WELCOME_TITLE: &str = "Welcome to BookVerse Ultimate Finder";

/// Greeting plus the example searches and their shortcuts
pub struct WelcomePanel<'a> {
    theme: &'a Theme,
}

impl<'a> WelcomePanel<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::default(),
            Line::styled(WELCOME_TITLE, self.theme.title_style()),
            Line::styled(
                "Search millions of books by title, author, subject or ISBN.",
                self.theme.dimmed_style(),
            ),
            Line::default(),
            Line::raw("Try one of these:"),
            Line::default(),
        ];

        for (idx, (text, field)) in EXAMPLE_SEARCHES.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("Alt-{}", idx + 1), self.theme.key_style()),
                Span::raw("  "),
                Span::styled(format!("{text:<16}"), self.theme.book_title_style()),
                Span::styled(format!("({})", field.label()), self.theme.dimmed_style()),
            ]));
        }
        lines
    }
}

impl Widget for WelcomePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.build_content())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::book_card::buffer_text;

    #[test]
    fn test_lists_example_searches() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 14);
        let mut buf = Buffer::empty(area);
        WelcomePanel::new(&theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains(WELCOME_TITLE));
        assert!(text.contains("Alt-1"));
        assert!(text.contains("Harry Potter"));
        assert!(text.contains("9780743273565"));
        assert!(text.contains("(ISBN)"));
    }
}
