//! Search bar widget: field selector plus query input

use crate::catalog::SearchField;
use crate::ui::state::TextField;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Search for books...";

/// Spans for a text field, with a cursor marker while focused
pub(crate) fn input_spans<'a>(
    input: &'a TextField,
    focused: bool,
    placeholder: &'a str,
    theme: &Theme,
) -> Vec<Span<'a>> {
    let cursor = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
    let text = input.as_str();

    if text.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(cursor);
        }
        spans.push(Span::styled(placeholder, theme.dimmed_style()));
        return spans;
    }
    if !focused {
        return vec![Span::raw(text)];
    }

    let (before, after) = text.split_at(input.byte_index());
    vec![Span::raw(before), cursor, Span::raw(after)]
}

/// Search bar widget that displays the field and query
pub struct SearchBar<'a> {
    input: &'a TextField,
    field: SearchField,
    loading: bool,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(input: &'a TextField, field: SearchField, theme: &'a Theme) -> Self {
        Self {
            input,
            field,
            loading: false,
            theme,
            focused: true,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show a busy marker while a search is in flight
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focus_style()
        } else {
            self.theme.border_style()
        };

        let title = if self.loading {
            " BookVerse · searching… "
        } else {
            " BookVerse "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(title, self.theme.title_style()));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![
            Span::styled(format!("[{} ▾]", self.field.label()), self.theme.key_style()),
            Span::raw(" "),
        ];
        spans.extend(input_spans(self.input, self.focused, PLACEHOLDER, self.theme));

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
