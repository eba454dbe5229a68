//! Filter panel widget: year, language and ISBN inputs

use super::search_bar::input_spans;
use crate::search::FilterField;
use crate::ui::state::FilterInputs;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Filter panel with one input per [`FilterField`]
pub struct FilterPanel<'a> {
    inputs: &'a FilterInputs,
    focused: Option<FilterField>,
    active: bool,
    theme: &'a Theme,
}

impl<'a> FilterPanel<'a> {
    /// `active` reports whether any filter currently narrows the results
    #[must_use]
    pub const fn new(inputs: &'a FilterInputs, active: bool, theme: &'a Theme) -> Self {
        Self {
            inputs,
            focused: None,
            active,
            theme,
        }
    }

    #[must_use]
    pub const fn focused(mut self, field: Option<FilterField>) -> Self {
        self.focused = field;
        self
    }
}

impl Widget for FilterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused.is_some() {
            self.theme.focus_style()
        } else {
            self.theme.border_style()
        };

        let mut title = vec![Span::raw(" Filters ")];
        if self.active {
            title.push(Span::styled("(Ctrl-X clear) ", self.theme.dimmed_style()));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Line::from(title));
        let inner = block.inner(area);
        block.render(area, buf);

        let columns: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(inner);
        for (field, column) in FilterField::ALL.into_iter().zip(columns) {
            let focused = self.focused == Some(field);
            let label_style = if focused {
                self.theme.focus_style()
            } else {
                self.theme.dimmed_style()
            };

            let mut spans = vec![Span::styled(format!("{}: ", field.label()), label_style)];
            spans.extend(input_spans(self.inputs.get(field), focused, "", self.theme));
            Paragraph::new(Line::from(spans)).render(column, buf);
        }
    }
}
