//! Result collection widget: a header with the layout toggle, then cards in
//! grid or list arrangement

use super::book_card::{BookCard, GRID_CARD_HEIGHT, GRID_CARD_WIDTH, LIST_ROW_HEIGHT};
use crate::catalog::{BookRecord, CoverUrls};
use crate::search::Layout;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout as Split, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::collections::HashSet;

/// Cards per row for a given width
#[must_use]
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / GRID_CARD_WIDTH).max(1))
}

/// Rows of cards that fit in a given height, header excluded
#[must_use]
pub fn visible_rows(height: u16, layout: Layout) -> usize {
    let row_height = match layout {
        Layout::Grid => GRID_CARD_HEIGHT,
        Layout::List => LIST_ROW_HEIGHT,
    };
    usize::from((height.saturating_sub(1) / row_height).max(1))
}

/// Renders the filtered results
pub struct ResultsView<'a> {
    records: &'a [&'a BookRecord],
    total: usize,
    layout: Layout,
    cursor: usize,
    scroll_row: usize,
    focused: bool,
    covers: &'a CoverUrls,
    broken_covers: &'a HashSet<i64>,
    theme: &'a Theme,
}

impl<'a> ResultsView<'a> {
    /// `total` is the size of the unfiltered result set
    #[must_use]
    pub const fn new(
        records: &'a [&'a BookRecord],
        total: usize,
        layout: Layout,
        covers: &'a CoverUrls,
        broken_covers: &'a HashSet<i64>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            records,
            total,
            layout,
            cursor: 0,
            scroll_row: 0,
            focused: false,
            covers,
            broken_covers,
            theme,
        }
    }

    /// Set highlighted card and first visible row
    #[must_use]
    pub const fn position(mut self, cursor: usize, scroll_row: usize) -> Self {
        self.cursor = cursor;
        self.scroll_row = scroll_row;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn header(&self) -> Line<'static> {
        let count = if self.records.len() == self.total {
            format!(" {} book(s)", self.records.len())
        } else {
            format!(" {} of {} book(s)", self.records.len(), self.total)
        };

        let toggle = |label: &'static str, active: bool| {
            if active {
                Span::styled(format!("[{label}]"), self.theme.focus_style())
            } else {
                Span::styled(format!(" {label} "), self.theme.dimmed_style())
            }
        };

        Line::from(vec![
            Span::styled(count, self.theme.title_style()),
            Span::raw("   "),
            toggle("Grid", self.layout == Layout::Grid),
            Span::raw(" "),
            toggle("List", self.layout == Layout::List),
        ])
    }
}

impl Widget for ResultsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let [header, body] =
            Split::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        Paragraph::new(self.header()).render(header, buf);

        let (columns, row_height) = match self.layout {
            Layout::Grid => (grid_columns(body.width), GRID_CARD_HEIGHT),
            Layout::List => (1, LIST_ROW_HEIGHT),
        };
        let card_width = match self.layout {
            Layout::Grid => GRID_CARD_WIDTH.min(body.width),
            Layout::List => body.width,
        };

        let first = self.scroll_row * columns;
        for (offset, record) in self.records.iter().enumerate().skip(first) {
            let slot = offset - first;
            let (row, col) = (slot / columns, slot % columns);
            let Ok(row) = u16::try_from(row) else { break };
            let Ok(col) = u16::try_from(col) else { break };

            let y = body.y + row * row_height;
            if y + row_height > body.bottom() {
                break;
            }
            let card_area = Rect::new(body.x + col * card_width, y, card_width, row_height);

            BookCard::new(
                record,
                self.layout,
                self.covers,
                |id| self.broken_covers.contains(&id),
                self.theme,
            )
            .highlighted(self.focused && offset == self.cursor)
            .render(card_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::book_card::buffer_text;

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(10), 1);
        assert_eq!(grid_columns(GRID_CARD_WIDTH * 3 + 5), 3);
    }

    #[test]
    fn test_visible_rows() {
        assert_eq!(visible_rows(1 + GRID_CARD_HEIGHT * 2, Layout::Grid), 2);
        assert_eq!(visible_rows(1 + LIST_ROW_HEIGHT * 4, Layout::List), 4);
        assert_eq!(visible_rows(0, Layout::List), 1);
    }

    #[test]
    fn test_renders_visible_cards_and_toggle() {
        let records: Vec<BookRecord> = (0..6)
            .map(|i| BookRecord::titled(format!("Book {i}")))
            .collect();
        let refs: Vec<&BookRecord> = records.iter().collect();
        let theme = Theme::default();
        let covers = CoverUrls::default();
        let broken = HashSet::new();

        let area = Rect::new(0, 0, GRID_CARD_WIDTH * 2, 1 + GRID_CARD_HEIGHT * 2);
        let mut buf = Buffer::empty(area);
        ResultsView::new(&refs, 10, Layout::Grid, &covers, &broken, &theme)
            .position(0, 1)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("6 of 10 book(s)"));
        assert!(text.contains("[Grid]"));
        assert!(!text.contains("Book 1"));
        assert!(text.contains("Book 2"));
        assert!(text.contains("Book 5"));
    }
}
