//! Result card widget
//!
//! Renders one [`BookRecord`] in either grid (card) or list (row) form. The
//! card is a pure function of the record, the layout and whether its cover
//! is known to be broken.

use crate::catalog::{BookRecord, CoverSize, CoverUrls};
use crate::search::Layout;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout as Split, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Width of a grid card, borders included
pub const GRID_CARD_WIDTH: u16 = 30;
/// Height of a grid card, borders included
pub const GRID_CARD_HEIGHT: u16 = 8;
/// Height of a list row, borders included
pub const LIST_ROW_HEIGHT: u16 = 5;

const LIST_COVER_WIDTH: u16 = 16;

/// How the cover slot of a card is filled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverDisplay {
    /// Cover available at this URL
    Image { cover_id: i64, url: String },
    /// Record has no cover id; no request is ever made
    Placeholder,
    /// Cover failed to load; the slot is left empty
    Hidden,
}

impl CoverDisplay {
    /// Decide the cover slot for a record
    #[must_use]
    pub fn resolve(
        record: &BookRecord,
        covers: &CoverUrls,
        size: CoverSize,
        is_broken: impl Fn(i64) -> bool,
    ) -> Self {
        match record.cover_id() {
            None => Self::Placeholder,
            Some(id) if is_broken(id) => Self::Hidden,
            Some(id) => Self::Image {
                cover_id: id,
                url: covers.url(id, size),
            },
        }
    }
}

/// One search result, clickable via the results cursor
pub struct BookCard<'a> {
    record: &'a BookRecord,
    layout: Layout,
    cover: CoverDisplay,
    highlighted: bool,
    theme: &'a Theme,
}

impl<'a> BookCard<'a> {
    /// Create a card; `is_broken` reports covers that failed to load
    #[must_use]
    pub fn new(
        record: &'a BookRecord,
        layout: Layout,
        covers: &CoverUrls,
        is_broken: impl Fn(i64) -> bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            record,
            layout,
            cover: CoverDisplay::resolve(record, covers, CoverSize::Medium, is_broken),
            highlighted: false,
            theme,
        }
    }

    #[must_use]
    pub const fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    #[must_use]
    pub const fn cover(&self) -> &CoverDisplay {
        &self.cover
    }

    fn cover_line(&self) -> Line<'static> {
        match &self.cover {
            CoverDisplay::Image { url, .. } => {
                Line::styled(url.clone(), self.theme.dimmed_style())
            }
            CoverDisplay::Placeholder => {
                Line::styled("No Cover", self.theme.placeholder_style())
            }
            CoverDisplay::Hidden => Line::default(),
        }
    }

    fn authors_line(&self) -> Line<'static> {
        Line::styled(self.record.authors_joined(), self.theme.author_style())
    }

    fn year_line(&self) -> Line<'static> {
        let year = self.record.year_text().unwrap_or_else(|| "N/A".to_string());
        Line::styled(format!("📅 {year}"), self.theme.year_style())
    }

    fn title_paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(Line::styled(
            self.record.display_title(),
            self.theme.book_title_style(),
        ))
        .wrap(Wrap { trim: true })
    }

    fn block(&self) -> Block<'static> {
        let block = Block::default().borders(Borders::ALL);
        if self.highlighted {
            block
                .border_style(self.theme.focus_style())
                .style(self.theme.selected_style())
        } else {
            block.border_style(self.theme.border_style())
        }
    }

    fn render_grid(&self, inner: Rect, buf: &mut Buffer) {
        let [cover, title, authors, year] = Split::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.cover_line())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(cover, buf);
        self.title_paragraph().render(title, buf);
        Paragraph::new(self.authors_line()).render(authors, buf);
        Paragraph::new(self.year_line()).render(year, buf);
    }

    fn render_list(&self, inner: Rect, buf: &mut Buffer) {
        let [cover, text] =
            Split::horizontal([Constraint::Length(LIST_COVER_WIDTH), Constraint::Min(1)])
                .areas(inner);

        Paragraph::new(self.cover_line())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(cover, buf);

        let [title, authors, year] = Split::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(text);

        self.title_paragraph().render(title, buf);
        Paragraph::new(self.authors_line()).render(authors, buf);
        Paragraph::new(self.year_line()).render(year, buf);
    }
}

impl Widget for BookCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match self.layout {
            Layout::Grid => self.render_grid(inner, buf),
            Layout::List => self.render_list(inner, buf),
        }
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(record: &BookRecord, layout: Layout, broken: bool) -> String {
        render_with(record, layout, broken, &CoverUrls::new("http://c"))
    }

    fn render_with(
        record: &BookRecord,
        layout: Layout,
        broken: bool,
        covers: &CoverUrls,
    ) -> String {
        let theme = Theme::default();
        let height = match layout {
            Layout::Grid => GRID_CARD_HEIGHT,
            Layout::List => LIST_ROW_HEIGHT,
        };
        let area = Rect::new(0, 0, 60, height);
        let mut buf = Buffer::empty(area);
        BookCard::new(record, layout, covers, |_| broken, &theme).render(area, &mut buf);
        buffer_text(&buf)
    }

    fn potter() -> BookRecord {
        BookRecord {
            author_name: Some(vec!["J. K. Rowling".into()]),
            first_publish_year: Some(1997),
            cover_i: Some(123),
            ..BookRecord::titled("Harry Potter")
        }
    }

    #[test]
    fn test_card_shows_record_fields() {
        let text = render(&potter(), Layout::Grid, false);
        assert!(text.contains("Harry Potter"));
        assert!(text.contains("J. K. Rowling"));
        assert!(text.contains("1997"));
        assert!(text.contains("http://c/123-M.jpg"));
    }

    #[test]
    fn test_card_cover_line_is_medium_url() {
        let record = potter();
        let theme = Theme::default();
        let covers = CoverUrls::default();
        let card = BookCard::new(&record, Layout::Grid, &covers, |_| false, &theme);
        let CoverDisplay::Image { url, .. } = card.cover() else {
            panic!("expected an image cover");
        };
        assert_eq!(url, "https://covers.openlibrary.org/b/id/123-M.jpg");

        assert_eq!(
            card.cover_line().to_string(),
            "https://covers.openlibrary.org/b/id/123-M.jpg"
        );
    }

    #[test]
    fn test_full_cover_url_fits_grid_card() {
        let theme = Theme::default();
        let covers = CoverUrls::default();
        let area = Rect::new(0, 0, GRID_CARD_WIDTH, GRID_CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        BookCard::new(&potter(), Layout::Grid, &covers, |_| false, &theme).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("https://covers.openlibrary.o"));
        assert!(text.contains("123-M.jpg"));
    }

    #[test]
    fn test_card_placeholders_for_empty_record() {
        for layout in [Layout::Grid, Layout::List] {
            let text = render(&BookRecord::default(), layout, false);
            assert!(text.contains("Untitled"));
            assert!(text.contains("No Cover"));
            assert!(text.contains("N/A"));
        }
    }

    #[test]
    fn test_broken_cover_is_hidden() {
        let text = render(&potter(), Layout::List, true);
        assert!(!text.contains("123-M.jpg"));
        assert!(!text.contains("No Cover"));
        assert!(text.contains("Harry Potter"));
    }

    #[test]
    fn test_cover_display_resolution() {
        let covers = CoverUrls::default();
        assert_eq!(
            CoverDisplay::resolve(&BookRecord::default(), &covers, CoverSize::Medium, |_| false),
            CoverDisplay::Placeholder
        );
        assert_eq!(
            CoverDisplay::resolve(&potter(), &covers, CoverSize::Medium, |id| id == 123),
            CoverDisplay::Hidden
        );
        assert_eq!(
            CoverDisplay::resolve(&potter(), &covers, CoverSize::Medium, |_| false),
            CoverDisplay::Image {
                cover_id: 123,
                url: "https://covers.openlibrary.org/b/id/123-M.jpg".into()
            }
        );
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let theme = Theme::default();
        let covers = CoverUrls::default();
        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        BookCard::new(&potter(), Layout::Grid, &covers, |_| false, &theme).render(area, &mut buf);
    }
}
