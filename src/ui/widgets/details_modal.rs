//! Detail overlay for the selected book

use super::book_card::CoverDisplay;
use crate::catalog::{BookRecord, CoverSize, CoverUrls};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const WORK_URL_BASE: &str = "https://openlibrary.org";

/// Modal showing every known field of one record
pub struct DetailsModal<'a> {
    record: &'a BookRecord,
    cover: CoverDisplay,
    theme: &'a Theme,
}

impl<'a> DetailsModal<'a> {
    #[must_use]
    pub fn new(
        record: &'a BookRecord,
        covers: &CoverUrls,
        is_broken: impl Fn(i64) -> bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            record,
            cover: CoverDisplay::resolve(record, covers, CoverSize::Large, is_broken),
            theme,
        }
    }

    /// Calculate centered area for the modal, sizes in percent
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let height = height.min(90);
        let width = width.min(90);
        let [_, middle, _] = Layout::vertical([
            Constraint::Percentage((100 - height) / 2),
            Constraint::Percentage(height),
            Constraint::Percentage((100 - height) / 2),
        ])
        .areas(area);

        let [_, center, _] = Layout::horizontal([
            Constraint::Percentage((100 - width) / 2),
            Constraint::Percentage(width),
            Constraint::Percentage((100 - width) / 2),
        ])
        .areas(middle);
        center
    }

    fn field_line(&self, label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<17}"), self.theme.dimmed_style()),
            Span::raw(value),
        ])
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let record = self.record;
        let mut lines = vec![Line::styled(
            record.display_title().to_string(),
            self.theme.title_style(),
        )];

        let authors = record.authors_joined();
        if !authors.is_empty() {
            lines.push(Line::styled(format!("by {authors}"), self.theme.author_style()));
        }
        lines.push(Line::default());

        match &self.cover {
            CoverDisplay::Image { url, .. } => {
                lines.push(Line::from(vec![
                    Span::styled("▣ Cover          ", self.theme.dimmed_style()),
                    Span::styled(url.clone(), self.theme.info_style()),
                ]));
                lines.push(Line::default());
            }
            CoverDisplay::Placeholder => {
                lines.push(Line::styled("No Cover", self.theme.placeholder_style()));
                lines.push(Line::default());
            }
            CoverDisplay::Hidden => {}
        }

        lines.push(self.field_line(
            "First Published:",
            record.year_text().unwrap_or_else(|| "Unknown".to_string()),
        ));
        lines.push(self.field_line(
            "Language:",
            record
                .languages_joined()
                .unwrap_or_else(|| "Unknown".to_string()),
        ));
        lines.push(self.field_line(
            "Publisher:",
            record.first_publisher().unwrap_or("Unknown").to_string(),
        ));
        lines.push(self.field_line(
            "ISBN:",
            record.first_isbn().unwrap_or("N/A").to_string(),
        ));

        if let Some(key) = record.key.as_deref().filter(|k| !k.is_empty()) {
            lines.push(Line::default());
            lines.push(self.field_line("Open Library:", format!("{WORK_URL_BASE}{key}")));
        }

        lines
    }

    fn hint_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("Esc", self.theme.key_style()),
            Span::styled(" close", self.theme.dimmed_style()),
        ];
        if matches!(self.cover, CoverDisplay::Image { .. }) {
            spans.push(Span::styled(" · ", self.theme.dimmed_style()));
            spans.push(Span::styled("o", self.theme.key_style()));
            spans.push(Span::styled(" open cover", self.theme.dimmed_style()));
        }
        Line::from(spans)
    }
}

impl Widget for DetailsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = Self::centered_rect(70, 70, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focus_style())
            .title(" Book Details ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        Paragraph::new(self.build_content())
            .wrap(Wrap { trim: false })
            .render(body, buf);
        Paragraph::new(self.hint_line())
            .alignment(Alignment::Center)
            .render(footer, buf);
    }
}
