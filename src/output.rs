//! Output formatting for print mode
//!
//! Renders a resolved [`DisplayState`] as plain lines for stdout, using the
//! same branches and placeholders as the interactive UI.

use crate::catalog::{BookRecord, CoverSize, CoverUrls};
use crate::search::{ContentView, DisplayState};
use colored::Colorize;

/// Text shown when every fetched record was filtered out
pub const FILTERED_EMPTY_MESSAGE: &str = "No results found. Try adjusting your search or filters.";

/// Format one record as a single line
#[must_use]
pub fn record_line(record: &BookRecord, quiet: bool) -> String {
    let year = record.year_text().unwrap_or_else(|| "N/A".to_string());
    if quiet {
        return format!("{}\t{}\t{}", record.display_title(), record.authors_joined(), year);
    }

    let authors = record.authors_joined();
    if authors.is_empty() {
        format!("  {} ({})", record.display_title().bold(), year)
    } else {
        format!(
            "  {} by {} ({})",
            record.display_title().bold(),
            authors.cyan(),
            year
        )
    }
}

/// Format a record's cover line, `None` when it has no cover
#[must_use]
pub fn cover_line(record: &BookRecord, covers: &CoverUrls) -> Option<String> {
    covers
        .for_record(record, CoverSize::Medium)
        .map(|url| format!("    cover: {}", url.dimmed()))
}

/// Render the whole display state as lines
#[must_use]
pub fn render_display(display: &DisplayState<'_>, covers: &CoverUrls, quiet: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(error) = display.error_banner {
        lines.push(format!("{} {}", "✗".red(), error.red()));
    }

    match &display.content {
        ContentView::Loading => lines.push("Searching...".dimmed().to_string()),
        ContentView::Results(records) => {
            if !quiet {
                lines.push(format!("Found {} book(s):", records.len()));
            }
            for record in records {
                lines.push(record_line(record, quiet));
                if !quiet && let Some(cover) = cover_line(record, covers) {
                    lines.push(cover);
                }
            }
        }
        ContentView::Welcome => {
            if !quiet {
                lines.push("No books found.".yellow().to_string());
            }
        }
        ContentView::FilteredEmpty => {
            if !quiet {
                lines.push(FILTERED_EMPTY_MESSAGE.yellow().to_string());
            }
        }
    }

    lines
}
