//! Ratatui widgets for the finder UI

mod book_card;
mod details_modal;
mod filter_panel;
mod results_view;
mod search_bar;
mod status_bar;
mod welcome_panel;

#[cfg(test)]
pub(crate) use book_card::buffer_text;
pub use book_card::{BookCard, CoverDisplay, GRID_CARD_HEIGHT, GRID_CARD_WIDTH, LIST_ROW_HEIGHT};
pub use details_modal::DetailsModal;
pub use filter_panel::FilterPanel;
pub use results_view::{ResultsView, grid_columns, visible_rows};
pub use search_bar::SearchBar;
pub use status_bar::{DETAIL_HINTS, INPUT_HINTS, KeyHint, RESULTS_HINTS, StatusBar};
pub use welcome_panel::{WELCOME_TITLE, WelcomePanel};
