//! Terminal user interface
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ [Title ▾] query                          │  SearchBar
//! ├──────────────────────────────────────────┤
//! │ Publish Year  Language  ISBN             │  FilterPanel (Ctrl-F)
//! ├──────────────────────────────────────────┤
//! │ ✗ error banner                           │
//! │ ┌────────┐ ┌────────┐ ┌────────┐         │
//! │ │ card   │ │ card   │ │ card   │         │  ResultsView / WelcomePanel
//! │ └────────┘ └────────┘ └────────┘         │
//! ├──────────────────────────────────────────┤
//! │ message                        key hints │  StatusBar
//! └──────────────────────────────────────────┘
//! ```
//!
//! [`AppState`] wraps the [`SearchController`](crate::search::SearchController)
//! with presentational state. Key handling lives in `events`, drawing and
//! the run loop in [`Finder`].

mod app;
mod error;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::Finder;
pub use error::{Result, UiError};
pub use events::{EventResult, handle_key};
pub use state::{AppState, Focus, MessageLevel, StatusMessage, TextField};
pub use theme::Theme;
