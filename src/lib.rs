//! BookVerse - a terminal book finder over the Open Library catalog
//!
//! Searches by title, author, subject or ISBN, narrows the fetched results
//! locally by year, language and ISBN, and shows them as a grid or list
//! with a detail view per book.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod search;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BookverseError {
    /// Catalog request failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Terminal UI failed
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the application
pub type Result<T> = std::result::Result<T, BookverseError>;
