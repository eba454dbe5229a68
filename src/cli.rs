//! Command-line interface definitions and parsing
//!
//! # Examples
//!
//! ```bash
//! # Open the interactive finder
//! bookverse
//!
//! # Open it with a search already running
//! bookverse "Harry Potter"
//! bookverse -f author "Ursula K. Le Guin" --layout list
//!
//! # Print results without the UI
//! bookverse --print -f subject "Science Fiction" --language eng
//! ```

use crate::catalog::SearchField;
use crate::search::{FilterCriteria, Layout};
use clap::Parser;
use std::path::PathBuf;

/// Search the Open Library catalog from the terminal
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "bookverse", version, about)]
pub struct Cli {
    /// Query to search for immediately
    pub query: Option<String>,

    /// Catalog field to search
    #[arg(short, long, value_enum)]
    pub field: Option<SearchField>,

    /// Result layout
    #[arg(short, long, value_enum)]
    pub layout: Option<Layout>,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print results to stdout instead of opening the UI
    #[arg(short, long, requires = "query")]
    pub print: bool,

    /// Only show records first published in this year
    #[arg(long, value_name = "YEAR")]
    pub year: Option<String>,

    /// Only show records available in this language code (e.g. eng)
    #[arg(long, value_name = "CODE")]
    pub language: Option<String>,

    /// Only show records carrying this ISBN
    #[arg(long, value_name = "ISBN")]
    pub isbn: Option<String>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Suppress headers and counts in print mode
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Initial filters requested on the command line
    #[must_use]
    pub fn filters(&self) -> FilterCriteria {
        FilterCriteria {
            year: self.year.clone(),
            language: self.language.clone(),
            isbn: self.isbn.clone(),
        }
    }
}
