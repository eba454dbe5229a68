//! View state and display-state resolution
//!
//! [`ViewState`] is the single owned state container for a session. It is
//! created empty at startup, lives only in memory, and is mutated exclusively
//! through [`SearchController`](super::SearchController).
//!
//! What the main content area shows is never stored: [`DisplayState::resolve`]
//! derives it from the current state on every frame, with this priority:
//!
//! 1. an error message, if any, is shown as a banner (never suppresses content)
//! 2. loading → a single loading indicator
//! 3. non-empty filtered results → the result collection
//! 4. no fetched results at all → the welcome panel
//! 5. otherwise → "no results after filtering"

use super::filter::{FilterCriteria, RecordFilterExt};
use crate::catalog::BookRecord;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Presentation of the result collection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl Layout {
    /// The other layout
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

/// Transient state of one session
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Last successfully fetched result set; replaced wholesale
    pub results: Vec<BookRecord>,
    /// True only while the latest request is outstanding
    pub loading: bool,
    pub error_message: Option<String>,
    /// Record shown in the detail overlay
    pub selected: Option<BookRecord>,
    pub layout: Layout,
    pub filters_visible: bool,
    /// Cover ids whose image failed to load
    pub broken_covers: HashSet<i64>,
}

/// Main content area branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView<'a> {
    Loading,
    Results(Vec<&'a BookRecord>),
    Welcome,
    FilteredEmpty,
}

/// Everything the main view needs to decide what to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState<'a> {
    pub error_banner: Option<&'a str>,
    pub content: ContentView<'a>,
}

impl<'a> DisplayState<'a> {
    /// Resolve the display state for the current view and filters
    #[must_use]
    pub fn resolve(view: &'a ViewState, filters: &FilterCriteria) -> Self {
        let error_banner = view.error_message.as_deref();

        let content = if view.loading {
            ContentView::Loading
        } else {
            let filtered = view.results.iter().filter_criteria(filters);
            if !filtered.is_empty() {
                ContentView::Results(filtered)
            } else if view.results.is_empty() {
                ContentView::Welcome
            } else {
                ContentView::FilteredEmpty
            }
        };

        Self {
            error_banner,
            content,
        }
    }

    /// Records to render, empty for every non-result branch
    #[must_use]
    pub fn records(&self) -> &[&'a BookRecord] {
        match &self.content {
            ContentView::Results(records) => records,
            _ => &[],
        }
    }
}
