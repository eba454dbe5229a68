//! Search controller
//!
//! Owns the query, the filters and the [`ViewState`], and is the only thing
//! that mutates them. Network work is not done here: [`SearchController::submit_search`]
//! hands back a [`SearchTicket`] for a [`SearchWorker`](super::SearchWorker)
//! to run, and the worker's [`SearchOutcome`] is fed back through
//! [`SearchController::complete`].
//!
//! Each dispatch gets a fresh [`RequestToken`]. Outcomes carrying any token
//! other than the most recent one are dropped, so a slow early response can
//! never overwrite the results of a later search.

use super::criteria::SearchCriteria;
use super::filter::{FilterCriteria, FilterField, RecordFilterExt};
use super::state::{DisplayState, Layout, ViewState};
use crate::catalog::{self, BookRecord, SearchField, SearchRequest};

/// Message shown for any failed search
pub const SEARCH_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shortcut searches offered on the welcome panel
pub const EXAMPLE_SEARCHES: [(&str, SearchField); 4] = [
    ("Harry Potter", SearchField::Title),
    ("J.K. Rowling", SearchField::Author),
    ("Science Fiction", SearchField::Subject),
    ("9780743273565", SearchField::Isbn),
];

/// Monotonically increasing identifier of a dispatched search
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Raw sequence number
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// A search the controller wants run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub token: RequestToken,
    pub request: SearchRequest,
}

/// Result of running a [`SearchTicket`]
#[derive(Debug)]
pub struct SearchOutcome {
    pub token: RequestToken,
    pub result: catalog::Result<Vec<BookRecord>>,
}

impl SearchOutcome {
    /// Run a ticket synchronously against a source
    pub fn run(source: &dyn catalog::CatalogSource, ticket: &SearchTicket) -> Self {
        Self {
            token: ticket.token,
            result: source.search(&ticket.request),
        }
    }
}

/// Coordinates query, filter and result state for one session
#[derive(Debug, Default)]
pub struct SearchController {
    criteria: SearchCriteria,
    filters: FilterCriteria,
    view: ViewState,
    last_token: u64,
    pending: Option<RequestToken>,
}

impl SearchController {
    /// Create a controller with empty results and default filters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a given field selected
    #[must_use]
    pub fn with_field(mut self, field: SearchField) -> Self {
        self.criteria.field = field;
        self
    }

    /// Start with a given layout
    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.view.layout = layout;
        self
    }

    /// Start with the filter panel shown or hidden
    #[must_use]
    pub const fn with_filters_visible(mut self, visible: bool) -> Self {
        self.view.filters_visible = visible;
        self
    }

    #[must_use]
    pub const fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// Replace the query text. Any value is accepted.
    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.criteria.query_text = text.into();
    }

    pub fn set_field(&mut self, field: SearchField) {
        self.criteria.field = field;
    }

    /// Advance the field selector
    pub fn cycle_field(&mut self) {
        self.criteria.field = self.criteria.field.next();
    }

    /// Start a search for the current criteria
    ///
    /// Returns `None` without touching any state when the query is blank.
    pub fn submit_search(&mut self) -> Option<SearchTicket> {
        if self.criteria.is_blank() {
            log::debug!("Ignoring search with blank query");
            return None;
        }
        Some(self.dispatch())
    }

    /// Set query text and field, then search immediately
    pub fn run_example_search(&mut self, text: &str, field: SearchField) -> SearchTicket {
        self.set_query_text(text);
        self.set_field(field);
        self.dispatch()
    }

    fn dispatch(&mut self) -> SearchTicket {
        self.last_token += 1;
        let token = RequestToken(self.last_token);
        let request = self.criteria.to_request();

        self.pending = Some(token);
        self.view.loading = true;
        self.view.error_message = None;

        log::info!(
            "Dispatching search #{} ({}={:?})",
            token.value(),
            request.field,
            request.query
        );
        SearchTicket { token, request }
    }

    /// Apply a finished search
    ///
    /// Returns `false` if the outcome was stale and has been discarded.
    pub fn complete(&mut self, outcome: SearchOutcome) -> bool {
        if self.pending != Some(outcome.token) {
            log::debug!(
                "Discarding stale response for search #{}",
                outcome.token.value()
            );
            return false;
        }

        self.pending = None;
        self.view.loading = false;

        match outcome.result {
            Ok(records) => {
                log::info!(
                    "Search #{} returned {} record(s)",
                    outcome.token.value(),
                    records.len()
                );
                self.view.results = records;
                self.view.error_message = None;
            }
            Err(e) => {
                log::warn!("Search #{} failed: {e}", outcome.token.value());
                self.view.error_message = Some(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// Token of the request currently awaited, if any
    #[must_use]
    pub const fn pending_token(&self) -> Option<RequestToken> {
        self.pending
    }

    /// Merge a partial filter update; `Some("")` clears a criterion
    pub fn set_filter(&mut self, partial: FilterCriteria) {
        self.filters.merge(partial);
    }

    /// Set a single filter criterion
    pub fn set_filter_field(&mut self, field: FilterField, value: impl Into<String>) {
        self.filters.set(field, value);
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterCriteria::default();
    }

    /// Open the detail overlay for a record
    pub fn select_record(&mut self, record: BookRecord) {
        self.view.selected = Some(record);
    }

    /// Open the detail overlay for the record at a position in the filtered view
    ///
    /// Returns `false` when the index is out of range.
    pub fn select_filtered(&mut self, index: usize) -> bool {
        let record = self.filtered().get(index).map(|r| (*r).clone());
        match record {
            Some(record) => {
                self.select_record(record);
                true
            }
            None => false,
        }
    }

    pub fn close_detail(&mut self) {
        self.view.selected = None;
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&BookRecord> {
        self.view.selected.as_ref()
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.view.layout = layout;
    }

    pub fn toggle_filters_visible(&mut self) {
        self.view.filters_visible = !self.view.filters_visible;
    }

    /// Remember that a cover image failed to load
    pub fn mark_cover_broken(&mut self, cover_id: i64) {
        if self.view.broken_covers.insert(cover_id) {
            log::debug!("Cover {cover_id} marked as broken");
        }
    }

    #[must_use]
    pub fn is_cover_broken(&self, cover_id: i64) -> bool {
        self.view.broken_covers.contains(&cover_id)
    }

    /// Fetched results narrowed by the current filters
    #[must_use]
    pub fn filtered(&self) -> Vec<&BookRecord> {
        self.view.results.iter().filter_criteria(&self.filters)
    }

    /// What the main view should show right now
    #[must_use]
    pub fn display(&self) -> DisplayState<'_> {
        DisplayState::resolve(&self.view, &self.filters)
    }
}
