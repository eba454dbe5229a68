//! Search controller and its derived view
//!
//! Owns query text, field, filters and the fetched result set; decides when
//! to hit the network and what the main view shows.
//!
//! 1. User input mutates criteria through [`SearchController`]
//! 2. An explicit submit produces a [`SearchTicket`], run by [`SearchWorker`]
//! 3. The [`SearchOutcome`] replaces the result set (unless stale)
//! 4. [`DisplayState`] is recomputed from state and filters on every frame

mod controller;
mod criteria;
mod filter;
mod state;
mod worker;

pub use controller::{
    EXAMPLE_SEARCHES, RequestToken, SEARCH_FAILED_MESSAGE, SearchController, SearchOutcome,
    SearchTicket,
};
pub use criteria::SearchCriteria;
pub use filter::{FilterCriteria, FilterField, RecordFilterExt};
pub use state::{ContentView, DisplayState, Layout, ViewState};
pub use worker::{SearchWorker, WorkerEvent};
