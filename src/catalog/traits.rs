//! Trait seam between the search controller and the network

use super::error::Result;
use super::types::{BookRecord, SearchRequest};

/// A source of catalog search results
///
/// Implementations must be shareable across the worker threads that run
/// requests in the background.
pub trait CatalogSource: Send + Sync {
    /// Run one search and return the records in response order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on transport failure, non-success status, or a
    /// body that is not a search response.
    fn search(&self, request: &SearchRequest) -> Result<Vec<BookRecord>>;

    /// Check that a cover image URL resolves
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the image cannot be fetched.
    fn probe_cover(&self, url: &str) -> Result<()>;
}
