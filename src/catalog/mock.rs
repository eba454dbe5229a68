//! Mock catalog source for testing

use super::error::{CatalogError, Result};
use super::traits::CatalogSource;
use super::types::{BookRecord, SearchRequest};
use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

/// Canned response for one search call
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Succeed with these records
    Records(Vec<BookRecord>),
    /// Fail with this HTTP status
    Status(u16),
}

/// Catalog source that replays queued responses and records every request
///
/// When the queue is empty, searches succeed with no records.
#[derive(Debug, Default)]
pub struct MockCatalog {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<SearchRequest>>,
    broken_covers: HashSet<String>,
}

impl MockCatalog {
    /// Create a mock with the given responses, served in order
    #[must_use]
    pub fn new(responses: Vec<MockResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    /// Mark a cover URL as unreachable
    #[must_use]
    pub fn with_broken_cover(mut self, url: impl Into<String>) -> Self {
        self.broken_covers.insert(url.into());
        self
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CatalogSource for MockCatalog {
    fn search(&self, request: &SearchRequest) -> Result<Vec<BookRecord>> {
        self.requests.lock().unwrap().push(request.clone());
        match self.responses.lock().unwrap().pop_front() {
            Some(MockResponse::Records(records)) => Ok(records),
            Some(MockResponse::Status(code)) => Err(CatalogError::Status(code)),
            None => Ok(Vec::new()),
        }
    }

    fn probe_cover(&self, url: &str) -> Result<()> {
        if self.broken_covers.contains(url) {
            Err(CatalogError::Status(404))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SearchField;

    #[test]
    fn test_mock_serves_in_order() {
        let mock = MockCatalog::new(vec![
            MockResponse::Records(vec![BookRecord::titled("One")]),
            MockResponse::Status(500),
        ]);
        let request = SearchRequest::new(SearchField::Title, "x");

        assert_eq!(mock.search(&request).unwrap().len(), 1);
        assert!(matches!(mock.search(&request), Err(CatalogError::Status(500))));
        assert!(mock.search(&request).unwrap().is_empty());
        assert_eq!(mock.requests().len(), 3);
    }

    #[test]
    fn test_mock_cover_probe() {
        let mock = MockCatalog::default().with_broken_cover("http://covers/1-L.jpg");
        assert!(mock.probe_cover("http://covers/1-L.jpg").is_err());
        assert!(mock.probe_cover("http://covers/2-L.jpg").is_ok());
    }
}
