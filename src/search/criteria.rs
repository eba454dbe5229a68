//! Query state owned by the search controller

use crate::catalog::{SearchField, SearchRequest};

/// The user's current query text and target field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub query_text: String,
    pub field: SearchField,
}

impl SearchCriteria {
    /// Create criteria for a field with empty query text
    #[must_use]
    pub fn with_field(field: SearchField) -> Self {
        Self {
            query_text: String::new(),
            field,
        }
    }

    /// Whether the query is empty after trimming
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.query_text.trim().is_empty()
    }

    /// Build the request for the current criteria
    #[must_use]
    pub fn to_request(&self) -> SearchRequest {
        SearchRequest::new(self.field, &self.query_text)
    }
}
