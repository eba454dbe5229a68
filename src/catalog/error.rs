//! Catalog-specific error types
//!
//! Every way a catalog request can fail collapses into [`CatalogError`].
//! The search controller does not distinguish between the variants when
//! presenting a failure; they exist so the log can say what went wrong.

use thiserror::Error;

/// Errors raised while talking to the search or cover endpoints
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Connection, TLS, timeout or body read failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status code
    #[error("Catalog returned HTTP status {0}")]
    Status(u16),

    /// The body was not a search response
    #[error("Malformed catalog response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = CatalogError::Status(503);
        assert_eq!(err.to_string(), "Catalog returned HTTP status 503");
    }

    #[test]
    fn test_parse_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CatalogError = serde_err.into();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("Malformed catalog response"));
    }
}
