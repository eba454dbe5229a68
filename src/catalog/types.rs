//! Catalog data types
//!
//! The shapes here mirror what the Open Library search endpoint returns.
//! Every field of a [`BookRecord`] is optional on the wire, so every field is
//! an `Option` here and every accessor states its fallback explicitly.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of records requested per search. Not configurable.
pub const RESULT_LIMIT: u32 = 20;

/// Catalog field a query is matched against
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    /// Match against the work title
    #[default]
    Title,
    /// Match against author names
    Author,
    /// Match against subject headings
    Subject,
    /// Match against ISBN-10/ISBN-13
    Isbn,
}

impl SearchField {
    /// All fields in selector order
    pub const ALL: [Self; 4] = [Self::Title, Self::Author, Self::Subject, Self::Isbn];

    /// Query parameter name understood by the search endpoint
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Subject => "subject",
            Self::Isbn => "isbn",
        }
    }

    /// Human-readable label for the field selector
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Subject => "Subject",
            Self::Isbn => "ISBN",
        }
    }

    /// Next field in selector order, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Subject,
            Self::Subject => Self::Isbn,
            Self::Isbn => Self::Title,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// One search result as returned by the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Work key, e.g. `/works/OL82563W`
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Option<Vec<String>>,
    #[serde(default)]
    pub first_publish_year: Option<i64>,
    /// Language codes such as `eng`, `fre`
    #[serde(default)]
    pub language: Option<Vec<String>>,
    #[serde(default)]
    pub isbn: Option<Vec<String>>,
    #[serde(default)]
    pub publisher: Option<Vec<String>>,
    /// Cover image identifier
    #[serde(default)]
    pub cover_i: Option<i64>,
}

impl BookRecord {
    /// Create a record with only a title
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Title, or `"Untitled"` when the catalog sent none
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Authors joined with `", "`; empty when absent
    #[must_use]
    pub fn authors_joined(&self) -> String {
        self.author_name
            .as_ref()
            .map(|names| names.join(", "))
            .unwrap_or_default()
    }

    /// Publish year as text. Zero is treated the same as absent.
    #[must_use]
    pub fn year_text(&self) -> Option<String> {
        self.first_publish_year
            .filter(|year| *year != 0)
            .map(|year| year.to_string())
    }

    /// Language codes joined with `", "`, `None` when absent or empty
    #[must_use]
    pub fn languages_joined(&self) -> Option<String> {
        self.language
            .as_ref()
            .filter(|codes| !codes.is_empty())
            .map(|codes| codes.join(", "))
    }

    /// First listed publisher
    #[must_use]
    pub fn first_publisher(&self) -> Option<&str> {
        self.publisher.as_ref()?.first().map(String::as_str)
    }

    /// First listed ISBN
    #[must_use]
    pub fn first_isbn(&self) -> Option<&str> {
        self.isbn.as_ref()?.first().map(String::as_str)
    }

    /// Cover identifier usable in a cover URL. Non-positive ids count as absent.
    #[must_use]
    pub fn cover_id(&self) -> Option<i64> {
        self.cover_i.filter(|id| *id > 0)
    }
}

/// Parameters of a single catalog search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub field: SearchField,
    /// Trimmed query text, not yet URL-escaped
    pub query: String,
    pub limit: u32,
}

impl SearchRequest {
    /// Build a request with the fixed result ceiling
    #[must_use]
    pub fn new(field: SearchField, query: &str) -> Self {
        Self {
            field,
            query: query.trim().to_string(),
            limit: RESULT_LIMIT,
        }
    }
}

/// Body of a search response. Only `docs` is consumed.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub docs: Option<Vec<BookRecord>>,
}

impl SearchResponse {
    /// Parse a response body
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the body is not a JSON object with an
    /// optional `docs` array of records.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Records in response order, empty when `docs` was absent
    #[must_use]
    pub fn into_records(self) -> Vec<BookRecord> {
        self.docs.unwrap_or_default()
    }
}

/// Cover image resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSize {
    /// Card thumbnail
    Medium,
    /// Detail overlay
    Large,
}

impl CoverSize {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Medium => "M",
            Self::Large => "L",
        }
    }
}

/// Deterministic cover URL templates keyed by cover identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverUrls {
    base: String,
}

impl CoverUrls {
    /// Create templates rooted at `base` (e.g. `https://covers.openlibrary.org/b/id`)
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// URL for a cover id at the given size
    #[must_use]
    pub fn url(&self, cover_id: i64, size: CoverSize) -> String {
        format!("{}/{cover_id}-{}.jpg", self.base, size.suffix())
    }

    /// URL for a record's cover, `None` when the record has no cover id
    #[must_use]
    pub fn for_record(&self, record: &BookRecord, size: CoverSize) -> Option<String> {
        record.cover_id().map(|id| self.url(id, size))
    }
}

impl Default for CoverUrls {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_COVERS_URL)
    }
}
