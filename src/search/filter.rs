//! Local post-fetch filtering
//!
//! Filtering never touches the network: it is a pure projection of the last
//! fetched result set through a [`FilterCriteria`]. A record passes when every
//! specified criterion matches; unspecified criteria match everything.
//!
//! # Iterator Adapter
//!
//! [`RecordFilterExt`] adds the projection to any iterator of borrowed records:
//!
//! ```
//! use bookverse::catalog::BookRecord;
//! use bookverse::search::{FilterCriteria, RecordFilterExt};
//!
//! let records = vec![BookRecord::titled("Dune")];
//! let filters = FilterCriteria::default();
//! let visible = records.iter().filter_criteria(&filters);
//! assert_eq!(visible.len(), 1);
//! ```

use crate::catalog::BookRecord;

/// Filter criterion selector, used by the filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Year,
    Language,
    Isbn,
}

impl FilterField {
    /// All criteria in panel order
    pub const ALL: [Self; 3] = [Self::Year, Self::Language, Self::Isbn];

    /// Label shown next to the input
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Year => "Publish Year",
            Self::Language => "Language (e.g., eng)",
            Self::Isbn => "ISBN",
        }
    }
}

/// Locally-applied narrowing conditions
///
/// `None` means the criterion is not specified. Empty strings are normalised
/// to `None` on every write path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub year: Option<String>,
    pub language: Option<String>,
    pub isbn: Option<String>,
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl FilterCriteria {
    /// Whether no criterion is specified
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.language.is_none() && self.isbn.is_none()
    }

    /// Merge a partial update: fields that are `Some` in `partial` overwrite,
    /// and `Some("")` clears that criterion.
    pub fn merge(&mut self, partial: Self) {
        if let Some(year) = partial.year {
            self.year = normalize(Some(year));
        }
        if let Some(language) = partial.language {
            self.language = normalize(Some(language));
        }
        if let Some(isbn) = partial.isbn {
            self.isbn = normalize(Some(isbn));
        }
    }

    /// Set one criterion; an empty value clears it
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = normalize(Some(value.into()));
        match field {
            FilterField::Year => self.year = value,
            FilterField::Language => self.language = value,
            FilterField::Isbn => self.isbn = value,
        }
    }

    /// Current value of one criterion
    #[must_use]
    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Year => self.year.as_deref(),
            FilterField::Language => self.language.as_deref(),
            FilterField::Isbn => self.isbn.as_deref(),
        }
    }

    /// Whether a record satisfies every specified criterion
    ///
    /// - year: exact text equality with the record's publish year
    /// - language: the lower-cased value is one of the record's codes
    /// - isbn: the value is one of the record's ISBNs
    ///
    /// A record missing the field fails a specified criterion.
    #[must_use]
    pub fn matches(&self, record: &BookRecord) -> bool {
        let year_ok = self.year.as_deref().is_none_or(|wanted| {
            record
                .first_publish_year
                .is_some_and(|year| year.to_string() == wanted)
        });

        let language_ok = self.language.as_deref().is_none_or(|wanted| {
            let wanted = wanted.to_lowercase();
            record
                .language
                .as_ref()
                .is_some_and(|codes| codes.iter().any(|code| *code == wanted))
        });

        let isbn_ok = self.isbn.as_deref().is_none_or(|wanted| {
            record
                .isbn
                .as_ref()
                .is_some_and(|isbns| isbns.iter().any(|isbn| isbn == wanted))
        });

        year_ok && language_ok && isbn_ok
    }
}

/// Extension trait for filtering iterators of borrowed records
pub trait RecordFilterExt<'a>: IntoIterator<Item = &'a BookRecord> + Sized {
    /// Keep the records matching `criteria`, preserving order
    fn filter_criteria(self, criteria: &FilterCriteria) -> Vec<&'a BookRecord> {
        self.into_iter()
            .filter(|record| criteria.matches(record))
            .collect()
    }
}

impl<'a, I> RecordFilterExt<'a> for I where I: IntoIterator<Item = &'a BookRecord> {}
