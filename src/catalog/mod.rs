//! Catalog access
//!
//! Types and clients for the external bibliographic search API and its
//! cover image service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │   SearchController   │
//! └──────────┬───────────┘
//!            │ SearchRequest (via SearchWorker)
//!            ▼
//! ┌──────────────────────┐
//! │  dyn CatalogSource   │
//! └──────────┬───────────┘
//!     ┌──────┴───────┐
//!     ▼              ▼
//! ┌──────────────┐ ┌─────────────┐
//! │ OpenLibrary  │ │ MockCatalog │
//! │ (reqwest)    │ │ (tests)     │
//! └──────────────┘ └─────────────┘
//! ```

mod client;
mod error;
mod traits;
mod types;

#[cfg(test)]
pub mod mock;

pub use client::OpenLibraryClient;
pub use error::{CatalogError, Result};
pub use traits::CatalogSource;
pub use types::{
    BookRecord, CoverSize, CoverUrls, RESULT_LIMIT, SearchField, SearchRequest, SearchResponse,
};
