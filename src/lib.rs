//! pubrank: relevance-ranked free-text search for an institutional
//! publication catalog.
//!
//! The crate implements the public search pipeline of the catalog:
//! tokenization, Spanish morphological variant expansion, OR-combined
//! field filtering, integer relevance scoring, and capped rank ordering.
//! Persistence stays behind the [`catalog::PublicationStore`] trait; the
//! engine only ever sees read-only record projections and returns an
//! ordered identity sequence for the caller to re-fetch and paginate.
//!
//! ```
//! use pubrank::catalog::{MemoryStore, Publication, SearchFilters};
//! use pubrank::search::SearchEngine;
//!
//! let store = MemoryStore::new(vec![Publication {
//!     id: 1,
//!     title: "Guía de Estudiantes".to_string(),
//!     ..Publication::default()
//! }]);
//! let engine = SearchEngine::new();
//! let outcome = engine.search(&store, "estudiante", &SearchFilters::default());
//! assert_eq!(outcome.ids, vec![1]);
//! let page = engine.page(&store, &outcome, 1);
//! assert_eq!(page.results[0].title, "Guía de Estudiantes");
//! ```

pub mod catalog;
pub mod error;
pub mod search;

pub use error::AppError;
