//! Catalog records and the store boundary

pub mod records;
pub mod store;

pub use records::{Person, Project, Publication, PublicationId};
pub use store::{MemoryStore, PublicationStore, SearchFilters};
