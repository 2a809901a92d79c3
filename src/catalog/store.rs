//! The external record store boundary
//!
//! The engine never owns persistence. It talks to a [`PublicationStore`]:
//! one call to materialize predicate candidates, one call to re-fetch
//! records in ranked order. [`MemoryStore`] is the reference
//! implementation, backed by a JSON corpus projection, and doubles as the
//! store used in tests and the CLI harness.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use super::records::{Publication, PublicationId};
use crate::error::AppError;
use crate::search::predicate::SearchPredicate;

/// Structured narrowing filters applied around the free-text search.
///
/// AND-combined; a `None` field places no restriction. These are the
/// caller's filters (type dropdown, category, author, date window), not
/// part of the ranking itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchFilters {
    pub kind: Option<String>,
    pub category_id: Option<i64>,
    pub author_id: Option<i64>,
    pub published_from: Option<NaiveDate>,
    pub published_to: Option<NaiveDate>,
}

impl SearchFilters {
    pub fn matches(&self, record: &Publication) -> bool {
        if let Some(kind) = &self.kind {
            if record.kind.as_deref() != Some(kind.as_str()) {
                return false;
            }
        }
        if let Some(category_id) = self.category_id {
            if record.category_id != Some(category_id) {
                return false;
            }
        }
        if let Some(author_id) = self.author_id {
            if record.author_id != Some(author_id) {
                return false;
            }
        }
        if let Some(from) = self.published_from {
            match record.published_at {
                Some(date) if date >= from => {}
                _ => return false,
            }
        }
        if let Some(to) = self.published_to {
            match record.published_at {
                Some(date) if date <= to => {}
                _ => return false,
            }
        }
        true
    }
}

/// Read-only record source the engine runs against.
///
/// Implementations must return candidates in a stable default order and
/// are responsible for capping how many candidates they materialize per
/// call; the engine scores whatever it is given.
pub trait PublicationStore {
    /// Records passing both the structured filters and the predicate,
    /// in the store's default order.
    fn filter(&self, predicate: &SearchPredicate, filters: &SearchFilters) -> Vec<Publication>;

    /// Re-fetch records by identity, preserving the given order.
    /// Unknown identities are skipped, not errors.
    fn fetch_ordered(&self, ids: &[PublicationId]) -> Vec<Publication>;
}

/// Default ceiling on candidates a [`MemoryStore`] materializes per call.
pub const DEFAULT_MAX_CANDIDATES: usize = 10_000;

/// In-memory store over a JSON corpus projection.
pub struct MemoryStore {
    records: Vec<Publication>,
    by_id: HashMap<PublicationId, usize>,
    max_candidates: usize,
}

impl MemoryStore {
    pub fn new(records: Vec<Publication>) -> Self {
        let by_id = records
            .iter()
            .enumerate()
            .map(|(index, record)| (record.id, index))
            .collect();
        Self {
            records,
            by_id,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Override the pre-scoring candidate ceiling.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Parse a corpus from a JSON array of publications.
    pub fn from_json(data: &str) -> Result<Self, AppError> {
        let records: Vec<Publication> = serde_json::from_str(data)?;
        Ok(Self::new(records))
    }

    /// Load a corpus file from disk.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let data = fs::read_to_string(path)?;
        let store = Self::from_json(&data)?;
        debug!(records = store.len(), path = %path.display(), "corpus loaded");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PublicationStore for MemoryStore {
    fn filter(&self, predicate: &SearchPredicate, filters: &SearchFilters) -> Vec<Publication> {
        self.records
            .iter()
            .filter(|record| filters.matches(record) && predicate.matches(record))
            .take(self.max_candidates)
            .cloned()
            .collect()
    }

    fn fetch_ordered(&self, ids: &[PublicationId]) -> Vec<Publication> {
        ids.iter()
            .filter_map(|id| self.by_id.get(id))
            .map(|&index| self.records[index].clone())
            .collect()
    }
}
