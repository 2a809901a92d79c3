//! Search engine integration
//!
//! Ties tokenization, variant expansion, predicate construction, scoring
//! and ranking into the complete request pipeline over a
//! [`PublicationStore`]. The engine is stateless: every call recomputes
//! the whole pipeline, so concurrent searches need no coordination.

use serde::Serialize;
use tracing::debug;

use super::predicate::{build_predicate, SearchPredicate};
use super::ranking::rank;
use super::tokenizer::tokenize;
use crate::catalog::records::{Publication, PublicationId};
use crate::catalog::store::{PublicationStore, SearchFilters};

/// Fixed page size of the public catalog listing.
pub const PAGE_SIZE: usize = 12;

/// Outcome of one search: the ranked identity sequence plus the totals
/// a caller needs for pagination and display.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// Ranked identities, best first.
    pub ids: Vec<PublicationId>,
    /// Matching records before the ranker's cap.
    pub total: usize,
    /// The token sequence the query expanded to; empty means the query
    /// was unusable and the outcome is a plain browse.
    pub tokens: Vec<String>,
}

impl SearchOutcome {
    pub fn is_browse(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// One page of re-fetched results, in rank order.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    /// 1-based page number, clamped to the valid range.
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
    pub results: Vec<Publication>,
}

/// The complete search pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchEngine;

impl SearchEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run a search. Queries that yield no usable tokens degrade to a
    /// browse of the filter-restricted catalog in store order; this
    /// function never fails.
    pub fn search<S: PublicationStore>(
        &self,
        store: &S,
        query: &str,
        filters: &SearchFilters,
    ) -> SearchOutcome {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            let records = store.filter(&SearchPredicate::default(), filters);
            debug!(records = records.len(), "empty query, browsing in store order");
            return SearchOutcome {
                total: records.len(),
                ids: records.into_iter().map(|record| record.id).collect(),
                tokens,
            };
        }

        let predicate = build_predicate(&tokens);
        let candidates = store.filter(&predicate, filters);
        debug!(
            tokens = ?tokens,
            candidates = candidates.len(),
            "scoring candidates"
        );
        let ranked = rank(&candidates, &tokens);
        debug!(kept = ranked.ids.len(), total = ranked.total, "ranked");
        SearchOutcome {
            ids: ranked.ids,
            total: ranked.total,
            tokens,
        }
    }

    /// Materialize one page of an outcome, re-fetching records from the
    /// store in rank order. Out-of-range pages clamp; an empty outcome
    /// yields an empty first page.
    pub fn page<S: PublicationStore>(
        &self,
        store: &S,
        outcome: &SearchOutcome,
        page: usize,
    ) -> SearchPage {
        let page_count = outcome.ids.len().div_ceil(PAGE_SIZE).max(1);
        let page = page.clamp(1, page_count);
        let start = (page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(outcome.ids.len());
        let slice = outcome.ids.get(start..end).unwrap_or(&[]);
        SearchPage {
            page,
            page_count,
            total: outcome.total,
            results: store.fetch_ordered(slice),
        }
    }
}
