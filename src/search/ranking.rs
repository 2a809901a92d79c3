//! Result ranking
//!
//! Scores the materialized candidates, drops everything that scored
//! zero, and produces the ordered identity sequence the caller re-fetches
//! by. The sort is stable, so equal scores keep the store's
//! materialization order.

use serde::Serialize;

use super::scoring::score;
use crate::catalog::records::{Publication, PublicationId};

/// Hard cap on ranked identities handed back for ordered re-fetch.
///
/// Bounds the cost of the order-preserving re-fetch against the store;
/// the pre-cap total is still reported.
pub const RESULT_CAP: usize = 1000;

/// A candidate together with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
    pub id: PublicationId,
    pub score: u32,
}

/// Ordered ranking outcome.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RankedResults {
    /// Identities in descending score order, at most [`RESULT_CAP`].
    pub ids: Vec<PublicationId>,
    /// Positive-scoring candidates before the cap.
    pub total: usize,
}

/// Score and order candidates without truncation.
pub fn score_candidates(candidates: &[Publication], tokens: &[String]) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|record| ScoredCandidate {
            id: record.id,
            score: score(record, tokens),
        })
        .filter(|candidate| candidate.score > 0)
        .collect();
    // Stable: ties keep the order the store materialized them in.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Rank candidates into a capped, ordered identity sequence.
pub fn rank(candidates: &[Publication], tokens: &[String]) -> RankedResults {
    let scored = score_candidates(candidates, tokens);
    let total = scored.len();
    let ids = scored
        .into_iter()
        .take(RESULT_CAP)
        .map(|candidate| candidate.id)
        .collect();
    RankedResults { ids, total }
}
