//! Relevance scoring
//!
//! The precision half of the search. The predicate is OR-only and
//! over-inclusive, so every candidate is re-examined here against the
//! full token sequence and anything that scores zero is discarded by the
//! ranker.
//!
//! Title matches dominate: the per-token title tiers and the whole-title
//! coverage bonuses together outweigh any combination of the secondary
//! field contributions.

use super::predicate::contains_ci;
use crate::catalog::records::Publication;

/// Token is a prefix of the title.
pub const TITLE_PREFIX_SCORE: u32 = 20;
/// Token appears as a space-delimited word of the title.
pub const TITLE_WORD_SCORE: u32 = 15;
/// Token appears anywhere in the title.
pub const TITLE_SUBSTRING_SCORE: u32 = 10;
/// Token appears in the description.
pub const DESCRIPTION_SCORE: u32 = 5;
/// Token appears in the editor's display name.
pub const EDITOR_SCORE: u32 = 3;
/// Token appears among the first related project titles.
pub const PROJECT_TITLE_SCORE: u32 = 2;

/// Every token matched somewhere in the title.
pub const ALL_TOKENS_IN_TITLE_BONUS: u32 = 30;
/// The tokens, re-joined with single spaces, occur verbatim in the title.
pub const FULL_QUERY_IN_TITLE_BONUS: u32 = 50;
/// At least [`MOST_TOKENS_THRESHOLD`] of the tokens matched in the title.
pub const MOST_TOKENS_IN_TITLE_BONUS: u32 = 15;
pub const MOST_TOKENS_THRESHOLD: f64 = 0.7;

/// How many related project titles take part in scoring.
pub const SCORED_PROJECT_TITLES: usize = 5;

/// Compute the relevance score of one record for a token sequence.
///
/// `tokens` is the flattened, expanded sequence produced by
/// [`super::tokenizer::tokenize`]. An empty sequence scores zero.
///
/// The all-tokens (+30) and seventy-percent (+15) title bonuses are not
/// mutually exclusive; a full-coverage title receives both. That overlap
/// is inherited from the reference catalog and kept as-is.
pub fn score(record: &Publication, tokens: &[String]) -> u32 {
    if tokens.is_empty() {
        return 0;
    }

    let title = record.title.to_lowercase();
    let description = record.description.to_lowercase();
    let editor = record.editor.display_name().to_lowercase();
    let project_titles = record
        .projects
        .iter()
        .take(SCORED_PROJECT_TITLES)
        .map(|p| p.title.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let mut total: u32 = 0;
    let mut tokens_in_title: usize = 0;

    for token in tokens {
        // Exactly one title tier fires per token, best first.
        if title.starts_with(token.as_str()) {
            total += TITLE_PREFIX_SCORE;
            tokens_in_title += 1;
        } else if title.split_whitespace().any(|word| word == token.as_str()) {
            total += TITLE_WORD_SCORE;
            tokens_in_title += 1;
        } else if title.contains(token.as_str()) {
            total += TITLE_SUBSTRING_SCORE;
            tokens_in_title += 1;
        }

        if contains_ci(&description, token) {
            total += DESCRIPTION_SCORE;
        }
        if contains_ci(&editor, token) {
            total += EDITOR_SCORE;
        }
        if contains_ci(&project_titles, token) {
            total += PROJECT_TITLE_SCORE;
        }
    }

    if tokens_in_title == tokens.len() {
        total += ALL_TOKENS_IN_TITLE_BONUS;
    }
    if title.contains(&tokens.join(" ")) {
        total += FULL_QUERY_IN_TITLE_BONUS;
    }
    if tokens_in_title as f64 >= MOST_TOKENS_THRESHOLD * tokens.len() as f64 {
        total += MOST_TOKENS_IN_TITLE_BONUS;
    }

    total
}
