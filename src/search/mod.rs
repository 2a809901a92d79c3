//! The public search and relevance-ranking pipeline
//!
//! Pure, stateless functions composed by [`engine::SearchEngine`]:
//! tokenizer → morphology → predicate → scoring → ranking.

pub mod engine;
pub mod morphology;
pub mod predicate;
pub mod ranking;
pub mod scoring;
pub mod tokenizer;


pub use engine::{SearchEngine, SearchOutcome, SearchPage, PAGE_SIZE};
pub use morphology::expand;
pub use predicate::{build_predicate, FieldContains, SearchField, SearchPredicate};
pub use ranking::{rank, RankedResults, ScoredCandidate, RESULT_CAP};
pub use scoring::score;
pub use tokenizer::{normalize_word, tokenize};
