//! Word review queue
//!
//! Finds words that batch runs leaned on but nobody has rated yet.

use super::batch::BatchStatistics;
use crate::core::Score;
use crate::wordlists::WordSource;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurationCandidate {
    pub word: String,
    pub uses: u64,
}

/// Unapproved words still at `review_score`, most used first
///
/// Ties are broken alphabetically and the list is cut to `limit`.
#[must_use]
pub fn curation_candidates<S: WordSource + ?Sized>(
    stats: &BatchStatistics,
    source: &S,
    approved: &FxHashSet<String>,
    review_score: Score,
    limit: usize,
) -> Vec<CurationCandidate> {
    let mut candidates: Vec<CurationCandidate> = stats
        .word_usage
        .iter()
        .filter(|(word, _)| !approved.contains(word.as_str()))
        .filter(|(word, _)| source.score_of(word.as_str()) == Some(review_score))
        .map(|(word, &uses)| CurationCandidate {
            word: word.clone(),
            uses,
        })
        .collect();

    candidates.sort_by(|a, b| b.uses.cmp(&a.uses).then_with(|| a.word.cmp(&b.word)));
    candidates.truncate(limit);
    candidates
}
