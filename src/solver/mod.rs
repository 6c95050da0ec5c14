//! Grid filling
//!
//! This module contains the search itself: candidate ordering, the
//! backtracking filler and the per-roll solution cache.

mod backtrack;
pub mod cache;
mod prioritizer;

pub use backtrack::{
    Cap, EnumerateOutcome, SearchEnd, SearchLimits, SearchStats, SolveOutcome, solve, solve_all,
};
pub use cache::{CacheEntry, CacheLookup, PlacedSolution, SharedCache, SolutionCache};
pub use prioritizer::{candidate_words, prioritize};
