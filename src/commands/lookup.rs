//! Cached enumeration over many rolls
//!
//! Extends the shared solution cache for each roll in parallel. Rolls already
//! searched against the whole library cost nothing.

use crate::core::{Roll, Score};
use crate::error::SolveError;
use crate::solver::{CacheLookup, SearchLimits, SharedCache};
use crate::templates::TemplateLibrary;
use crate::wordlists::WordSource;
use indicatif::ProgressBar;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupConfig {
    pub threshold: Score,
    /// Grids wanted per roll
    pub stop_after: usize,
    pub limits: SearchLimits,
    pub show_progress: bool,
}

impl LookupConfig {
    #[must_use]
    pub const fn new(threshold: Score, stop_after: usize) -> Self {
        Self {
            threshold,
            stop_after,
            limits: SearchLimits::UNLIMITED,
            show_progress: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LookupReport {
    pub roll: Roll,
    pub lookup: CacheLookup,
}

/// Look up every roll, extending the cache where needed
///
/// Reports come back in roll order.
///
/// # Errors
///
/// Returns `SolveError::EmptyLibrary` for an empty library, or the first
/// roll too short for the library.
pub fn run_lookup<S: WordSource + Sync + ?Sized>(
    rolls: &[Roll],
    source: &S,
    library: &TemplateLibrary,
    cache: &SharedCache,
    config: LookupConfig,
) -> Result<Vec<LookupReport>, SolveError> {
    if library.is_empty() {
        return Err(SolveError::EmptyLibrary);
    }
    for roll in rolls {
        library.check_roll(roll)?;
    }

    let progress = config
        .show_progress
        .then(|| ProgressBar::new(rolls.len() as u64));
    let reports = rolls
        .par_iter()
        .map(|roll| {
            let lookup = cache.lookup_or_extend(
                roll,
                source,
                library,
                config.threshold,
                config.stop_after,
                config.limits,
            );
            if let Some(pb) = &progress {
                pb.inc(1);
            }
            LookupReport {
                roll: roll.clone(),
                lookup,
            }
        })
        .collect();

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    Ok(reports)
}
