//! Roll solving command
//!
//! Walks the template library for one roll and reports the first grid found,
//! relaxing the word score threshold when nothing fits.

use crate::core::{Roll, Score, Solution};
use crate::error::SolveError;
use crate::solver::{SearchLimits, SearchStats, prioritize, solve};
use crate::templates::TemplateLibrary;
use crate::wordlists::WordSource;
use log::debug;

/// Configuration for solving a roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    /// Minimum score a word needs on the first pass
    pub threshold: Score,
    /// Lowest threshold to relax to (inclusive)
    pub end_threshold: Score,
    /// Only try the first N templates
    pub check_first: Option<usize>,
    /// Per-template search limits
    pub limits: SearchLimits,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(threshold: Score) -> Self {
        Self {
            threshold,
            end_threshold: threshold,
            check_first: None,
            limits: SearchLimits::UNLIMITED,
        }
    }

    #[must_use]
    pub const fn relax_to(mut self, end_threshold: Score) -> Self {
        self.end_threshold = end_threshold;
        self
    }

    /// Thresholds to try, strictest first
    pub fn thresholds(&self) -> impl Iterator<Item = Score> {
        (self.end_threshold.min(self.threshold)..=self.threshold).rev()
    }
}

/// One template search made while solving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateAttempt {
    pub template: usize,
    pub threshold: Score,
    pub stats: SearchStats,
}

/// Result of solving a roll
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub roll: Roll,
    /// Library index of the template that was filled
    pub template: Option<usize>,
    pub solution: Option<Solution>,
    /// Threshold in force when the grid was found
    pub threshold: Option<Score>,
    /// Every template search in the order made
    pub searches: Vec<TemplateAttempt>,
}

impl SolveResult {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    #[must_use]
    pub fn total_attempts(&self) -> u64 {
        self.searches.iter().map(|s| s.stats.attempts).sum()
    }

    /// Whether some search was cut short by a limit
    #[must_use]
    pub fn hit_cap(&self) -> bool {
        self.searches.iter().any(|s| !s.stats.is_complete())
    }
}

/// Solve a roll against the library in library order
///
/// # Errors
///
/// Returns `SolveError::EmptyLibrary` for an empty library, or
/// `SolveError::InvalidRoll` if the roll is shorter than every slot.
///
/// # Examples
/// ```
/// use qless_grid::commands::{SolveConfig, solve_roll};
/// use qless_grid::core::{GridTemplate, Roll, Slot};
/// use qless_grid::templates::TemplateLibrary;
/// use qless_grid::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 3)]);
/// let library = TemplateLibrary::new(vec![
///     GridTemplate::new(vec![Slot::new(3), Slot::new(3).crossing(0, 2, 0)]).unwrap(),
/// ]);
/// let roll = Roll::new("mmooddhckpbh").unwrap();
///
/// // "ohm" only qualifies once the threshold drops to 3
/// let result = solve_roll(&roll, &dictionary, &library, SolveConfig::new(5).relax_to(3)).unwrap();
/// assert_eq!(result.threshold, Some(3));
/// assert_eq!(result.solution.unwrap().words(), ["mod", "ohm"]);
/// ```
pub fn solve_roll<S: WordSource + ?Sized>(
    roll: &Roll,
    source: &S,
    library: &TemplateLibrary,
    config: SolveConfig,
) -> Result<SolveResult, SolveError> {
    let order: Vec<usize> = (0..library.len())
        .take(config.check_first.unwrap_or(usize::MAX))
        .collect();
    solve_roll_in_order(roll, source, library, &order, config)
}

/// Solve a roll trying templates in `order`
///
/// Each threshold from `config.threshold` down to `config.end_threshold`
/// gets a full pass over `order` before the next is tried.
///
/// # Errors
///
/// See [`solve_roll`].
pub fn solve_roll_in_order<S: WordSource + ?Sized>(
    roll: &Roll,
    source: &S,
    library: &TemplateLibrary,
    order: &[usize],
    config: SolveConfig,
) -> Result<SolveResult, SolveError> {
    if library.is_empty() {
        return Err(SolveError::EmptyLibrary);
    }
    library.check_roll(roll)?;

    let mut result = SolveResult {
        roll: roll.clone(),
        template: None,
        solution: None,
        threshold: None,
        searches: Vec::new(),
    };

    for threshold in config.thresholds() {
        let words = prioritize(roll, source, threshold);
        debug!("roll {roll}: {} candidate words at threshold {threshold}", words.len());

        for &index in order {
            let Some(template) = library.get(index) else {
                continue;
            };
            let outcome = solve(template, roll, &words, config.limits);
            result.searches.push(TemplateAttempt {
                template: index,
                threshold,
                stats: outcome.stats,
            });

            if let Some(solution) = outcome.solution {
                debug!("roll {roll}: template {index} filled at threshold {threshold}");
                result.template = Some(index);
                result.solution = Some(solution);
                result.threshold = Some(threshold);
                return Ok(result);
            }
        }
    }

    debug!("roll {roll}: no grid down to threshold {}", config.end_threshold);
    Ok(result)
}
