//! Batch runs over many rolls
//!
//! Solves every roll in parallel and collects per-template and per-word
//! statistics used to rank templates and review words.

use super::solve::{SolveConfig, solve_roll_in_order};
use crate::core::{Roll, Score, Solution};
use crate::solver::{SearchLimits, prioritize, solve_all};
use crate::templates::TemplateLibrary;
use crate::wordlists::WordSource;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::time::{Duration, Instant};

/// What to look for in each roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// Stop at the first grid
    FirstSuccess,
    /// Keep searching until `stop_after` grids are found
    Exhaustive { stop_after: usize },
}

#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    pub mode: BatchMode,
    pub threshold: Score,
    pub end_threshold: Score,
    pub check_first: Option<usize>,
    /// Shuffle template order per roll from this seed
    pub shuffle_seed: Option<u64>,
    pub limits: SearchLimits,
    pub show_progress: bool,
}

impl BatchConfig {
    #[must_use]
    pub const fn new(mode: BatchMode, threshold: Score) -> Self {
        Self {
            mode,
            threshold,
            end_threshold: threshold,
            check_first: None,
            shuffle_seed: None,
            limits: SearchLimits::UNLIMITED,
            show_progress: false,
        }
    }

    const fn solve_config(&self) -> SolveConfig {
        SolveConfig {
            threshold: self.threshold,
            end_threshold: self.end_threshold,
            check_first: self.check_first,
            limits: self.limits,
        }
    }
}

/// Outcome for a single roll
#[derive(Debug, Clone)]
pub struct RollReport {
    pub roll: Roll,
    pub solutions: usize,
    pub templates_tried: usize,
    /// Attempts spent up to and including the first successful template
    pub attempts_to_first: Option<u64>,
    pub total_attempts: u64,
    pub threshold: Option<Score>,
    /// A limit cut some search short, so more grids may exist
    pub partial: bool,
    /// First grid found, with its template index
    pub first: Option<(usize, Solution)>,
}

impl RollReport {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solutions > 0
    }
}

/// Aggregated results of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchStatistics {
    pub rolls: Vec<RollReport>,
    /// Rolls each template produced at least one grid for
    pub template_successes: Vec<u64>,
    /// Solver attempts spent on each template
    pub template_attempts: Vec<u64>,
    /// Times each word appeared in a found grid
    pub word_usage: FxHashMap<String, u64>,
    pub duration: Duration,
}

impl BatchStatistics {
    #[must_use]
    pub fn solved(&self) -> usize {
        self.rolls.iter().filter(|r| r.is_solved()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.rolls.len() - self.solved()
    }

    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.rolls.is_empty() {
            0.0
        } else {
            self.solved() as f64 / self.rolls.len() as f64
        }
    }

    #[must_use]
    pub fn total_attempts(&self) -> u64 {
        self.rolls.iter().map(|r| r.total_attempts).sum()
    }

    /// Solved rolls, easiest first
    ///
    /// Ordered by attempts to first success ascending, then by number of
    /// grids found descending.
    #[must_use]
    pub fn ranked_rolls(&self) -> Vec<&RollReport> {
        let mut ranked: Vec<&RollReport> = self.rolls.iter().filter(|r| r.is_solved()).collect();
        ranked.sort_by_key(|r| (r.attempts_to_first.unwrap_or(u64::MAX), Reverse(r.solutions)));
        ranked
    }

    /// Most used words, ties alphabetical
    #[must_use]
    pub fn top_words(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut words: Vec<(&str, u64)> = self
            .word_usage
            .iter()
            .map(|(w, &n)| (w.as_str(), n))
            .collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(limit);
        words
    }
}

/// What one roll contributed, before merging
struct RollOutcome {
    report: RollReport,
    /// (template, attempts, grids found)
    per_template: Vec<(usize, u64, usize)>,
    grids: Vec<Solution>,
}

/// Solve every roll and aggregate the results
///
/// # Examples
/// ```
/// use qless_grid::commands::{BatchConfig, BatchMode, run_batch};
/// use qless_grid::core::{GridTemplate, Roll, Slot};
/// use qless_grid::templates::TemplateLibrary;
/// use qless_grid::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 5)]);
/// let library = TemplateLibrary::new(vec![GridTemplate::new(vec![Slot::new(3)]).unwrap()]);
/// let rolls = vec![Roll::new("mmooddhckpbh").unwrap(), Roll::new("zzzzzzzzzzzz").unwrap()];
///
/// let stats = run_batch(&rolls, &dictionary, &library, BatchConfig::new(BatchMode::FirstSuccess, 5));
/// assert_eq!(stats.solved(), 1);
/// assert_eq!(stats.template_successes, [1]);
/// ```
pub fn run_batch<S: WordSource + Sync + ?Sized>(
    rolls: &[Roll],
    source: &S,
    library: &TemplateLibrary,
    config: BatchConfig,
) -> BatchStatistics {
    let start = Instant::now();
    let progress = config.show_progress.then(|| progress_bar(rolls.len()));

    let outcomes: Vec<Option<RollOutcome>> = rolls
        .par_iter()
        .enumerate()
        .map(|(index, roll)| {
            let outcome = match library.check_roll(roll) {
                Ok(()) => {
                    let order = template_order(library, &config, index);
                    match config.mode {
                        BatchMode::FirstSuccess => first_success(roll, source, library, &order, &config),
                        BatchMode::Exhaustive { stop_after } => {
                            Some(exhaustive(roll, source, library, &order, &config, stop_after))
                        }
                    }
                }
                Err(e) => {
                    warn!("skipping roll {roll}: {e}");
                    None
                }
            };
            if let Some(pb) = &progress {
                pb.inc(1);
            }
            outcome
        })
        .collect();

    // Single-threaded merge keeps the statistics deterministic
    let mut stats = BatchStatistics {
        template_successes: vec![0; library.len()],
        template_attempts: vec![0; library.len()],
        ..BatchStatistics::default()
    };
    for outcome in outcomes.into_iter().flatten() {
        for (template, attempts, found) in outcome.per_template {
            stats.template_attempts[template] += attempts;
            if found > 0 {
                stats.template_successes[template] += 1;
            }
        }
        for grid in &outcome.grids {
            for word in grid.words() {
                *stats.word_usage.entry(word.clone()).or_insert(0) += 1;
            }
        }
        stats.rolls.push(outcome.report);
    }
    stats.duration = start.elapsed();

    if let Some(pb) = progress {
        pb.finish_with_message(format!("{}/{} solved", stats.solved(), stats.rolls.len()));
    }
    stats
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Library indices to try for the roll at `index`
fn template_order(library: &TemplateLibrary, config: &BatchConfig, index: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..library.len()).collect();
    if let Some(seed) = config.shuffle_seed {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
        order.shuffle(&mut rng);
    }
    order.truncate(config.check_first.unwrap_or(usize::MAX));
    order
}

fn first_success<S: WordSource + ?Sized>(
    roll: &Roll,
    source: &S,
    library: &TemplateLibrary,
    order: &[usize],
    config: &BatchConfig,
) -> Option<RollOutcome> {
    let result = match solve_roll_in_order(roll, source, library, order, config.solve_config()) {
        Ok(result) => result,
        Err(e) => {
            warn!("skipping roll {roll}: {e}");
            return None;
        }
    };

    let per_template: Vec<(usize, u64, usize)> = result
        .searches
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let found = usize::from(result.is_solved() && i + 1 == result.searches.len());
            (s.template, s.stats.attempts, found)
        })
        .collect();
    let total_attempts = result.total_attempts();
    let first = result.template.zip(result.solution.clone());

    Some(RollOutcome {
        report: RollReport {
            roll: roll.clone(),
            solutions: usize::from(result.is_solved()),
            templates_tried: result.searches.len(),
            attempts_to_first: result.is_solved().then_some(total_attempts),
            total_attempts,
            threshold: result.threshold,
            partial: result.hit_cap(),
            first,
        },
        per_template,
        grids: result.solution.into_iter().collect(),
    })
}

fn exhaustive<S: WordSource + ?Sized>(
    roll: &Roll,
    source: &S,
    library: &TemplateLibrary,
    order: &[usize],
    config: &BatchConfig,
    stop_after: usize,
) -> RollOutcome {
    let mut per_template = Vec::new();
    let mut grids: Vec<Solution> = Vec::new();
    let mut first: Option<(usize, Solution)> = None;
    let mut attempts_to_first = None;
    let mut total_attempts = 0;
    let mut threshold_used = None;
    let mut partial = false;

    for threshold in config.solve_config().thresholds() {
        let words = prioritize(roll, source, threshold);
        for &index in order {
            if grids.len() >= stop_after {
                break;
            }
            let Some(template) = library.get(index) else {
                continue;
            };
            let wanted = stop_after - grids.len();
            let limits = SearchLimits {
                max_solutions: Some(config.limits.max_solutions.map_or(wanted, |m| m.min(wanted))),
                ..config.limits
            };

            let outcome = solve_all(template, roll, &words, limits);
            total_attempts += outcome.stats.attempts;
            partial |= !outcome.stats.is_complete();
            per_template.push((index, outcome.stats.attempts, outcome.solutions.len()));

            if let (None, Some(solution)) = (&first, outcome.solutions.first()) {
                first = Some((index, solution.clone()));
                attempts_to_first = Some(total_attempts);
            }
            grids.extend(outcome.solutions);
        }

        if !grids.is_empty() {
            threshold_used = Some(threshold);
            break;
        }
    }
    debug!("roll {roll}: {} grids in {total_attempts} attempts", grids.len());

    RollOutcome {
        report: RollReport {
            roll: roll.clone(),
            solutions: grids.len(),
            templates_tried: per_template.len(),
            attempts_to_first,
            total_attempts,
            threshold: threshold_used,
            partial,
            first,
        },
        per_template,
        grids,
    }
}
