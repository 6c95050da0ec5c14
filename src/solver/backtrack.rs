//! Backtracking grid filler
//!
//! Fills a template's slots in order. Each recursive call owns a copy of the
//! assignment and of the remaining letters, so failing branches need no undo.

use crate::core::{GridTemplate, LetterCounts, PartialAssignment, Roll, Solution, Word};
use log::trace;
use rustc_hash::FxHashMap;
use std::ops::ControlFlow;

/// Caller-supplied bounds on one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchLimits {
    /// Stop enumerating after this many solutions
    pub max_solutions: Option<usize>,
    /// Stop after this many recursive calls
    pub max_attempts: Option<u64>,
}

impl SearchLimits {
    pub const UNLIMITED: Self = Self {
        max_solutions: None,
        max_attempts: None,
    };

    #[must_use]
    pub const fn with_max_solutions(mut self, max: usize) -> Self {
        self.max_solutions = Some(max);
        self
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max: u64) -> Self {
        self.max_attempts = Some(max);
        self
    }
}

/// Which bound stopped a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cap {
    Solutions,
    Attempts,
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEnd {
    /// First-solution mode found a grid
    Found,
    /// Every branch was explored
    Exhausted,
    /// A limit stopped the search early; more solutions may exist
    CapExceeded(Cap),
}

/// Cost and termination of one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive calls made
    pub attempts: u64,
    pub end: SearchEnd,
}

impl SearchStats {
    /// Whether the search space was explored far enough to trust the result
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        !matches!(self.end, SearchEnd::CapExceeded(_))
    }
}

/// Result of [`solve`]
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub solution: Option<Solution>,
    pub stats: SearchStats,
}

/// Result of [`solve_all`]
#[derive(Debug, Clone)]
pub struct EnumerateOutcome {
    pub solutions: Vec<Solution>,
    pub stats: SearchStats,
}

/// Find the first grid filling `template` from `roll`
///
/// `words` must already be in priority order; candidates for each slot are
/// tried in that order, so equal inputs give equal results.
///
/// # Examples
/// ```
/// use qless_grid::core::{GridTemplate, Roll, Slot};
/// use qless_grid::solver::{SearchLimits, prioritize, solve};
/// use qless_grid::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 5), ("cob", 5)]);
/// let roll = Roll::new("mmooddhckpbh").unwrap();
/// // Second word's last letter crosses the first word's first letter
/// let template = GridTemplate::new(vec![Slot::new(3), Slot::new(3).crossing(0, 2, 0)]).unwrap();
///
/// let words = prioritize(&roll, &dictionary, 5);
/// let outcome = solve(&template, &roll, &words, SearchLimits::UNLIMITED);
/// let solution = outcome.solution.unwrap();
/// assert_eq!(solution.words(), ["mod", "ohm"]);
/// ```
#[must_use]
pub fn solve<'a>(
    template: &'a GridTemplate,
    roll: &Roll,
    words: &[&'a Word],
    limits: SearchLimits,
) -> SolveOutcome {
    let index = CandidateIndex::new(words);
    let mut search = Backtracker::new(template, &index, limits, true);
    let (mut found, stats) = search.run(roll);
    SolveOutcome {
        solution: found.pop(),
        stats,
    }
}

/// Enumerate grids filling `template` from `roll`, up to `limits.max_solutions`
#[must_use]
pub fn solve_all<'a>(
    template: &'a GridTemplate,
    roll: &Roll,
    words: &[&'a Word],
    limits: SearchLimits,
) -> EnumerateOutcome {
    let index = CandidateIndex::new(words);
    let mut search = Backtracker::new(template, &index, limits, false);
    let (solutions, stats) = search.run(roll);
    EnumerateOutcome { solutions, stats }
}

/// Prioritized words grouped by length, order preserved within each group
struct CandidateIndex<'a> {
    by_length: FxHashMap<usize, Vec<&'a Word>>,
}

impl<'a> CandidateIndex<'a> {
    fn new(words: &[&'a Word]) -> Self {
        let mut by_length: FxHashMap<usize, Vec<&'a Word>> = FxHashMap::default();
        for &word in words {
            by_length.entry(word.len()).or_default().push(word);
        }
        Self { by_length }
    }

    fn of_length(&self, length: usize) -> &[&'a Word] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }
}

struct Backtracker<'a, 'c> {
    template: &'a GridTemplate,
    candidates: &'c CandidateIndex<'a>,
    limits: SearchLimits,
    stop_at_first: bool,
    attempts: u64,
    cap: Option<Cap>,
    found: Vec<Solution>,
}

impl<'a, 'c> Backtracker<'a, 'c> {
    const fn new(
        template: &'a GridTemplate,
        candidates: &'c CandidateIndex<'a>,
        limits: SearchLimits,
        stop_at_first: bool,
    ) -> Self {
        Self {
            template,
            candidates,
            limits,
            stop_at_first,
            attempts: 0,
            cap: None,
            found: Vec::new(),
        }
    }

    fn run(&mut self, roll: &Roll) -> (Vec<Solution>, SearchStats) {
        if !self.stop_at_first && self.limits.max_solutions == Some(0) {
            self.cap = Some(Cap::Solutions);
        } else {
            let start = PartialAssignment::new(self.template, roll);
            let flow = self.fill(&start);
            // Only a cap or a first-solution search unwinds early
            debug_assert!(flow.is_continue() || self.cap.is_some() || self.stop_at_first);
        }

        let end = match self.cap {
            Some(cap) => SearchEnd::CapExceeded(cap),
            None if self.stop_at_first && !self.found.is_empty() => SearchEnd::Found,
            None => SearchEnd::Exhausted,
        };
        let stats = SearchStats {
            attempts: self.attempts,
            end,
        };
        (std::mem::take(&mut self.found), stats)
    }

    /// Fill the first unfilled slot and recurse; `Break` unwinds the whole search
    fn fill(&mut self, assignment: &PartialAssignment<'a>) -> ControlFlow<()> {
        if self
            .limits
            .max_attempts
            .is_some_and(|max| self.attempts >= max)
        {
            self.cap = Some(Cap::Attempts);
            return ControlFlow::Break(());
        }
        self.attempts += 1;

        let Some(index) = assignment.next_unfilled() else {
            return self.record(assignment);
        };
        let template = self.template;
        let slot = &template.slots()[index];

        // Letters this slot takes from already placed words
        let mut shared = LetterCounts::EMPTY;
        let mut fixed: Vec<(usize, u8)> = Vec::with_capacity(slot.intersections().len());
        for crossing in slot.intersections() {
            let letter = assignment
                .word_at(crossing.earlier_slot)
                .and_then(|word| word.char_at(crossing.earlier_position));
            if let Some(letter) = letter {
                shared.add(letter);
                fixed.push((crossing.this_position, letter));
            }
        }
        let pool = assignment.remaining().merged(&shared);

        let candidates = self.candidates;
        for &word in candidates.of_length(slot.length()) {
            if !fixed
                .iter()
                .all(|&(position, letter)| word.char_at(position) == Some(letter))
            {
                continue;
            }

            let mut left = pool;
            if !left.try_remove_all(word.bytes()) {
                continue;
            }

            trace!("slot {index}: trying {word}");
            let next = assignment.with_word(index, word, left);
            if self.fill(&next).is_break() {
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }

    fn record(&mut self, assignment: &PartialAssignment<'a>) -> ControlFlow<()> {
        if let Some(solution) = assignment.to_solution() {
            trace!("complete grid: {:?}", solution.words());
            self.found.push(solution);
        }

        if self.stop_at_first {
            return ControlFlow::Break(());
        }
        if self
            .limits
            .max_solutions
            .is_some_and(|max| self.found.len() >= max)
        {
            self.cap = Some(Cap::Solutions);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}
