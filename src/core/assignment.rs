//! Search state for one grid
//!
//! A partial assignment pairs every template slot with either nothing or a
//! placed word, plus the letters of the roll that are still unspent.

use super::letters::LetterCounts;
use super::roll::Roll;
use super::template::{GridTemplate, Slot};
use super::word::Word;
use serde::{Deserialize, Serialize};

/// A slot during search: waiting for a word, or holding one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState<'a> {
    Unfilled { slot: &'a Slot },
    Filled { slot: &'a Slot, word: &'a Word },
}

impl<'a> SlotState<'a> {
    #[must_use]
    pub const fn slot(&self) -> &'a Slot {
        match self {
            Self::Unfilled { slot } | Self::Filled { slot, .. } => *slot,
        }
    }

    #[must_use]
    pub const fn word(&self) -> Option<&'a Word> {
        match self {
            Self::Unfilled { .. } => None,
            Self::Filled { word, .. } => Some(*word),
        }
    }
}

/// Working state of one solve attempt
#[derive(Debug, Clone)]
pub struct PartialAssignment<'a> {
    states: Vec<SlotState<'a>>,
    remaining: LetterCounts,
}

impl<'a> PartialAssignment<'a> {
    /// Empty assignment with the whole roll available
    #[must_use]
    pub fn new(template: &'a GridTemplate, roll: &Roll) -> Self {
        Self {
            states: template
                .slots()
                .iter()
                .map(|slot| SlotState::Unfilled { slot })
                .collect(),
            remaining: *roll.counts(),
        }
    }

    /// Index of the first slot without a word, or `None` when complete
    #[must_use]
    pub fn next_unfilled(&self) -> Option<usize> {
        self.states
            .iter()
            .position(|state| matches!(state, SlotState::Unfilled { .. }))
    }

    #[must_use]
    pub fn states(&self) -> &[SlotState<'a>] {
        &self.states
    }

    #[must_use]
    pub fn word_at(&self, index: usize) -> Option<&'a Word> {
        self.states.get(index).and_then(SlotState::word)
    }

    /// Letters not yet spent
    #[must_use]
    pub const fn remaining(&self) -> &LetterCounts {
        &self.remaining
    }

    /// A copy of this assignment with `word` in slot `index` and `remaining` letters left
    #[must_use]
    pub fn with_word(&self, index: usize, word: &'a Word, remaining: LetterCounts) -> Self {
        let mut next = self.clone();
        if let Some(state) = next.states.get_mut(index) {
            *state = SlotState::Filled {
                slot: state.slot(),
                word,
            };
        }
        next.remaining = remaining;
        next
    }

    /// The placed words, or `None` if any slot is still unfilled
    #[must_use]
    pub fn to_solution(&self) -> Option<Solution> {
        self.states
            .iter()
            .map(|state| state.word().map(|w| w.text().to_string()))
            .collect::<Option<Vec<_>>>()
            .map(Solution::new)
    }
}

/// A completely filled grid: one word per slot, in template order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution {
    words: Vec<String>,
}

impl Solution {
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Check this solution against a template and roll
    ///
    /// Verifies slot lengths, every crossing, and that the fresh letters
    /// (crossing cells counted once) fit in the roll.
    #[must_use]
    pub fn is_valid_for(&self, template: &GridTemplate, roll: &Roll) -> bool {
        let slots = template.slots();
        if self.words.len() != slots.len() {
            return false;
        }

        let mut available = *roll.counts();
        for (slot, word) in slots.iter().zip(&self.words) {
            let bytes = word.as_bytes();
            if bytes.len() != slot.length() {
                return false;
            }

            let mut fresh: Vec<u8> = bytes.to_vec();
            for crossing in slot.intersections() {
                let earlier = self.words[crossing.earlier_slot].as_bytes();
                let (Some(&mine), Some(&theirs)) = (
                    bytes.get(crossing.this_position),
                    earlier.get(crossing.earlier_position),
                ) else {
                    return false;
                };
                if mine != theirs {
                    return false;
                }
                // Crossing letter was paid for by the earlier word
                if let Some(pos) = fresh.iter().position(|&b| b == mine) {
                    fresh.swap_remove(pos);
                }
            }

            if !available.try_remove_all(&fresh) {
                return false;
            }
        }
        true
    }
}
