//! Core domain types for grid filling
//!
//! This module contains the fundamental domain types: letters, words, rolls,
//! templates and the search state. Everything here is pure and validated at
//! construction.

mod assignment;
mod letters;
mod roll;
mod template;
mod word;

pub use assignment::{PartialAssignment, SlotState, Solution};
pub use letters::{ALPHABET_SIZE, LetterCounts};
pub use roll::{MAX_ROLL_LEN, ROLL_SIZE, Roll, RollError};
pub use template::{Direction, GridTemplate, Intersection, Slot, TemplateError};
pub use word::{MIN_WORD_LEN, Score, Word, WordError};
