//! Letter multiset
//!
//! A count per letter of the alphabet, used for every "letters still available"
//! computation in the solver.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A multiset of lowercase ASCII letters stored as 26 counts
///
/// Removal is a checked decrement, so counts can never go negative.
/// The type is `Copy`: each recursive solver call works on its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts([u8; ALPHABET_SIZE]);

impl LetterCounts {
    /// An empty multiset
    pub const EMPTY: Self = Self([0; ALPHABET_SIZE]);

    /// Build counts from the letters of a string
    ///
    /// Returns `None` if any byte is not a lowercase ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use qless_grid::core::LetterCounts;
    ///
    /// let counts = LetterCounts::from_letters("hello").unwrap();
    /// assert_eq!(counts.count(b'l'), 2);
    /// assert_eq!(counts.total(), 5);
    /// assert!(LetterCounts::from_letters("Hi!").is_none());
    /// ```
    #[must_use]
    pub fn from_letters(text: &str) -> Option<Self> {
        let mut counts = Self::EMPTY;
        for &byte in text.as_bytes() {
            if !counts.add(byte) {
                return None;
            }
        }
        Some(counts)
    }

    #[inline]
    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }

    /// How many copies of `letter` the multiset holds
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u8 {
        Self::index(letter).map_or(0, |i| self.0[i])
    }

    /// Add one copy of `letter`
    ///
    /// Returns `false` (and leaves the multiset unchanged) for non-letters.
    #[inline]
    pub fn add(&mut self, letter: u8) -> bool {
        match Self::index(letter) {
            Some(i) => {
                self.0[i] = self.0[i].saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Remove one copy of `letter`
    ///
    /// Returns `false` if the letter is not present; the multiset is unchanged.
    #[inline]
    pub fn try_remove(&mut self, letter: u8) -> bool {
        match Self::index(letter) {
            Some(i) if self.0[i] > 0 => {
                self.0[i] -= 1;
                true
            }
            _ => false,
        }
    }

    /// Remove every letter of `word`, one at a time
    ///
    /// On failure the multiset may be partially drained, so callers work on a copy.
    pub fn try_remove_all(&mut self, word: &[u8]) -> bool {
        word.iter().all(|&letter| self.try_remove(letter))
    }

    /// Union of two multisets (counts are summed)
    #[must_use]
    pub fn merged(mut self, other: &Self) -> Self {
        for (mine, theirs) in self.0.iter_mut().zip(other.0.iter()) {
            *mine = mine.saturating_add(*theirs);
        }
        self
    }

    /// Whether every letter of `self` is available in `other` at least as many times
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a <= b)
    }

    /// Total number of letters
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| usize::from(c)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Iterate over `(letter, count)` for letters with a non-zero count
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (b'a'..=b'z')
            .zip(self.0.iter().copied())
            .filter(|&(_, count)| count > 0)
    }

    /// Number of distinct letters present
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&c| c > 0).count()
    }
}

impl fmt::Display for LetterCounts {
    /// Letters in alphabetical order, repeated by count
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, count) in self.iter() {
            for _ in 0..count {
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_letters() {
        let counts = LetterCounts::from_letters("mmooddhckpbh").unwrap();
        assert_eq!(counts.count(b'm'), 2);
        assert_eq!(counts.count(b'h'), 2);
        assert_eq!(counts.count(b'c'), 1);
        assert_eq!(counts.count(b'z'), 0);
        assert_eq!(counts.total(), 12);
        assert_eq!(counts.distinct(), 8);
    }

    #[test]
    fn rejects_non_letters() {
        assert!(LetterCounts::from_letters("abc1").is_none());
        assert!(LetterCounts::from_letters("ABC").is_none());
        assert!(LetterCounts::from_letters("a b").is_none());
    }

    #[test]
    fn remove_is_checked() {
        let mut counts = LetterCounts::from_letters("ab").unwrap();
        assert!(counts.try_remove(b'a'));
        assert!(!counts.try_remove(b'a'));
        assert!(!counts.try_remove(b'!'));
        assert_eq!(counts.count(b'a'), 0);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn remove_all_fails_on_shortage() {
        let mut counts = LetterCounts::from_letters("cat").unwrap();
        assert!(!counts.try_remove_all(b"tact"));

        let mut counts = LetterCounts::from_letters("catt").unwrap();
        assert!(counts.try_remove_all(b"tact"));
        assert!(counts.is_empty());
    }

    #[test]
    fn merged_sums_counts() {
        let a = LetterCounts::from_letters("aab").unwrap();
        let b = LetterCounts::from_letters("abc").unwrap();
        let merged = a.merged(&b);
        assert_eq!(merged.count(b'a'), 3);
        assert_eq!(merged.count(b'b'), 2);
        assert_eq!(merged.count(b'c'), 1);
        // Inputs are untouched
        assert_eq!(a.total(), 3);
    }

    #[test]
    fn subset_relation() {
        let roll = LetterCounts::from_letters("mmooddhckpbh").unwrap();
        assert!(LetterCounts::from_letters("mod").unwrap().is_subset_of(&roll));
        assert!(LetterCounts::from_letters("mood").unwrap().is_subset_of(&roll));
        assert!(!LetterCounts::from_letters("moooo").unwrap().is_subset_of(&roll));
        assert!(LetterCounts::EMPTY.is_subset_of(&roll));
    }

    #[test]
    fn display_is_sorted() {
        let counts = LetterCounts::from_letters("banana").unwrap();
        assert_eq!(counts.to_string(), "aaabnn");
    }
}
