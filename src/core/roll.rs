//! Rolled letters
//!
//! A roll is the multiset of letters drawn for one puzzle. It is validated once
//! at the API boundary; everything downstream works with `Roll` values only.

use super::letters::LetterCounts;
use super::word::MIN_WORD_LEN;
use std::fmt;

/// Number of dice in the standard game
pub const ROLL_SIZE: usize = 12;

/// Longest roll accepted; letter counts are stored as `u8`
pub const MAX_ROLL_LEN: usize = u8::MAX as usize;

/// A validated multiset of rolled letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Roll {
    key: String,
    counts: LetterCounts,
}

/// Reasons a roll is rejected before any search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    /// The roll holds fewer letters than the shortest fillable slot
    TooShort { letters: usize, minimum: usize },
    /// More letters than a count can hold
    TooLong { letters: usize, maximum: usize },
    /// A character outside `a`-`z`
    InvalidCharacter(char),
}

impl fmt::Display for RollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { letters, minimum } => write!(
                f,
                "Roll has {letters} letters, but the shortest slot needs {minimum}"
            ),
            Self::TooLong { letters, maximum } => {
                write!(f, "Roll has {letters} letters, at most {maximum} are allowed")
            }
            Self::InvalidCharacter(c) => write!(f, "Roll contains invalid character {c:?}"),
        }
    }
}

impl std::error::Error for RollError {}

impl Roll {
    /// Validate a roll string
    ///
    /// Letters are lowercased and whitespace is ignored.
    ///
    /// # Errors
    /// Returns `RollError` for non-letter characters, fewer than three letters,
    /// or more than [`MAX_ROLL_LEN`] letters.
    ///
    /// # Examples
    /// ```
    /// use qless_grid::core::Roll;
    ///
    /// let roll = Roll::new("MMOODDHCKPBH").unwrap();
    /// assert_eq!(roll.key(), "bcddhhkmmoop");
    /// assert_eq!(roll.len(), 12);
    ///
    /// assert!(Roll::new("ab").is_err());
    /// assert!(Roll::new("abc?").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, RollError> {
        let letters = text.chars().filter(|c| !c.is_whitespace()).count();
        if letters > MAX_ROLL_LEN {
            return Err(RollError::TooLong {
                letters,
                maximum: MAX_ROLL_LEN,
            });
        }

        let mut counts = LetterCounts::EMPTY;
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            let lower = c.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(RollError::InvalidCharacter(c));
            }
            counts.add(lower as u8);
        }

        if counts.total() < MIN_WORD_LEN {
            return Err(RollError::TooShort {
                letters: counts.total(),
                minimum: MIN_WORD_LEN,
            });
        }

        Ok(Self {
            key: counts.to_string(),
            counts,
        })
    }

    /// Canonical key: the letters in sorted order
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &LetterCounts {
        &self.counts
    }

    /// Total number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.key.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_is_sorted() {
        let a = Roll::new("mmooddhckpbh").unwrap();
        let b = Roll::new("hbpkchddoomm").unwrap();
        assert_eq!(a.key(), b.key());
        assert_eq!(a, b);
    }

    #[test]
    fn whitespace_and_case_ignored() {
        let roll = Roll::new(" Abc DEF ").unwrap();
        assert_eq!(roll.key(), "abcdef");
    }

    #[test]
    fn fewer_than_three_letters_rejected() {
        assert_eq!(
            Roll::new("ab"),
            Err(RollError::TooShort {
                letters: 2,
                minimum: 3
            })
        );
        assert!(matches!(Roll::new(""), Err(RollError::TooShort { .. })));
    }

    #[test]
    fn overlong_roll_rejected() {
        let longest = "a".repeat(MAX_ROLL_LEN);
        let roll = Roll::new(&longest).unwrap();
        assert_eq!(roll.counts().count(b'a'), u8::MAX);

        assert_eq!(
            Roll::new(&format!("{longest}a")),
            Err(RollError::TooLong {
                letters: MAX_ROLL_LEN + 1,
                maximum: MAX_ROLL_LEN
            })
        );
    }

    #[test]
    fn invalid_characters_rejected() {
        assert_eq!(Roll::new("abc1"), Err(RollError::InvalidCharacter('1')));
        assert_eq!(Roll::new("abcé"), Err(RollError::InvalidCharacter('é')));
    }

    #[test]
    fn counts_match_letters() {
        let roll = Roll::new("aab").unwrap();
        assert_eq!(roll.counts().count(b'a'), 2);
        assert_eq!(roll.counts().count(b'b'), 1);
        assert_eq!(roll.len(), 3);
    }
}
