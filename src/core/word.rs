//! Dictionary word representation
//!
//! A Word stores a lowercase word of at least three letters, its acceptability
//! score and its letter counts for fast multiset checks.

use super::letters::LetterCounts;
use std::fmt;

/// Acceptability ("realness") score attached to a word by the word source
pub type Score = u8;

/// Shortest word that may be placed in a grid
pub const MIN_WORD_LEN: usize = 3;

/// A dictionary word with its score and letter composition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    score: Score,
    counts: LetterCounts,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    TooShort(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => {
                write!(f, "Word must have at least {MIN_WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string and its score
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is below three letters
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use qless_grid::core::Word;
    ///
    /// let word = Word::new("Crane", 5).unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.score(), 5);
    ///
    /// assert!(Word::new("ox", 5).is_err());
    /// assert!(Word::new("sh0rt", 5).is_err());
    /// ```
    pub fn new(text: impl Into<String>, score: Score) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() < MIN_WORD_LEN {
            return Err(WordError::TooShort(text.len()));
        }

        let counts = LetterCounts::from_letters(&text).ok_or(WordError::InvalidCharacters)?;

        Ok(Self {
            text,
            score,
            counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: words have at least three letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// Returns `None` past the end of the word.
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<u8> {
        self.text.as_bytes().get(position).copied()
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Letter composition of the word
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &LetterCounts {
        &self.counts
    }

    /// Whether the word can be spelled from `letters` alone
    #[inline]
    #[must_use]
    pub fn fits_in(&self, letters: &LetterCounts) -> bool {
        self.counts.is_subset_of(letters)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane", 4).unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.bytes(), b"crane");
        assert_eq!(word.len(), 5);
        assert_eq!(word.score(), 4);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CrAnE", 5).unwrap();
        assert_eq!(word.text(), "crane");
    }

    #[test]
    fn word_creation_too_short() {
        assert_eq!(Word::new("ox", 5), Err(WordError::TooShort(2)));
        assert_eq!(Word::new("", 5), Err(WordError::TooShort(0)));
        assert!(Word::new("oxo", 5).is_ok());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3", 5), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne", 5), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café", 5), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("mod", 5).unwrap();
        assert_eq!(word.char_at(0), Some(b'm'));
        assert_eq!(word.char_at(2), Some(b'd'));
        assert_eq!(word.char_at(3), None);
    }

    #[test]
    fn word_counts_duplicates() {
        let word = Word::new("mood", 5).unwrap();
        assert_eq!(word.counts().count(b'o'), 2);
        assert_eq!(word.counts().count(b'm'), 1);
        assert_eq!(word.counts().total(), 4);
    }

    #[test]
    fn word_fits_in_roll() {
        let roll = LetterCounts::from_letters("mmooddhckpbh").unwrap();
        assert!(Word::new("mood", 5).unwrap().fits_in(&roll));
        assert!(!Word::new("moon", 5).unwrap().fits_in(&roll));
        assert!(!Word::new("doddo", 5).unwrap().fits_in(&roll));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane", 5).unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
