//! Word sources for grid filling
//!
//! The solver only queries words through the `WordSource` trait. `Dictionary`
//! is the in-memory implementation built from rating files.

pub mod loader;

use crate::core::{Score, Word};
use rustc_hash::FxHashMap;

/// Read-only query interface over scored words
pub trait WordSource {
    /// All words whose score is at least `threshold`, in a stable order
    fn words_with_score_at_least(&self, threshold: Score) -> Vec<&Word>;

    /// Score of a word, or `None` if the source does not know it
    fn score_of(&self, word: &str) -> Option<Score>;
}

/// Scored words kept in insertion order
///
/// Inserting a word that is already present replaces its score but keeps its
/// original position, so iteration order never depends on hashing.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from `(text, score)` pairs, skipping invalid words
    ///
    /// # Examples
    /// ```
    /// use qless_grid::wordlists::{Dictionary, WordSource};
    ///
    /// let dictionary = Dictionary::from_pairs([("mod", 5), ("ox", 5), ("cob", 2)]);
    /// assert_eq!(dictionary.len(), 2); // "ox" is too short
    /// assert_eq!(dictionary.score_of("cob"), Some(2));
    /// assert_eq!(dictionary.words_with_score_at_least(3).len(), 1);
    /// ```
    pub fn from_pairs<'s>(pairs: impl IntoIterator<Item = (&'s str, Score)>) -> Self {
        let mut dictionary = Self::new();
        for (text, score) in pairs {
            if let Ok(word) = Word::new(text, score) {
                dictionary.insert(word);
            }
        }
        dictionary
    }

    /// Insert a word, replacing the score of an existing entry
    pub fn insert(&mut self, word: Word) {
        if let Some(&position) = self.index.get(word.text()) {
            self.words[position] = word;
        } else {
            self.index.insert(word.text().to_string(), self.words.len());
            self.words.push(word);
        }
    }

    /// Insert a word only if it is not already known
    ///
    /// Returns `true` if the word was added.
    pub fn insert_if_absent(&mut self, word: Word) -> bool {
        if self.index.contains_key(word.text()) {
            return false;
        }
        self.insert(word);
        true
    }

    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index.get(text).map(|&i| &self.words[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl WordSource for Dictionary {
    fn words_with_score_at_least(&self, threshold: Score) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|word| word.score() >= threshold)
            .collect()
    }

    fn score_of(&self, word: &str) -> Option<Score> {
        self.get(word).map(Word::score)
    }
}
