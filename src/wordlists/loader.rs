//! Word list loading utilities
//!
//! Reads rating files (`word,score` per line) and plain word lists into a
//! `Dictionary`.

use super::Dictionary;
use crate::core::{Score, Word};
use crate::error::LoadError;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load a ratings file into a new dictionary
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Parse`
/// for a line whose score is not a number.
///
/// # Examples
/// ```no_run
/// use qless_grid::wordlists::loader::load_ratings;
///
/// let dictionary = load_ratings("data/ratings.csv").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_ratings<P: AsRef<Path>>(path: P) -> Result<Dictionary, LoadError> {
    let content = fs::read_to_string(path)?;
    let mut dictionary = Dictionary::new();
    merge_ratings(&mut dictionary, &content)?;
    Ok(dictionary)
}

/// Add the words of a plain list that the dictionary does not rate yet
///
/// Only the first comma-separated field of each line is used, so definition
/// files (`word,"definition"`) load as-is. Returns the number of words added.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
pub fn load_unrated<P: AsRef<Path>>(
    dictionary: &mut Dictionary,
    path: P,
    score: Score,
) -> Result<usize, LoadError> {
    let content = fs::read_to_string(path)?;
    Ok(merge_unrated(dictionary, &content, score))
}

/// Parse `word,score` lines into the dictionary; later lines override earlier ones
///
/// Blank lines and `#` comments are skipped, as are words that are too short
/// or contain non-letters.
///
/// # Errors
///
/// Returns `LoadError::Parse` for a missing or non-numeric score.
pub fn merge_ratings(dictionary: &mut Dictionary, content: &str) -> Result<usize, LoadError> {
    let mut loaded = 0;
    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (text, score) = trimmed.split_once(',').ok_or_else(|| LoadError::Parse {
            line: number + 1,
            message: format!("expected `word,score`, got {trimmed:?}"),
        })?;
        let score_field = unquote(score.split(',').next().unwrap_or_default());
        let score: Score = score_field.parse().map_err(|_| LoadError::Parse {
            line: number + 1,
            message: format!("invalid score {score_field:?}"),
        })?;

        if let Ok(word) = Word::new(unquote(text), score) {
            dictionary.insert(word);
            loaded += 1;
        }
    }
    Ok(loaded)
}

/// Parse a plain list (first field of each line) at a fixed score
///
/// Words already in the dictionary keep their score.
pub fn merge_unrated(dictionary: &mut Dictionary, content: &str, score: Score) -> usize {
    content
        .lines()
        .filter_map(|line| line.split(',').next())
        .map(unquote)
        .filter(|text| !text.is_empty() && !text.starts_with('#'))
        .filter_map(|text| Word::new(text, score).ok())
        .map(|word| usize::from(dictionary.insert_if_absent(word)))
        .sum()
}

/// Read a list of approved words (first field per line, lowercased)
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
pub fn load_word_set<P: AsRef<Path>>(path: P) -> Result<FxHashSet<String>, LoadError> {
    Ok(parse_word_set(&fs::read_to_string(path)?))
}

#[must_use]
pub fn parse_word_set(content: &str) -> FxHashSet<String> {
    content
        .lines()
        .filter_map(|line| line.split(',').next())
        .map(unquote)
        .filter(|text| !text.is_empty() && !text.starts_with('#'))
        .map(str::to_ascii_lowercase)
        .collect()
}

fn unquote(field: &str) -> &str {
    field.trim().trim_matches('"').trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordSource;

    #[test]
    fn ratings_parse_scores() {
        let mut dictionary = Dictionary::new();
        let loaded = merge_ratings(&mut dictionary, "mod,5\ncob,2\n\n# comment\nhop,4\n").unwrap();

        assert_eq!(loaded, 3);
        assert_eq!(dictionary.score_of("mod"), Some(5));
        assert_eq!(dictionary.score_of("cob"), Some(2));
        assert_eq!(dictionary.score_of("hop"), Some(4));
    }

    #[test]
    fn ratings_strip_quotes_and_case() {
        let mut dictionary = Dictionary::new();
        merge_ratings(&mut dictionary, "\"Mod\",\"3\"\n").unwrap();
        assert_eq!(dictionary.score_of("mod"), Some(3));
    }

    #[test]
    fn ratings_skip_invalid_words() {
        let mut dictionary = Dictionary::new();
        let loaded = merge_ratings(&mut dictionary, "ox,5\nmod,5\nx-ray,4\n").unwrap();
        assert_eq!(loaded, 1);
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn ratings_report_bad_score_line() {
        let mut dictionary = Dictionary::new();
        let err = merge_ratings(&mut dictionary, "mod,5\ncob,high\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));

        let err = merge_ratings(&mut dictionary, "mod\n").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 1, .. }));
    }

    #[test]
    fn later_ratings_override() {
        let mut dictionary = Dictionary::new();
        merge_ratings(&mut dictionary, "mod,5\nmod,2\n").unwrap();
        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.score_of("mod"), Some(2));
    }

    #[test]
    fn unrated_words_do_not_override_ratings() {
        let mut dictionary = Dictionary::new();
        merge_ratings(&mut dictionary, "mod,2\n").unwrap();
        let added = merge_unrated(
            &mut dictionary,
            "MOD,\"a modification\"\ncob,\"a horse\"\nox,\"an animal\"\n",
            5,
        );

        assert_eq!(added, 1);
        assert_eq!(dictionary.score_of("mod"), Some(2));
        assert_eq!(dictionary.score_of("cob"), Some(5));
        assert_eq!(dictionary.score_of("ox"), None);
    }

    #[test]
    fn word_set_lowercases_first_field() {
        let set = parse_word_set("Mod\n\"cob\",\"a horse\"\n# note\n\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("mod"));
        assert!(set.contains("cob"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_ratings("/nonexistent/ratings.csv");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
