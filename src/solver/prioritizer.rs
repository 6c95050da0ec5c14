//! Candidate ordering by letter scarcity
//!
//! Words that spend letters few other candidates can use are tried first, so
//! dead ends show up near the root of the search.

use crate::core::{ALPHABET_SIZE, LetterCounts, Roll, Score, Word};
use crate::wordlists::WordSource;

/// Words from `source` that can be spelled from `roll`, hard-to-use letters first
///
/// # Algorithm
/// 1. Keep words with score ≥ `threshold` whose letters fit in the roll.
/// 2. For each roll letter `l`:
///    `need(l) = avg_occurrence - occurrences(l) / roll_count(l)`, where
///    `avg_occurrence` is the total length of all candidates divided by the
///    number of distinct roll letters.
/// 3. Stable sort by the sum of `need` over the word's letters, descending.
///
/// # Examples
/// ```
/// use qless_grid::core::Roll;
/// use qless_grid::solver::prioritize;
/// use qless_grid::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_pairs([("mod", 5), ("moon", 5), ("cob", 2)]);
/// let roll = Roll::new("mmooddhckpbh").unwrap();
///
/// let words = prioritize(&roll, &dictionary, 5);
/// assert_eq!(words.len(), 1); // "moon" needs an n, "cob" scores too low
/// assert_eq!(words[0].text(), "mod");
/// ```
#[must_use]
pub fn prioritize<'a, S: WordSource + ?Sized>(
    roll: &Roll,
    source: &'a S,
    threshold: Score,
) -> Vec<&'a Word> {
    let candidates = candidate_words(roll, source, threshold);
    if candidates.is_empty() {
        return candidates;
    }

    let need = letter_need(roll.counts(), &candidates);
    let mut scored: Vec<(f64, &Word)> = candidates
        .into_iter()
        .map(|word| {
            let total: f64 = word
                .bytes()
                .iter()
                .map(|&b| need[usize::from(b - b'a')])
                .sum();
            (total, word)
        })
        .collect();

    // sort_by is stable: equal scores keep word-source order
    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    scored.into_iter().map(|(_, word)| word).collect()
}

/// Words passing the score threshold whose letters fit in the roll
#[must_use]
pub fn candidate_words<'a, S: WordSource + ?Sized>(
    roll: &Roll,
    source: &'a S,
    threshold: Score,
) -> Vec<&'a Word> {
    source
        .words_with_score_at_least(threshold)
        .into_iter()
        .filter(|word| word.fits_in(roll.counts()))
        .collect()
}

/// Scarcity weight of every letter; letters absent from the roll weigh 0
fn letter_need(roll: &LetterCounts, candidates: &[&Word]) -> [f64; ALPHABET_SIZE] {
    let distinct = roll.distinct();
    let mut need = [0.0; ALPHABET_SIZE];
    if distinct == 0 {
        return need;
    }

    let total_length: usize = candidates.iter().map(|w| w.len()).sum();
    let avg_occurrence = total_length as f64 / distinct as f64;

    let mut occurrences = [0usize; ALPHABET_SIZE];
    for word in candidates {
        for (letter, count) in word.counts().iter() {
            occurrences[usize::from(letter - b'a')] += usize::from(count);
        }
    }

    for (letter, available) in roll.iter() {
        let i = usize::from(letter - b'a');
        need[i] = avg_occurrence - occurrences[i] as f64 / f64::from(available);
    }
    need
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    fn texts(words: &[&Word]) -> Vec<String> {
        words.iter().map(|w| w.text().to_string()).collect()
    }

    #[test]
    fn filters_by_threshold_and_roll() {
        let dictionary =
            Dictionary::from_pairs([("mod", 5), ("cob", 3), ("hop", 5), ("moon", 5), ("mood", 4)]);
        let roll = Roll::new("mmooddhckpbh").unwrap();

        let mut at_four = texts(&prioritize(&roll, &dictionary, 4));
        at_four.sort();
        assert_eq!(at_four, ["hop", "mod", "mood"]);

        let mut at_one = texts(&prioritize(&roll, &dictionary, 1));
        at_one.sort();
        assert_eq!(at_one, ["cob", "hop", "mod", "mood"]);
    }

    #[test]
    fn hard_to_use_letters_sort_first() {
        // Only one candidate can spend the 'z'
        let dictionary = Dictionary::from_pairs([("aba", 5), ("bab", 5), ("zab", 5)]);
        let roll = Roll::new("aabbz").unwrap();

        let ordered = texts(&prioritize(&roll, &dictionary, 5));
        assert_eq!(ordered, ["zab", "aba", "bab"]);
    }

    #[test]
    fn need_matches_formula() {
        let dictionary = Dictionary::from_pairs([("abc", 5), ("aab", 5)]);
        let roll = Roll::new("aabbc").unwrap();
        let candidates = candidate_words(&roll, &dictionary, 5);
        let need = letter_need(roll.counts(), &candidates);

        // total length 6 over 3 distinct letters
        let avg = 2.0;
        assert!((need[0] - (avg - 3.0 / 2.0)).abs() < 1e-9); // a
        assert!((need[1] - (avg - 2.0 / 2.0)).abs() < 1e-9); // b
        assert!((need[2] - (avg - 1.0 / 1.0)).abs() < 1e-9); // c
        assert!(need[3].abs() < 1e-9); // d not in roll
    }

    #[test]
    fn ordering_is_deterministic() {
        let dictionary = Dictionary::from_pairs([("mod", 5), ("cob", 5), ("hop", 5), ("dim", 5)]);
        let roll = Roll::new("mmooddhckpbh").unwrap();
        let first = texts(&prioritize(&roll, &dictionary, 5));
        let second = texts(&prioritize(&roll, &dictionary, 5));
        assert_eq!(first, second);
    }

    #[test]
    fn higher_threshold_never_adds_words() {
        let dictionary =
            Dictionary::from_pairs([("mod", 1), ("cob", 2), ("hop", 3), ("bod", 4), ("pod", 5)]);
        let roll = Roll::new("mmooddhckpbh").unwrap();
        let counts: Vec<usize> = (0..=6)
            .map(|t| prioritize(&roll, &dictionary, t).len())
            .collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(counts[6], 0);
    }

    #[test]
    fn empty_source_gives_empty_order() {
        let dictionary = Dictionary::new();
        let roll = Roll::new("mmooddhckpbh").unwrap();
        assert!(prioritize(&roll, &dictionary, 0).is_empty());
    }
}
