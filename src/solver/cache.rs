//! Per-roll solution cache
//!
//! Each entry remembers the grids found for a roll and how far through the
//! template library the search got, so a later lookup against a grown library
//! resumes where the last one stopped. Lowering the score threshold admits
//! new words, so such a lookup searches the library again from the start.

use super::{Cap, SearchEnd, SearchLimits, prioritize, solve_all};
use crate::core::{Roll, Score, Solution, Word};
use crate::error::LoadError;
use crate::templates::TemplateLibrary;
use crate::wordlists::WordSource;
use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use tempfile::NamedTempFile;

/// A solution together with the library index of the template it fills
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedSolution {
    pub template: usize,
    pub words: Solution,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub solutions: Vec<PlacedSolution>,
    /// Templates `0..templates_tried` have been searched for this roll
    pub templates_tried: usize,
    /// Every tried template was searched with all words scoring at least this
    #[serde(default)]
    pub threshold: Option<Score>,
}

/// Result of [`SolutionCache::lookup_or_extend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLookup {
    pub solutions: Vec<PlacedSolution>,
    pub templates_tried: usize,
    pub threshold: Option<Score>,
    /// Solver attempts spent by this call only
    pub attempts: u64,
    /// Every template in the library has been searched
    pub exhausted: bool,
    /// A template search hit the attempt cap; it is retried on the next lookup
    pub capped: bool,
    /// The entry lost all its solutions and was removed
    pub evicted: bool,
}

impl CacheLookup {
    fn entry(&self) -> CacheEntry {
        CacheEntry {
            solutions: self.solutions.clone(),
            templates_tried: self.templates_tried,
            threshold: self.threshold,
        }
    }
}

/// Roll key to cache entry
#[derive(Debug, Clone, Default)]
pub struct SolutionCache {
    entries: FxHashMap<String, CacheEntry>,
}

impl SolutionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, roll: &Roll) -> Option<&CacheEntry> {
        self.entries.get(roll.key())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by roll key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CacheEntry)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries.into_iter()
    }

    /// Return cached solutions for `roll`, searching further templates if needed
    ///
    /// Stored solutions are checked against the words allowed at `threshold`
    /// and the current library first; stale ones are dropped. Searching then
    /// resumes at the first untried template, or at the first template when
    /// `threshold` is below the one the entry was searched at, and stops once
    /// `stop_after` solutions are held or the library runs out. A template
    /// whose search hits the attempt cap is not marked as tried.
    ///
    /// # Examples
    /// ```
    /// use qless_grid::core::{GridTemplate, Roll, Slot};
    /// use qless_grid::solver::{SearchLimits, SolutionCache};
    /// use qless_grid::templates::TemplateLibrary;
    /// use qless_grid::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 5)]);
    /// let library = TemplateLibrary::new(vec![GridTemplate::new(vec![Slot::new(3)]).unwrap()]);
    /// let roll = Roll::new("mmooddhckpbh").unwrap();
    /// let mut cache = SolutionCache::new();
    ///
    /// let first = cache.lookup_or_extend(&roll, &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
    /// assert_eq!(first.solutions.len(), 2);
    ///
    /// let again = cache.lookup_or_extend(&roll, &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
    /// assert_eq!(again.solutions, first.solutions);
    /// assert_eq!(again.attempts, 0);
    /// ```
    pub fn lookup_or_extend<S: WordSource + ?Sized>(
        &mut self,
        roll: &Roll,
        source: &S,
        library: &TemplateLibrary,
        threshold: Score,
        stop_after: usize,
        limits: SearchLimits,
    ) -> CacheLookup {
        let previous = self.entries.remove(roll.key()).unwrap_or_default();
        let lookup = extend_entry(previous, roll, source, library, threshold, stop_after, limits);
        if !lookup.evicted {
            self.insert(roll, lookup.entry());
        }
        lookup
    }

    /// Store `entry` for `roll`, replacing any previous one
    pub fn insert(&mut self, roll: &Roll, entry: CacheEntry) {
        self.entries.insert(roll.key().to_string(), entry);
    }

    /// Keep whichever of the stored and offered entry got further through the library
    pub fn merge_entry(&mut self, roll: &Roll, entry: CacheEntry) {
        match self.entries.get_mut(roll.key()) {
            Some(existing) if existing.templates_tried >= entry.templates_tried => {}
            Some(existing) => *existing = entry,
            None => self.insert(roll, entry),
        }
    }

    pub fn remove(&mut self, roll: &Roll) -> Option<CacheEntry> {
        self.entries.remove(roll.key())
    }

    /// Read a cache file; a missing file is an empty cache
    ///
    /// Keys are re-canonicalized, and keys that are not valid rolls are
    /// skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` or `LoadError::Json` if the file exists but
    /// cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no cache at {}, starting empty", path.display());
            return Ok(Self::new());
        }

        let reader = BufReader::new(File::open(path)?);
        let stored: BTreeMap<String, CacheEntry> = serde_json::from_reader(reader)?;

        let mut cache = Self::new();
        for (key, entry) in stored {
            match Roll::new(&key) {
                Ok(roll) => cache.merge_entry(&roll, entry),
                Err(e) => warn!("skipping cache entry {key:?}: {e}"),
            }
        }
        debug!("loaded {} cached rolls from {}", cache.len(), path.display());
        Ok(cache)
    }

    /// Write the cache as JSON, replacing `path` atomically
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the temp file cannot be created or moved
    /// into place.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let sorted: BTreeMap<&str, &CacheEntry> = self.iter().collect();
        let temp_file = NamedTempFile::new_in(parent)?;
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer(&mut writer, &sorted)?;
        writer.flush()?;
        drop(writer);

        temp_file.persist(path).map_err(|e| e.error)?;
        debug!("saved {} cached rolls to {}", self.len(), path.display());
        Ok(())
    }
}

/// A cache several workers can extend at once
///
/// The lock is held only to copy an entry out and to store the result back;
/// searching happens outside it. If another worker stored the same roll in
/// between, the entry that got further through the library is kept.
#[derive(Debug, Default)]
pub struct SharedCache {
    inner: Mutex<SolutionCache>,
}

impl SharedCache {
    #[must_use]
    pub fn new(cache: SolutionCache) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }

    #[must_use]
    pub fn get(&self, roll: &Roll) -> Option<CacheEntry> {
        self.lock().get(roll).cloned()
    }

    /// Same as [`SolutionCache::lookup_or_extend`], callable from many threads
    pub fn lookup_or_extend<S: WordSource + ?Sized>(
        &self,
        roll: &Roll,
        source: &S,
        library: &TemplateLibrary,
        threshold: Score,
        stop_after: usize,
        limits: SearchLimits,
    ) -> CacheLookup {
        let snapshot = self.get(roll);
        let previous = snapshot.clone().unwrap_or_default();
        let lookup = extend_entry(previous, roll, source, library, threshold, stop_after, limits);

        let mut cache = self.lock();
        if cache.get(roll) == snapshot.as_ref() {
            if lookup.evicted {
                cache.remove(roll);
            } else {
                cache.insert(roll, lookup.entry());
            }
        } else if !lookup.evicted {
            debug!("roll {roll}: stored concurrently, merging");
            cache.merge_entry(roll, lookup.entry());
        }
        lookup
    }

    pub fn merge_entry(&self, roll: &Roll, entry: CacheEntry) {
        self.lock().merge_entry(roll, entry);
    }

    #[must_use]
    pub fn into_inner(self) -> SolutionCache {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SolutionCache> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn extend_entry<S: WordSource + ?Sized>(
    previous: CacheEntry,
    roll: &Roll,
    source: &S,
    library: &TemplateLibrary,
    threshold: Score,
    stop_after: usize,
    limits: SearchLimits,
) -> CacheLookup {
    let words = prioritize(roll, source, threshold);
    let had_solutions = !previous.solutions.is_empty();

    let mut solutions = revalidate(previous.solutions, roll, &words, library);
    let mut templates_tried = previous.templates_tried.min(library.len());
    let mut searched_at = previous.threshold;
    if solutions.len() < stop_after && previous.threshold.is_some_and(|t| threshold < t) {
        debug!("roll {roll}: threshold lowered to {threshold}, searching from the first template");
        templates_tried = 0;
        searched_at = None;
    }
    let mut attempts = 0;
    let mut capped = false;

    while solutions.len() < stop_after && templates_tried < library.len() {
        let index = templates_tried;
        let Some(template) = library.get(index) else {
            break;
        };
        // Kept solutions on this template will be found again
        let known = solutions.iter().filter(|p| p.template == index).count();
        let wanted = stop_after - solutions.len() + known;
        let template_limits = SearchLimits {
            max_solutions: Some(limits.max_solutions.map_or(wanted, |max| max.min(wanted))),
            ..limits
        };

        let outcome = solve_all(template, roll, &words, template_limits);
        debug!(
            "roll {roll}: template {index} gave {} solutions in {} attempts",
            outcome.solutions.len(),
            outcome.stats.attempts
        );
        attempts += outcome.stats.attempts;
        for words in outcome.solutions {
            let placed = PlacedSolution {
                template: index,
                words,
            };
            if !solutions.contains(&placed) {
                solutions.push(placed);
            }
        }

        if outcome.stats.end == SearchEnd::CapExceeded(Cap::Attempts) {
            debug!("roll {roll}: template {index} hit the attempt cap");
            capped = true;
            break;
        }
        searched_at = Some(searched_at.map_or(threshold, |t| t.max(threshold)));
        templates_tried += 1;
    }

    let exhausted = templates_tried == library.len();
    let evicted = had_solutions && solutions.is_empty() && exhausted;
    if evicted {
        debug!("roll {roll}: no solutions left, evicting");
    }

    CacheLookup {
        solutions,
        templates_tried,
        threshold: searched_at,
        attempts,
        exhausted,
        capped,
        evicted,
    }
}

/// Drop stored solutions whose template is gone, whose words are no longer
/// allowed, or that no longer fit their template
fn revalidate(
    stored: Vec<PlacedSolution>,
    roll: &Roll,
    words: &[&Word],
    library: &TemplateLibrary,
) -> Vec<PlacedSolution> {
    let allowed: FxHashSet<&str> = words.iter().map(|w| w.text()).collect();
    let before = stored.len();
    let kept: Vec<PlacedSolution> = stored
        .into_iter()
        .filter(|placed| {
            library.get(placed.template).is_some_and(|template| {
                placed
                    .words
                    .words()
                    .iter()
                    .all(|w| allowed.contains(w.as_str()))
                    && placed.words.is_valid_for(template, roll)
            })
        })
        .collect();
    if kept.len() < before {
        debug!("roll {roll}: dropped {} stale solutions", before - kept.len());
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridTemplate, Slot};
    use crate::wordlists::Dictionary;

    const ROLL: &str = "mmooddhckpbh";

    fn library() -> TemplateLibrary {
        TemplateLibrary::new(vec![
            // Only mod/ohm fits: ohm's last letter sits on mod's first
            GridTemplate::new(vec![Slot::new(3), Slot::new(3).crossing(0, 2, 0)]).unwrap(),
            GridTemplate::new(vec![Slot::new(3)]).unwrap(),
        ])
    }

    fn roll() -> Roll {
        Roll::new(ROLL).unwrap()
    }

    fn texts(solutions: &[PlacedSolution]) -> Vec<(usize, Vec<String>)> {
        let mut texts: Vec<_> = solutions
            .iter()
            .map(|p| (p.template, p.words.words().to_vec()))
            .collect();
        texts.sort();
        texts
    }

    #[test]
    fn second_lookup_costs_nothing() {
        let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 5)]);
        let library = library();
        let mut cache = SolutionCache::new();

        let first = cache.lookup_or_extend(&roll(), &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
        assert_eq!(first.solutions.len(), 3);
        assert_eq!(first.templates_tried, 2);
        assert!(first.exhausted);
        assert!(first.attempts > 0);

        let second = cache.lookup_or_extend(&roll(), &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
        assert_eq!(second.solutions, first.solutions);
        assert_eq!(second.templates_tried, 2);
        assert_eq!(second.attempts, 0);
    }

    #[test]
    fn lookup_resumes_at_first_untried_template() {
        let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 5)]);
        let library = library();
        let mut cache = SolutionCache::new();

        let first = cache.lookup_or_extend(&roll(), &dictionary, &library, 5, 1, SearchLimits::UNLIMITED);
        assert_eq!(
            texts(&first.solutions),
            [(0, vec!["mod".to_string(), "ohm".to_string()])]
        );
        assert_eq!(first.templates_tried, 1);
        assert!(!first.exhausted);

        let second = cache.lookup_or_extend(&roll(), &dictionary, &library, 5, 3, SearchLimits::UNLIMITED);
        assert_eq!(second.solutions.len(), 3);
        assert_eq!(second.templates_tried, 2);
        // Only the single-slot template was searched: root plus two words
        assert_eq!(second.attempts, 3);
    }

    #[test]
    fn raised_threshold_drops_stale_solutions() {
        let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 3)]);
        let library = library();
        let mut cache = SolutionCache::new();

        let loose = cache.lookup_or_extend(&roll(), &dictionary, &library, 1, 10, SearchLimits::UNLIMITED);
        assert_eq!(loose.solutions.len(), 3);

        let strict = cache.lookup_or_extend(&roll(), &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
        assert_eq!(texts(&strict.solutions), [(1, vec!["mod".to_string()])]);
        assert_eq!(strict.attempts, 0);
        assert!(!strict.evicted);
        // The library was searched with the looser word list
        assert_eq!(cache.get(&roll()).and_then(|e| e.threshold), Some(1));
    }

    #[test]
    fn lowered_threshold_searches_again() {
        let dictionary = Dictionary::from_pairs([("mod", 3), ("ohm", 3)]);
        let library = library();
        let mut cache = SolutionCache::new();

        let strict = cache.lookup_or_extend(&roll(), &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
        assert!(strict.solutions.is_empty());
        assert!(strict.exhausted);

        let loose = cache.lookup_or_extend(&roll(), &dictionary, &library, 3, 10, SearchLimits::UNLIMITED);
        assert_eq!(loose.solutions.len(), 3);
        assert!(loose.attempts > 0);
        assert_eq!(loose.threshold, Some(3));
        assert_eq!(cache.get(&roll()).map(|e| e.solutions.len()), Some(3));
    }

    #[test]
    fn lowered_threshold_keeps_known_solutions_once() {
        let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 3)]);
        let library = library();
        let mut cache = SolutionCache::new();

        let strict = cache.lookup_or_extend(&roll(), &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
        assert_eq!(texts(&strict.solutions), [(1, vec!["mod".to_string()])]);

        let loose = cache.lookup_or_extend(&roll(), &dictionary, &library, 3, 10, SearchLimits::UNLIMITED);
        assert_eq!(
            texts(&loose.solutions),
            [
                (0, vec!["mod".to_string(), "ohm".to_string()]),
                (1, vec!["mod".to_string()]),
                (1, vec!["ohm".to_string()]),
            ]
        );
        assert_eq!(loose.templates_tried, 2);
    }

    #[test]
    fn attempt_capped_template_is_retried() {
        let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 5)]);
        let library = library();
        let mut cache = SolutionCache::new();

        let capped = cache.lookup_or_extend(
            &roll(),
            &dictionary,
            &library,
            5,
            10,
            SearchLimits::UNLIMITED.with_max_attempts(1),
        );
        assert!(capped.solutions.is_empty());
        assert!(capped.capped);
        assert!(!capped.exhausted);
        assert_eq!(capped.templates_tried, 0);

        let full = cache.lookup_or_extend(&roll(), &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
        assert_eq!(full.solutions.len(), 3);
        assert!(full.exhausted);
        assert!(!full.capped);
    }

    #[test]
    fn roll_losing_every_solution_is_evicted() {
        let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 3)]);
        let library = library();
        let mut cache = SolutionCache::new();

        cache.lookup_or_extend(&roll(), &dictionary, &library, 1, 10, SearchLimits::UNLIMITED);
        assert!(cache.get(&roll()).is_some());

        let lookup = cache.lookup_or_extend(&roll(), &dictionary, &library, 6, 10, SearchLimits::UNLIMITED);
        assert!(lookup.solutions.is_empty());
        assert!(lookup.evicted);
        assert!(cache.get(&roll()).is_none());
    }

    #[test]
    fn unsolvable_roll_is_remembered() {
        let dictionary = Dictionary::from_pairs([("zzz", 5)]);
        let library = library();
        let mut cache = SolutionCache::new();

        let first = cache.lookup_or_extend(&roll(), &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
        assert!(first.solutions.is_empty());
        assert!(!first.evicted);

        let second = cache.lookup_or_extend(&roll(), &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
        assert_eq!(second.attempts, 0);
        assert_eq!(cache.get(&roll()).map(|e| e.templates_tried), Some(2));
    }

    #[test]
    fn shrunken_library_drops_missing_templates() {
        let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 5)]);
        let mut cache = SolutionCache::new();
        cache.lookup_or_extend(&roll(), &dictionary, &library(), 5, 10, SearchLimits::UNLIMITED);

        let smaller = library().reordered(&[0]);
        let lookup = cache.lookup_or_extend(&roll(), &dictionary, &smaller, 5, 10, SearchLimits::UNLIMITED);
        assert_eq!(lookup.templates_tried, 1);
        assert!(lookup.solutions.iter().all(|p| p.template == 0));
    }

    #[test]
    fn merge_keeps_further_progress() {
        let mut cache = SolutionCache::new();
        let ahead = CacheEntry {
            solutions: Vec::new(),
            templates_tried: 4,
            threshold: Some(5),
        };
        let behind = CacheEntry {
            solutions: Vec::new(),
            templates_tried: 2,
            threshold: Some(3),
        };
        cache.merge_entry(&roll(), ahead.clone());
        cache.merge_entry(&roll(), behind);
        assert_eq!(cache.get(&roll()), Some(&ahead));
    }

    #[test]
    fn shared_cache_matches_plain_cache() {
        let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 5)]);
        let library = library();
        let shared = SharedCache::default();
        let mut plain = SolutionCache::new();

        let from_shared = shared.lookup_or_extend(&roll(), &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
        let from_plain = plain.lookup_or_extend(&roll(), &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
        assert_eq!(from_shared, from_plain);

        let again = shared.lookup_or_extend(&roll(), &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
        assert_eq!(again.attempts, 0);
        assert_eq!(shared.into_inner().get(&roll()), plain.get(&roll()));
    }

    #[test]
    fn shared_cache_stores_revalidated_entry() {
        let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 3)]);
        let library = library();
        let shared = SharedCache::default();

        let loose = shared.lookup_or_extend(&roll(), &dictionary, &library, 1, 10, SearchLimits::UNLIMITED);
        assert_eq!(loose.solutions.len(), 3);

        let strict = shared.lookup_or_extend(&roll(), &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
        assert_eq!(strict.solutions.len(), 1);
        let stored = shared.get(&roll()).unwrap();
        assert_eq!(stored.solutions, strict.solutions);
    }

    #[test]
    fn shared_cache_evicts_emptied_entry() {
        let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 3)]);
        let library = library();
        let shared = SharedCache::default();

        shared.lookup_or_extend(&roll(), &dictionary, &library, 1, 10, SearchLimits::UNLIMITED);
        let lookup = shared.lookup_or_extend(&roll(), &dictionary, &library, 6, 10, SearchLimits::UNLIMITED);
        assert!(lookup.evicted);
        assert!(shared.get(&roll()).is_none());
    }

    #[test]
    fn saved_cache_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        let dictionary = Dictionary::from_pairs([("mod", 5), ("ohm", 5)]);
        let library = library();

        let mut cache = SolutionCache::new();
        let first = cache.lookup_or_extend(&roll(), &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
        cache.save(&path).unwrap();

        let mut reloaded = SolutionCache::load(&path).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get(&roll()).and_then(|e| e.threshold), Some(5));
        let again = reloaded.lookup_or_extend(&roll(), &dictionary, &library, 5, 10, SearchLimits::UNLIMITED);
        assert_eq!(again.solutions, first.solutions);
        assert_eq!(again.attempts, 0);
    }

    #[test]
    fn load_canonicalizes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(
            &path,
            r#"{"MMOODDHCKPBH": {"solutions": [{"template": 1, "words": ["mod"]}], "templates_tried": 2},
                "not a roll!": {"solutions": [], "templates_tried": 0}}"#,
        )
        .unwrap();

        let cache = SolutionCache::load(&path).unwrap();
        assert_eq!(cache.len(), 1);
        let entry = cache.get(&roll()).unwrap();
        assert_eq!(entry.templates_tried, 2);
        assert_eq!(entry.solutions[0].words.words(), ["mod"]);
    }

    #[test]
    fn missing_cache_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = SolutionCache::load(dir.path().join("absent.json")).unwrap();
        assert!(cache.is_empty());
    }
}
