//! Roll sources
//!
//! Rolls come either from a file of pre-generated rolls or from throwing the
//! game's dice.

use crate::core::{ROLL_SIZE, Roll, RollError};
use crate::error::LoadError;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::path::Path;

/// The twelve dice of the game, six faces each
const STANDARD_DICE: [&str; ROLL_SIZE] = [
    "aeiouu", "aaeeoo", "iionny", "nnrrhh", "wrflld", "hhpttw", "ppvfgk", "ggldrr", "ccjtbd",
    "ccsttm", "szxnbk", "mmblly",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceSet {
    dice: Vec<Vec<u8>>,
}

impl DiceSet {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            dice: STANDARD_DICE.iter().map(|d| d.as_bytes().to_vec()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Throw every die once
    ///
    /// # Errors
    ///
    /// Returns `RollError` only if the set holds fewer than three dice.
    ///
    /// # Examples
    /// ```
    /// use qless_grid::rolls::DiceSet;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let roll = DiceSet::standard().roll(&mut rng).unwrap();
    /// assert_eq!(roll.len(), 12);
    /// ```
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Roll, RollError> {
        let letters: String = self
            .dice
            .iter()
            .filter_map(|faces| faces.choose(rng))
            .map(|&face| char::from(face))
            .collect();
        Roll::new(&letters)
    }

    /// Throw the set `count` times
    ///
    /// # Errors
    ///
    /// See [`DiceSet::roll`].
    pub fn roll_many<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<Roll>, RollError> {
        (0..count).map(|_| self.roll(rng)).collect()
    }
}

/// Read rolls, one per line; lines that are not full rolls are skipped
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
pub fn load_rolls<P: AsRef<Path>>(path: P) -> Result<Vec<Roll>, LoadError> {
    Ok(parse_rolls(&fs::read_to_string(path)?))
}

#[must_use]
pub fn parse_rolls(content: &str) -> Vec<Roll> {
    let rolls: Vec<Roll> = content
        .lines()
        .map(str::trim)
        .filter(|line| line.len() == ROLL_SIZE)
        .filter_map(|line| Roll::new(line).ok())
        .collect();
    debug!("parsed {} rolls", rolls.len());
    rolls
}
