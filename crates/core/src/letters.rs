//! Letter sources - where fresh tiles come from
//!
//! The engine only ever asks for "one more letter"; the distribution lives in
//! the source. [`WeightedLetters`] draws from a configured `{letter: weight}`
//! table using a seeded RNG so games are reproducible. [`CycleLetters`] repeats
//! a fixed pattern and is handy for fixtures where refills must be predictable.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::LetterWeights;
use crate::error::ConfigError;
use crate::types::{Cell, Letter};

/// Produces letters for new and refilled tiles.
pub trait LetterSource {
    fn next_letter(&mut self) -> Letter;

    /// Fill every cell of a row, column or whole board.
    fn fill(&mut self, cells: &mut [Cell]) {
        for cell in cells {
            *cell = Some(self.next_letter());
        }
    }
}

impl<S: LetterSource + ?Sized> LetterSource for &mut S {
    fn next_letter(&mut self) -> Letter {
        (**self).next_letter()
    }
}

impl<S: LetterSource + ?Sized> LetterSource for Box<S> {
    fn next_letter(&mut self) -> Letter {
        (**self).next_letter()
    }
}

/// Weighted random letters
#[derive(Debug, Clone)]
pub struct WeightedLetters {
    letters: Vec<Letter>,
    dist: WeightedIndex<u32>,
    rng: StdRng,
}

impl WeightedLetters {
    /// Create a source drawing from `weights` with the given seed
    pub fn new(weights: &LetterWeights, seed: u64) -> Result<Self, ConfigError> {
        let entries = weights.entries()?;
        let letters: Vec<Letter> = entries.iter().map(|&(l, _)| l).collect();
        let raw: Vec<u32> = entries.iter().map(|&(_, w)| w).collect();
        let dist = WeightedIndex::new(&raw).map_err(|e| ConfigError::Weights(e.to_string()))?;

        Ok(Self {
            letters,
            dist,
            rng: StdRng::seed_from_u64(seed),
        })
    }
}

impl LetterSource for WeightedLetters {
    fn next_letter(&mut self) -> Letter {
        self.letters[self.dist.sample(&mut self.rng)]
    }
}

/// Repeats a fixed letter pattern forever
#[derive(Debug, Clone)]
pub struct CycleLetters {
    pattern: Vec<Letter>,
    index: usize,
}

impl CycleLetters {
    /// Non-letters in `pattern` are skipped; an empty pattern yields `A`.
    pub fn new(pattern: &str) -> Self {
        let mut pattern: Vec<Letter> = pattern.chars().filter_map(Letter::from_char).collect();
        if pattern.is_empty() {
            pattern.extend(Letter::from_char('A'));
        }
        Self { pattern, index: 0 }
    }
}

impl LetterSource for CycleLetters {
    fn next_letter(&mut self) -> Letter {
        let letter = self.pattern[self.index];
        self.index = (self.index + 1) % self.pattern.len();
        letter
    }
}
