//! Game configuration, loadable from TOML.
//!
//! Every field has a default, so a config file only needs to name the values
//! it changes:
//!
//! ```toml
//! grid_size = 8
//! time_budget_ms = 90000
//!
//! [letter_weights]
//! E = 150
//! Q = 0
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    Letter, CELL_SCORE, DEFAULT_GRID_SIZE, DEFAULT_HINTS, DEFAULT_WORD_LEN, MAX_GRID_SIZE,
    MAX_WORD_LEN, MISS_PENALTY_MS, TIME_BUDGET_MS,
};

/// Reference letter distribution (English frequency x10, truncated).
const REFERENCE_WEIGHTS: [(char, u32); 26] = [
    ('A', 85),
    ('B', 14),
    ('C', 27),
    ('D', 50),
    ('E', 130),
    ('F', 22),
    ('G', 20),
    ('H', 65),
    ('I', 75),
    ('J', 1),
    ('K', 7),
    ('L', 40),
    ('M', 24),
    ('N', 70),
    ('O', 80),
    ('P', 19),
    ('Q', 1),
    ('R', 65),
    ('S', 70),
    ('T', 100),
    ('U', 27),
    ('V', 9),
    ('W', 23),
    ('X', 1),
    ('Y', 19),
    ('Z', 0),
];

/// Discrete `{letter: weight}` distribution injected into the letter source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterWeights(BTreeMap<char, u32>);

impl LetterWeights {
    pub fn new(weights: impl IntoIterator<Item = (char, u32)>) -> Self {
        Self(weights.into_iter().collect())
    }

    /// Every letter equally likely.
    pub fn uniform() -> Self {
        Self::new(('A'..='Z').map(|c| (c, 1)))
    }

    /// Weight assigned to `ch` (case-insensitive), 0 if absent.
    pub fn weight(&self, ch: char) -> u32 {
        self.0
            .get(&ch.to_ascii_uppercase())
            .or_else(|| self.0.get(&ch))
            .copied()
            .unwrap_or(0)
    }

    /// Validated `(letter, weight)` pairs in alphabetical order.
    pub fn entries(&self) -> Result<Vec<(Letter, u32)>, ConfigError> {
        let mut entries = Vec::with_capacity(self.0.len());
        for (&ch, &weight) in &self.0 {
            let letter = Letter::from_char(ch)
                .ok_or_else(|| ConfigError::Weights(format!("{ch:?} is not a letter")))?;
            entries.push((letter, weight));
        }
        if entries.iter().all(|&(_, w)| w == 0) {
            return Err(ConfigError::Weights("all weights are zero".into()));
        }
        Ok(entries)
    }
}

impl Default for LetterWeights {
    fn default() -> Self {
        Self::new(REFERENCE_WEIGHTS)
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board edge length
    pub grid_size: usize,
    /// Length of a matching word
    pub word_len: usize,
    /// Hints granted per game
    pub max_hints: u32,
    /// Time allowed between matches
    pub time_budget_ms: u32,
    /// Time lost on a swap that forms no word
    pub miss_penalty_ms: u32,
    /// Points per cleared tile
    pub cell_score: u32,
    pub letter_weights: LetterWeights,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            word_len: DEFAULT_WORD_LEN,
            max_hints: DEFAULT_HINTS,
            time_budget_ms: TIME_BUDGET_MS,
            miss_penalty_ms: MISS_PENALTY_MS,
            cell_score: CELL_SCORE,
            letter_weights: LetterWeights::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// A board smaller than the word length is accepted; it simply never matches.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::Validation(format!(
                "grid_size must be in 1..={MAX_GRID_SIZE}"
            )));
        }
        if self.word_len == 0 || self.word_len > MAX_WORD_LEN {
            return Err(ConfigError::Validation(format!(
                "word_len must be in 1..={MAX_WORD_LEN}"
            )));
        }
        if self.time_budget_ms == 0 {
            return Err(ConfigError::Validation(
                "time_budget_ms must be > 0".into(),
            ));
        }
        self.letter_weights.entries()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size, 12);
        assert_eq!(config.word_len, 5);
    }

    #[test]
    fn reference_weights_match_truncated_frequencies() {
        let w = LetterWeights::default();
        assert_eq!(w.weight('E'), 130);
        assert_eq!(w.weight('t'), 100);
        assert_eq!(w.weight('B'), 14);
        assert_eq!(w.weight('Z'), 0);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml("grid_size = 8\nmax_hints = 1\n").unwrap();
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.max_hints, 1);
        assert_eq!(config.word_len, 5);
        assert_eq!(config.time_budget_ms, 60_000);
    }

    #[test]
    fn toml_letter_weights() {
        let config = GameConfig::from_toml("[letter_weights]\nA = 3\nB = 1\n").unwrap();
        let entries = config.letter_weights.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(config.letter_weights.weight('a'), 3);
    }

    #[test]
    fn rejects_bad_values() {
        let config = GameConfig {
            word_len: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let config = GameConfig {
            grid_size: MAX_GRID_SIZE + 1,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            letter_weights: LetterWeights::new([('A', 0), ('B', 0)]),
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Weights(_))));

        let config = GameConfig {
            letter_weights: LetterWeights::new([('A', 1), ('3', 1)]),
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Weights(_))));
    }

    #[test]
    fn small_board_is_allowed() {
        let config = GameConfig {
            grid_size: 3,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
