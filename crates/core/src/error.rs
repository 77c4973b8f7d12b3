//! Error types for the engine and its collaborators.
//!
//! Only misuse of the API is modelled as an error. Ordinary gameplay events
//! (a swap that forms no word, a missed hint, running out of time) are
//! reported through [`crate::SwapOutcome`] and [`crate::types::Phase`].

use std::path::PathBuf;

use crate::types::Pos;

/// A swap request that was rejected before touching the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SwapError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Pos),

    #[error("positions {0} and {1} are not adjacent")]
    NotAdjacent(Pos, Pos),

    #[error("no game is in progress")]
    NotPlaying,
}

/// A hint request that cannot be honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HintError {
    #[error("no hints left")]
    NoHintsLeft,

    #[error("a hint is already active")]
    AlreadyActive,

    #[error("no move is available")]
    NoMoves,

    #[error("no game is in progress")]
    NotPlaying,
}

/// Failure to read the word list.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failure to build a grid from text rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("grid has {rows} rows but {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    #[error("invalid tile {ch:?} at {pos}")]
    BadLetter { ch: char, pos: Pos },
}

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("invalid letter weights: {0}")]
    Weights(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_error_display() {
        let err = SwapError::NotAdjacent(Pos::new(0, 0), Pos::new(0, 2));
        assert_eq!(err.to_string(), "positions (0, 0) and (0, 2) are not adjacent");
    }

    #[test]
    fn grid_error_display() {
        let err = GridError::BadLetter {
            ch: '3',
            pos: Pos::new(1, 4),
        };
        assert_eq!(err.to_string(), "invalid tile '3' at (1, 4)");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Validation("word_len must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: word_len must be > 0");
    }
}
