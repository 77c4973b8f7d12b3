//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminal, input, or rendering code, making it:
//!
//! - **Deterministic**: Same seed and lexicon produce identical games
//! - **Testable**: Boards can be built from text rows and letter sources scripted
//! - **Portable**: Can run behind any frontend (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: square board of letter tiles with swap, collapse and refill
//! - [`lexicon`]: the set of valid words of one fixed length
//! - [`letters`]: weighted random and scripted tile sources
//! - [`scanner`]: finds every tile that is part of a dictionary word
//! - [`cascade`]: clear, collapse and refill until the board is settled
//! - [`moves`]: enumerates every adjacent swap that would form a word
//! - [`session`]: score, hints, clock and selection
//! - [`game_state`]: the engine facade tying it all together
//! - [`config`]: game tunables loaded from TOML
//!
//! # Game Rules
//!
//! - **Words**: any row or column window spelling a lexicon word, read
//!   left-to-right or top-to-bottom, is cleared
//! - **Cascades**: tiles fall into the gaps and new tiles drop in from the
//!   top; new words clear too, until the board is settled
//! - **Scoring**: 100 points per cleared tile, each tile counted once per wave
//! - **Clock**: 60 seconds, refilled on every successful swap; a swap that
//!   forms nothing is undone and costs 5 seconds
//! - **Hints**: 3 per game; while a hint is shown, a failed swap loses the game
//!
//! # Example
//!
//! ```
//! use tui_wordfall_core::{CycleLetters, GameConfig, GameState, Grid, Lexicon};
//! use tui_wordfall_core::types::{Phase, Pos};
//!
//! let grid = Grid::from_rows(&["CTA", "XYZ", "ZYX"]).unwrap();
//! let lexicon = Lexicon::from_words(["CAT"], 3);
//! let mut game = GameState::from_grid(
//!     GameConfig::default(),
//!     lexicon,
//!     grid,
//!     CycleLetters::new("Q"),
//!     1,
//! );
//!
//! assert_eq!(game.current_moves().len(), 1);
//! let outcome = game.attempt_swap(Pos::new(0, 1), Pos::new(0, 2));
//! assert!(outcome.is_matched());
//! assert_eq!(game.score(), 300);
//! assert!(matches!(game.phase(), Phase::GameOver(_)));
//! ```
//!
//! # Timing
//!
//! The engine never reads a clock. Frontends report elapsed time through
//! [`GameState::advance_time`](game_state::GameState::advance_time), usually
//! once per 16ms frame.

pub mod cascade;
pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod letters;
pub mod lexicon;
pub mod moves;
pub mod scanner;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use tui_wordfall_types as types;

// Re-export commonly used types for convenience
pub use cascade::{resolve, CascadeReport, Wave};
pub use config::{GameConfig, LetterWeights};
pub use error::{ConfigError, GridError, HintError, LexiconError, SwapError};
pub use game_state::{GameState, SelectOutcome, SwapOutcome};
pub use grid::Grid;
pub use letters::{CycleLetters, LetterSource, WeightedLetters};
pub use lexicon::Lexicon;
pub use moves::{enumerate, enumerate_exhaustive, Move, MoveSet};
pub use scanner::{has_match, line_has_word, scan, Line, MatchSet};
pub use scoring::ScoreMode;
pub use session::Session;
pub use snapshot::GameSnapshot;
