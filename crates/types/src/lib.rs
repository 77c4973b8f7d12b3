//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Board Geometry
//!
//! The board is a square grid of letter tiles addressed by `(row, col)`:
//!
//! - **Rows**: indexed top to bottom, `0..size`
//! - **Columns**: indexed left to right, `0..size`
//! - **Default size**: 12x12 with 5-letter words
//!
//! # Game Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_SIZE` | 12 | Board edge length |
//! | `DEFAULT_WORD_LEN` | 5 | Length of a matching word |
//! | `CELL_SCORE` | 100 | Points per cleared tile |
//! | `DEFAULT_HINTS` | 3 | Hints per game |
//! | `TIME_BUDGET_MS` | 60000 | Time allowed between matches |
//! | `MISS_PENALTY_MS` | 5000 | Time lost on a swap that forms no word |
//! | `TICK_MS` | 16 | Frontend frame interval |
//!
//! # Examples
//!
//! ```
//! use tui_wordfall_types::{GameAction, Letter, Pos};
//!
//! let a = Pos::new(3, 4);
//! assert!(a.is_adjacent(Pos::new(3, 5)));
//! assert!(!a.is_adjacent(Pos::new(4, 5)));
//!
//! let e = Letter::from_char('e').unwrap();
//! assert_eq!(e.as_char(), 'E');
//!
//! assert_eq!(GameAction::from_str("hint"), Some(GameAction::Hint));
//! ```

use std::fmt;

/// Default board edge length (12x12)
pub const DEFAULT_GRID_SIZE: usize = 12;

/// Default word length that counts as a match
pub const DEFAULT_WORD_LEN: usize = 5;

/// Upper bound for the configurable word length.
///
/// The scanner reads windows into a fixed-capacity buffer of this size.
pub const MAX_WORD_LEN: usize = 16;

/// Upper bound for the configurable board size.
pub const MAX_GRID_SIZE: usize = 64;

/// Points awarded per cleared tile
pub const CELL_SCORE: u32 = 100;

/// Hints granted at the start of each game
pub const DEFAULT_HINTS: u32 = 3;

/// Time budget between matches (60 seconds)
pub const TIME_BUDGET_MS: u32 = 60_000;

/// Time penalty for a swap that forms no word (5 seconds)
pub const MISS_PENALTY_MS: u32 = 5_000;

/// Frontend frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// A board coordinate.
///
/// Ordering is row-major, so sets of positions iterate top-left to bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two positions
    pub fn manhattan(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True when the positions share an edge (4-directional adjacency)
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.manhattan(other) == 1
    }

    /// Neighbour to the right, if it lies within a board of `size`
    pub fn right(self, size: usize) -> Option<Pos> {
        (self.col + 1 < size).then(|| Pos::new(self.row, self.col + 1))
    }

    /// Neighbour below, if it lies within a board of `size`
    pub fn below(self, size: usize) -> Option<Pos> {
        (self.row + 1 < size).then(|| Pos::new(self.row + 1, self.col))
    }

    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An uppercase ASCII letter tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Build a letter from any ASCII alphabetic char (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_wordfall_types::Letter;
    ///
    /// assert_eq!(Letter::from_char('q').map(|l| l.as_char()), Some('Q'));
    /// assert_eq!(Letter::from_char('7'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self(ch.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    pub fn from_byte(b: u8) -> Option<Self> {
        if b.is_ascii_alphabetic() {
            Some(Self(b.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_byte(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A cell on the board
///
/// - `None`: empty (only observable in the middle of a cascade)
/// - `Some(Letter)`: a letter tile
pub type Cell = Option<Letter>;

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// The time budget ran out (including via a miss penalty)
    TimeUp,
    /// No adjacent swap can form a word
    NoMoves,
    /// A swap made while a hint was live formed no word
    HintMiss,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::TimeUp => "time up",
            GameOverReason::NoMoves => "no moves left",
            GameOverReason::HintMiss => "missed the hint",
        }
    }
}

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    GameOver(GameOverReason),
    /// The player quit; no further operations are accepted
    Terminated,
}

impl Phase {
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, Phase::GameOver(_))
    }
}

/// Player actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the board cursor one row up
    CursorUp,
    /// Move the board cursor one row down
    CursorDown,
    /// Move the board cursor one column left
    CursorLeft,
    /// Move the board cursor one column right
    CursorRight,
    /// Select the tile under the cursor (second selection attempts a swap)
    Select,
    /// Reveal a hint
    Hint,
    /// Start a new game
    Restart,
    /// Leave the game
    Quit,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_wordfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("cursorLeft"), Some(GameAction::CursorLeft));
    /// assert_eq!(GameAction::from_str("SELECT"), Some(GameAction::Select));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "select" => Some(GameAction::Select),
            "hint" => Some(GameAction::Hint),
            "restart" => Some(GameAction::Restart),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::Select => "select",
            GameAction::Hint => "hint",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_defaults() {
        assert_eq!(DEFAULT_GRID_SIZE, 12);
        assert_eq!(DEFAULT_WORD_LEN, 5);
        assert_eq!(CELL_SCORE, 100);
        assert_eq!(DEFAULT_HINTS, 3);
        assert_eq!(TIME_BUDGET_MS, 60_000);
        assert_eq!(MISS_PENALTY_MS, 5_000);
    }

    #[test]
    fn adjacency_is_manhattan_one() {
        let p = Pos::new(5, 5);
        assert!(p.is_adjacent(Pos::new(4, 5)));
        assert!(p.is_adjacent(Pos::new(6, 5)));
        assert!(p.is_adjacent(Pos::new(5, 4)));
        assert!(p.is_adjacent(Pos::new(5, 6)));

        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Pos::new(6, 6)));
        assert!(!p.is_adjacent(Pos::new(5, 7)));
    }

    #[test]
    fn neighbours_respect_bounds() {
        assert_eq!(Pos::new(0, 0).right(3), Some(Pos::new(0, 1)));
        assert_eq!(Pos::new(0, 2).right(3), None);
        assert_eq!(Pos::new(1, 0).below(3), Some(Pos::new(2, 0)));
        assert_eq!(Pos::new(2, 0).below(3), None);
    }

    #[test]
    fn positions_order_row_major() {
        let mut v = vec![Pos::new(1, 0), Pos::new(0, 5), Pos::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Pos::new(0, 1), Pos::new(0, 5), Pos::new(1, 0)]);
    }

    #[test]
    fn letters_are_uppercased() {
        assert_eq!(Letter::from_byte(b'a').map(Letter::as_byte), Some(b'A'));
        assert_eq!(Letter::from_byte(b'-'), None);
        assert_eq!(Letter::from_char('Z').unwrap().to_string(), "Z");
    }

    #[test]
    fn action_names_roundtrip() {
        for action in [
            GameAction::CursorUp,
            GameAction::CursorDown,
            GameAction::CursorLeft,
            GameAction::CursorRight,
            GameAction::Select,
            GameAction::Hint,
            GameAction::Restart,
            GameAction::Quit,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
