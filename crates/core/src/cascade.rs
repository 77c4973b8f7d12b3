//! Cascade resolver - remove, collapse, refill, rescan until the board settles
//!
//! Each pass of the loop is a [`Wave`]: every matched tile is emptied, the
//! columns compact downward, empties at the top are refilled, and the board is
//! scanned again. The loop ends on the first scan that finds nothing.
//!
//! Termination depends on the letter source eventually producing a board with
//! no words. That is overwhelmingly likely for any realistic lexicon and
//! weight table and is not special-cased.

use crate::grid::Grid;
use crate::letters::LetterSource;
use crate::lexicon::Lexicon;
use crate::scanner::{scan, MatchSet};
use crate::scoring::{wave_points, ScoreMode};
use crate::types::Pos;

/// One remove/collapse/refill pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wave {
    /// Tiles cleared in this pass (set semantics, each counted once)
    pub cleared: MatchSet,
    /// Letters that fell during collapse
    pub fallen: usize,
    /// Positions refilled with fresh letters
    pub refilled: Vec<Pos>,
    /// Points awarded for this pass
    pub points: u32,
}

/// Everything that happened while settling a board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub waves: Vec<Wave>,
}

impl CascadeReport {
    pub fn total_points(&self) -> u32 {
        self.waves
            .iter()
            .fold(0u32, |acc, w| acc.saturating_add(w.points))
    }

    pub fn total_cleared(&self) -> usize {
        self.waves.iter().map(|w| w.cleared.len()).sum()
    }

    /// Tiles cleared by the triggering match (the first wave)
    pub fn first_cleared(&self) -> Option<&MatchSet> {
        self.waves.first().map(|w| &w.cleared)
    }

    /// True if the board was already settled
    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }
}

/// Drive `grid` to a settled, match-free state.
pub fn resolve(
    grid: &mut Grid,
    lexicon: &Lexicon,
    letters: &mut impl LetterSource,
    cell_score: u32,
    mode: ScoreMode,
) -> CascadeReport {
    let mut report = CascadeReport::default();

    loop {
        let matched = scan(grid, lexicon);
        if matched.is_empty() {
            break;
        }

        grid.clear_cells(&matched);
        let points = wave_points(matched.len(), cell_score, mode);
        let fallen = grid.collapse();
        let refilled = grid.refill(letters);

        tracing::debug!(
            wave = report.waves.len() + 1,
            cleared = matched.len(),
            fallen,
            points,
            "cascade wave"
        );

        report.waves.push(Wave {
            cleared: matched,
            fallen,
            refilled,
            points,
        });
    }

    report
}
