//! Move enumerator - every adjacent swap that would form a word
//!
//! Each cell probes its right and bottom neighbour: swap, look for a word,
//! swap back. Every unordered adjacent pair is therefore probed exactly once,
//! through whichever endpoint is further up-left.
//!
//! When the board holds no word before probing (the normal, settled case), a
//! swap can only create words in the rows and columns it touches, so only
//! those lines are rescanned. A board that already holds a word falls back to
//! the full rescan per probe; both paths report identical move sets.

use std::collections::BTreeSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::grid::Grid;
use crate::lexicon::Lexicon;
use crate::scanner::{has_match, line_has_word, Line};
use crate::types::Pos;

/// A match-forming swap between `anchor` and its right or bottom neighbour
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub anchor: Pos,
    pub other: Pos,
}

impl Move {
    /// True if this move swaps `p` and `q`, in either order
    pub fn connects(&self, p: Pos, q: Pos) -> bool {
        (self.anchor == p && self.other == q) || (self.anchor == q && self.other == p)
    }
}

/// All available moves on a board, in row-major anchor order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    moves: Vec<Move>,
}

impl MoveSet {
    /// Number of match-forming swaps (the "possible words" counter)
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Distinct anchor cells
    pub fn anchors(&self) -> BTreeSet<Pos> {
        self.moves.iter().map(|m| m.anchor).collect()
    }

    /// True if swapping `p` and `q` forms a word
    pub fn contains(&self, p: Pos, q: Pos) -> bool {
        self.moves.iter().any(|m| m.connects(p, q))
    }

    /// A uniformly random anchor cell, or `None` when no move exists
    pub fn random_anchor<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Pos> {
        let anchors: Vec<Pos> = self.anchors().into_iter().collect();
        anchors.choose(rng).copied()
    }
}

/// Enumerate available moves, rescanning only the lines each probe touches
/// whenever that is equivalent to a full rescan.
pub fn enumerate(grid: &mut Grid, lexicon: &Lexicon) -> MoveSet {
    let moves = if has_match(grid, lexicon) {
        enumerate_exhaustive(grid, lexicon)
    } else {
        probe_all(grid, |g, p, q| touched_lines_have_word(g, lexicon, p, q))
    };
    tracing::debug!(moves = moves.len(), "enumerated moves");
    moves
}

/// Enumerate available moves with a full-board rescan after every probe.
pub fn enumerate_exhaustive(grid: &mut Grid, lexicon: &Lexicon) -> MoveSet {
    probe_all(grid, |g, _, _| has_match(g, lexicon))
}

fn probe_all(grid: &mut Grid, mut forms_word: impl FnMut(&Grid, Pos, Pos) -> bool) -> MoveSet {
    let n = grid.size();
    let mut moves = Vec::new();

    for row in 0..n {
        for col in 0..n {
            let anchor = Pos::new(row, col);
            for other in [anchor.right(n), anchor.below(n)].into_iter().flatten() {
                grid.exchange(anchor, other);
                let hit = forms_word(grid, anchor, other);
                grid.exchange(anchor, other);

                if hit {
                    moves.push(Move { anchor, other });
                }
            }
        }
    }

    MoveSet { moves }
}

fn touched_lines_have_word(grid: &Grid, lexicon: &Lexicon, p: Pos, q: Pos) -> bool {
    let lines = if p.row == q.row {
        [Line::Row(p.row), Line::Col(p.col), Line::Col(q.col)]
    } else {
        [Line::Col(p.col), Line::Row(p.row), Line::Row(q.row)]
    };
    lines.into_iter().any(|line| line_has_word(grid, lexicon, line))
}
