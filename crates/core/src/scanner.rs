//! Word scanner - finds lexicon words laid out along rows and columns
//!
//! Every window of `word_len` consecutive tiles in every row (left to right)
//! and every column (top to bottom) is tested against the lexicon. The result
//! is the union of matched positions, so a tile shared by a row word and a
//! column word is reported once.

use std::collections::BTreeSet;

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::lexicon::Lexicon;
use crate::types::{Pos, MAX_WORD_LEN};

/// Positions covered by at least one word
pub type MatchSet = BTreeSet<Pos>;

/// A full row or column of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Col(usize),
}

impl Line {
    /// Position of the `offset`-th tile along the line
    #[inline]
    pub fn pos(self, offset: usize) -> Pos {
        match self {
            Line::Row(row) => Pos::new(row, offset),
            Line::Col(col) => Pos::new(offset, col),
        }
    }
}

/// Scan the whole grid and return every matched position.
///
/// A board smaller than the word length has no windows and yields an empty set.
pub fn scan(grid: &Grid, lexicon: &Lexicon) -> MatchSet {
    let mut matched = MatchSet::new();
    let len = lexicon.word_len();
    let n = grid.size();

    for i in 0..n {
        for line in [Line::Row(i), Line::Col(i)] {
            for_each_word(grid, lexicon, line, |start| {
                matched.extend((start..start + len).map(|offset| line.pos(offset)));
            });
        }
    }

    matched
}

/// True if any word exists anywhere on the grid.
pub fn has_match(grid: &Grid, lexicon: &Lexicon) -> bool {
    (0..grid.size()).any(|i| {
        line_has_word(grid, lexicon, Line::Row(i)) || line_has_word(grid, lexicon, Line::Col(i))
    })
}

/// True if `line` contains at least one word (stops at the first hit).
pub fn line_has_word(grid: &Grid, lexicon: &Lexicon, line: Line) -> bool {
    let mut found = false;
    for_each_window(grid, lexicon, line, |_, word| {
        if lexicon.contains(word) {
            found = true;
        }
        found
    });
    found
}

/// Call `on_word(start)` for every window along `line` that spells a word.
fn for_each_word(grid: &Grid, lexicon: &Lexicon, line: Line, mut on_word: impl FnMut(usize)) {
    for_each_window(grid, lexicon, line, |start, word| {
        if lexicon.contains(word) {
            on_word(start);
        }
        false
    });
}

/// Walk every full window along `line`, stopping early when `visit` returns true.
///
/// Windows containing an empty cell are skipped.
fn for_each_window(
    grid: &Grid,
    lexicon: &Lexicon,
    line: Line,
    mut visit: impl FnMut(usize, &[u8]) -> bool,
) {
    let len = lexicon.word_len();
    let n = grid.size();
    if len == 0 || len > MAX_WORD_LEN || n < len {
        return;
    }

    let mut word: ArrayVec<u8, MAX_WORD_LEN> = ArrayVec::new();
    'windows: for start in 0..=n - len {
        word.clear();
        for offset in start..start + len {
            match grid.letter(line.pos(offset)) {
                Some(letter) => word.push(letter.as_byte()),
                None => continue 'windows,
            }
        }
        if visit(start, &word) {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon::from_words(words.iter().copied(), 3)
    }

    #[test]
    fn finds_row_and_column_words() {
        let grid = Grid::from_rows(&["CAT", "XOX", "XGX"]).unwrap();
        let matched = scan(&grid, &lexicon(&["CAT", "AOG"]));

        let expected: MatchSet = [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)]
            .into_iter()
            .map(|(r, c)| Pos::new(r, c))
            .collect();
        assert_eq!(matched, expected);
    }

    #[test]
    fn shared_tile_reported_once() {
        // Row 0 "CAT" and column 0 "COW" share (0, 0).
        let grid = Grid::from_rows(&["CAT", "OXX", "WXX"]).unwrap();
        let matched = scan(&grid, &lexicon(&["CAT", "COW"]));
        assert_eq!(matched.len(), 5);
    }

    #[test]
    fn words_are_read_forwards_only() {
        let grid = Grid::from_rows(&["TAC", "XXX", "XXX"]).unwrap();
        assert!(scan(&grid, &lexicon(&["CAT"])).is_empty());
    }

    #[test]
    fn board_smaller_than_word_is_empty() {
        let grid = Grid::from_rows(&["CA", "TX"]).unwrap();
        assert!(scan(&grid, &lexicon(&["CAT"])).is_empty());
        assert!(!has_match(&grid, &lexicon(&["CAT"])));
    }

    #[test]
    fn empty_cells_break_windows() {
        let grid = Grid::from_rows(&["C.T", "XXX", "XXX"]).unwrap();
        assert!(scan(&grid, &lexicon(&["CAT", "CXT"])).is_empty());
    }

    #[test]
    fn line_has_word_checks_one_line() {
        let grid = Grid::from_rows(&["XXXX", "XCAT", "XXXX", "XXXX"]).unwrap();
        let lex = lexicon(&["CAT"]);
        assert!(line_has_word(&grid, &lex, Line::Row(1)));
        assert!(!line_has_word(&grid, &lex, Line::Row(0)));
        assert!(!line_has_word(&grid, &lex, Line::Col(1)));
        assert!(has_match(&grid, &lex));
    }
}
