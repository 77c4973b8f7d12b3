//! Grid module - the square board of letter tiles
//!
//! The grid is `size x size` cells stored in a flat vector, row-major
//! (`row * size + col`). Between engine operations every cell holds a letter;
//! empty cells only exist transiently while a cascade removes and refills tiles.

use std::fmt;

use crate::error::{GridError, SwapError};
use crate::letters::LetterSource;
use crate::types::{Cell, Letter, Pos};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a board with every cell drawn from `letters`.
    ///
    /// No match-freedom is enforced here; run the cascade resolver in silent
    /// mode to settle it before play.
    pub fn create(size: usize, letters: &mut impl LetterSource) -> Self {
        let mut grid = Self::empty(size);
        letters.fill(&mut grid.cells);
        grid
    }

    /// Create a board with every cell empty
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a grid from text rows, one char per cell, `.` for empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_wordfall_core::Grid;
    /// use tui_wordfall_core::types::Pos;
    ///
    /// let grid = Grid::from_rows(&["AB", "C."]).unwrap();
    /// assert_eq!(grid.letter(Pos::new(1, 0)).map(|l| l.as_char()), Some('C'));
    /// assert!(!grid.is_settled());
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let found = text.chars().count();
            if row == 0 && found != size {
                return Err(GridError::NotSquare {
                    rows: size,
                    cols: found,
                });
            }
            if found != size {
                return Err(GridError::Ragged {
                    row,
                    found,
                    expected: size,
                });
            }
            for (col, ch) in text.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    _ => Some(Letter::from_char(ch).ok_or(GridError::BadLetter {
                        ch,
                        pos: Pos::new(row, col),
                    })?),
                };
                cells.push(cell);
            }
        }

        Ok(Self { size, cells })
    }

    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.in_bounds(self.size) {
            Some(pos.row * self.size + pos.col)
        } else {
            None
        }
    }

    /// Board edge length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at `pos`; `None` if out of bounds
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Letter at `pos`; `None` if out of bounds or empty
    pub fn letter(&self, pos: Pos) -> Option<Letter> {
        self.get(pos).flatten()
    }

    /// Set cell at `pos`. Returns false if out of bounds.
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Exchange the letters at two positions.
    ///
    /// Swapping the same pair twice restores the grid exactly, which is how
    /// hypothetical moves are probed without cloning the board.
    pub fn swap(&mut self, p: Pos, q: Pos) -> Result<(), SwapError> {
        let a = self.index(p).ok_or(SwapError::OutOfBounds(p))?;
        let b = self.index(q).ok_or(SwapError::OutOfBounds(q))?;
        if !p.is_adjacent(q) {
            return Err(SwapError::NotAdjacent(p, q));
        }
        self.cells.swap(a, b);
        Ok(())
    }

    /// Swap two in-bounds positions without validating adjacency.
    #[inline]
    pub(crate) fn exchange(&mut self, p: Pos, q: Pos) {
        let a = p.row * self.size + p.col;
        let b = q.row * self.size + q.col;
        self.cells.swap(a, b);
    }

    /// True iff no cell is empty
    pub fn is_settled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Empty every listed position.
    pub fn clear_cells<'a>(&mut self, positions: impl IntoIterator<Item = &'a Pos>) {
        for &pos in positions {
            self.set(pos, None);
        }
    }

    /// Let letters fall to fill gaps below them.
    ///
    /// Each column is compacted independently with a two-pointer pass from the
    /// bottom, so surviving letters keep their relative order and empties
    /// collect at the top. Returns the number of letters that moved.
    pub fn collapse(&mut self) -> usize {
        let n = self.size;
        let mut moved = 0;

        for col in 0..n {
            let mut write_row = n;
            for read_row in (0..n).rev() {
                let read = read_row * n + col;
                if self.cells[read].is_none() {
                    continue;
                }
                write_row -= 1;
                if write_row != read_row {
                    let write = write_row * n + col;
                    self.cells[write] = self.cells[read].take();
                    moved += 1;
                }
            }
        }

        moved
    }

    /// Fill every empty cell from `letters`; returns the filled positions.
    pub fn refill(&mut self, letters: &mut impl LetterSource) -> Vec<Pos> {
        let mut filled = Vec::new();
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            if cell.is_none() {
                *cell = Some(letters.next_letter());
                filled.push(Pos::new(idx / self.size, idx % self.size));
            }
        }
        filled
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for cell in self.row(row) {
                let ch = cell.map(Letter::as_char).unwrap_or('.');
                write!(f, "{ch}")?;
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
