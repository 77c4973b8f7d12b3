//! Keyboard cursor over the board.

use crate::types::{GameAction, Pos};

/// A board position that can be steered with cursor actions and never leaves
/// the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Pos,
    size: usize,
}

impl Cursor {
    /// Cursor in the top-left corner of a `size x size` board
    pub fn new(size: usize) -> Self {
        Self {
            pos: Pos::new(0, 0),
            size,
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Move to `pos`, clamped to the board.
    pub fn set(&mut self, pos: Pos) {
        let max = self.size.saturating_sub(1);
        self.pos = Pos::new(pos.row.min(max), pos.col.min(max));
    }

    /// Adopt a new board size, keeping the position when it still fits.
    pub fn resize(&mut self, size: usize) {
        self.size = size;
        self.set(self.pos);
    }

    /// Apply a cursor action. Returns true if the action was a cursor move
    /// (even one blocked by the edge).
    pub fn apply(&mut self, action: GameAction) -> bool {
        let Pos { row, col } = self.pos;
        let next = match action {
            GameAction::CursorUp => Pos::new(row.saturating_sub(1), col),
            GameAction::CursorDown => Pos::new(row + 1, col),
            GameAction::CursorLeft => Pos::new(row, col.saturating_sub(1)),
            GameAction::CursorRight => Pos::new(row, col + 1),
            _ => return false,
        };
        self.set(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_and_stops_at_edges() {
        let mut c = Cursor::new(3);
        assert!(c.apply(GameAction::CursorUp));
        assert_eq!(c.pos(), Pos::new(0, 0));

        c.apply(GameAction::CursorRight);
        c.apply(GameAction::CursorRight);
        c.apply(GameAction::CursorRight);
        c.apply(GameAction::CursorDown);
        assert_eq!(c.pos(), Pos::new(1, 2));

        assert!(!c.apply(GameAction::Select));
        assert_eq!(c.pos(), Pos::new(1, 2));
    }

    #[test]
    fn resize_clamps() {
        let mut c = Cursor::new(8);
        c.set(Pos::new(7, 5));
        c.resize(4);
        assert_eq!(c.pos(), Pos::new(3, 3));
    }
}
