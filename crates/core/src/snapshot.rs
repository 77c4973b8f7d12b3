use crate::grid::Grid;
use crate::session::Session;
use crate::types::{Phase, Pos};

/// Read-only view of a game for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub session: Session,
    pub phase: Phase,
    /// Number of match-forming swaps currently available
    pub possible_moves: usize,
    /// Monotonic game id (increments on every new game)
    pub game_id: u32,
}

impl GameSnapshot {
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn playable(&self) -> bool {
        self.phase.is_playing()
    }

    pub fn selected(&self) -> Option<Pos> {
        self.session.selected()
    }

    pub fn hint_cell(&self) -> Option<Pos> {
        self.session.hint_cell()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: Grid::empty(0),
            session: Session::default(),
            phase: Phase::Playing,
            possible_moves: 0,
            game_id: 0,
        }
    }
}
