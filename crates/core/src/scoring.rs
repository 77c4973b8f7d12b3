//! Scoring module - points for cleared tiles
//!
//! Rewards are per tile, not per word: a tile covered by both a row word and a
//! column word is cleared once and paid once.

/// Whether a cascade awards points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreMode {
    /// Player-triggered cascade
    Scored,
    /// Initial board settling; matches are cleared without reward
    Silent,
}

/// Points for one cascade wave that cleared `cells` distinct tiles.
pub fn wave_points(cells: usize, cell_score: u32, mode: ScoreMode) -> u32 {
    match mode {
        ScoreMode::Scored => cell_score.saturating_mul(cells.try_into().unwrap_or(u32::MAX)),
        ScoreMode::Silent => 0,
    }
}

/// Whole seconds left on the clock, rounded up so the display only reads 0
/// once time has actually run out.
pub fn seconds_left(remaining_ms: u32) -> u32 {
    remaining_ms.div_ceil(1000)
}
