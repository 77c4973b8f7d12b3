//! Session state - score, hints, clock and selection for one game
//!
//! The session refers to board cells by coordinate only and never holds
//! letters, so it cannot go stale when the grid changes underneath it.

use crate::config::GameConfig;
use crate::error::HintError;
use crate::scoring::seconds_left;
use crate::types::Pos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    score: u32,
    hints_remaining: u32,
    max_hints: u32,
    time_remaining_ms: u32,
    selected: Option<Pos>,
    /// Revealed hint anchor; while set, a missed swap ends the game
    hint: Option<Pos>,
}

impl Session {
    /// Fresh session at the start of a game
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            hints_remaining: config.max_hints,
            max_hints: config.max_hints,
            time_remaining_ms: config.time_budget_ms,
            selected: None,
            hint: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    pub fn max_hints(&self) -> u32 {
        self.max_hints
    }

    pub fn time_remaining_ms(&self) -> u32 {
        self.time_remaining_ms
    }

    /// Remaining time in whole seconds, rounded up
    pub fn time_remaining_secs(&self) -> u32 {
        seconds_left(self.time_remaining_ms)
    }

    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    pub fn hint_cell(&self) -> Option<Pos> {
        self.hint
    }

    /// True while a revealed hint arms the miss-means-loss rule
    pub fn hint_live(&self) -> bool {
        self.hint.is_some()
    }

    pub(crate) fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Restore the full clock after a successful match
    pub(crate) fn refresh_clock(&mut self, budget_ms: u32) {
        self.time_remaining_ms = budget_ms;
    }

    /// Run the clock down; returns true once it reads zero.
    pub(crate) fn elapse(&mut self, elapsed_ms: u32) -> bool {
        self.time_remaining_ms = self.time_remaining_ms.saturating_sub(elapsed_ms);
        self.time_remaining_ms == 0
    }

    pub(crate) fn select(&mut self, pos: Pos) {
        self.selected = Some(pos);
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Check that a hint may be revealed right now
    pub(crate) fn check_hint(&self) -> Result<(), HintError> {
        if self.hint.is_some() {
            return Err(HintError::AlreadyActive);
        }
        if self.hints_remaining == 0 {
            return Err(HintError::NoHintsLeft);
        }
        Ok(())
    }

    /// Spend one hint on `anchor`; callers must have passed `check_hint`.
    pub(crate) fn arm_hint(&mut self, anchor: Pos) {
        self.hints_remaining = self.hints_remaining.saturating_sub(1);
        self.hint = Some(anchor);
    }

    pub(crate) fn clear_hint(&mut self) {
        self.hint = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let s = Session::default();
        assert_eq!(s.score(), 0);
        assert_eq!(s.hints_remaining(), 3);
        assert_eq!(s.time_remaining_ms(), 60_000);
        assert_eq!(s.time_remaining_secs(), 60);
        assert!(s.selected().is_none());
        assert!(!s.hint_live());
    }

    #[test]
    fn test_clock_saturates_at_zero() {
        let mut s = Session::default();
        assert!(!s.elapse(59_999));
        assert_eq!(s.time_remaining_secs(), 1);
        assert!(s.elapse(5_000));
        assert_eq!(s.time_remaining_ms(), 0);

        s.refresh_clock(60_000);
        assert_eq!(s.time_remaining_ms(), 60_000);
    }

    #[test]
    fn test_hint_budget() {
        let mut s = Session::default();
        assert!(s.check_hint().is_ok());
        s.arm_hint(Pos::new(1, 1));
        assert_eq!(s.hints_remaining(), 2);
        assert_eq!(s.check_hint(), Err(HintError::AlreadyActive));

        s.clear_hint();
        s.arm_hint(Pos::new(2, 2));
        s.clear_hint();
        s.arm_hint(Pos::new(3, 3));
        s.clear_hint();
        assert_eq!(s.hints_remaining(), 0);
        assert_eq!(s.check_hint(), Err(HintError::NoHintsLeft));
    }

    #[test]
    fn test_score_saturates() {
        let mut s = Session::default();
        s.add_points(u32::MAX);
        s.add_points(100);
        assert_eq!(s.score(), u32::MAX);
    }
}
