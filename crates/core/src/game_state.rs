//! Game state module - the engine facade
//!
//! This module ties together all core components: grid, lexicon, letter
//! source, scanner, cascade resolver, move enumerator and session. Every
//! operation runs to completion before returning; time only moves when the
//! caller reports it through [`GameState::advance_time`].

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cascade::{resolve, CascadeReport};
use crate::config::GameConfig;
use crate::error::{ConfigError, HintError, SwapError};
use crate::grid::Grid;
use crate::letters::{LetterSource, WeightedLetters};
use crate::lexicon::Lexicon;
use crate::moves::{enumerate, MoveSet};
use crate::scanner::{has_match, MatchSet};
use crate::scoring::ScoreMode;
use crate::session::Session;
use crate::snapshot::GameSnapshot;
use crate::types::{GameOverReason, Phase, Pos};

/// Result of a swap request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The swap formed at least one word; the board has been settled.
    Matched { cascade: CascadeReport, grid: Grid },
    /// No word formed; the swap was undone and the clock penalised.
    Reverted {
        penalty_ms: u32,
        game_over: Option<GameOverReason>,
    },
    /// Rejected before touching the board
    Invalid(SwapError),
}

impl SwapOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, SwapOutcome::Matched { .. })
    }

    /// Tiles cleared by the swap itself (first cascade wave)
    pub fn cleared(&self) -> Option<&MatchSet> {
        match self {
            SwapOutcome::Matched { cascade, .. } => cascade.first_cleared(),
            _ => None,
        }
    }
}

/// Result of selecting a tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First tile of a pair recorded
    Selected(Pos),
    /// Second tile was not adjacent; selection cleared
    Deselected,
    /// Second tile was adjacent; a swap was attempted
    Swapped(SwapOutcome),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = WeightedLetters> {
    config: GameConfig,
    lexicon: Lexicon,
    letters: S,
    /// RNG for hint selection (kept apart from the letter source)
    rng: StdRng,
    grid: Grid,
    session: Session,
    moves: MoveSet,
    phase: Phase,
    /// Monotonic game id (increments on restart)
    game_id: u32,
}

impl GameState<WeightedLetters> {
    /// Create a game with the configured weighted letter source and deal the
    /// first board.
    pub fn new(config: GameConfig, lexicon: Lexicon, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let letters = WeightedLetters::new(&config.letter_weights, seed)?;
        Ok(Self::with_letters(config, lexicon, letters, seed))
    }
}

impl<S: LetterSource> GameState<S> {
    /// Create a game drawing tiles from `letters` and deal the first board.
    ///
    /// The lexicon's word length takes precedence over `config.word_len`.
    pub fn with_letters(config: GameConfig, lexicon: Lexicon, mut letters: S, seed: u64) -> Self {
        let grid = Grid::create(config.grid_size, &mut letters);
        Self::from_grid(config, lexicon, grid, letters, seed)
    }

    /// Start from a prepared board. It is still settled silently first, so a
    /// board containing words will change.
    pub fn from_grid(
        mut config: GameConfig,
        lexicon: Lexicon,
        grid: Grid,
        letters: S,
        seed: u64,
    ) -> Self {
        config.grid_size = grid.size();
        config.word_len = lexicon.word_len();
        let session = Session::new(&config);

        let mut state = Self {
            config,
            lexicon,
            letters,
            rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
            grid,
            session,
            moves: MoveSet::default(),
            phase: Phase::Playing,
            game_id: 0,
        };
        state.deal_current_grid();
        state
    }

    /// Throw away the current game and deal a fresh board.
    ///
    /// Ignored once the player has quit.
    pub fn new_game(&mut self) -> GameSnapshot {
        if self.phase != Phase::Terminated {
            self.grid = Grid::create(self.config.grid_size, &mut self.letters);
            self.game_id = self.game_id.wrapping_add(1);
            self.deal_current_grid();
        }
        self.snapshot()
    }

    /// Settle the current grid silently and reset the session.
    fn deal_current_grid(&mut self) {
        let cleanup = resolve(
            &mut self.grid,
            &self.lexicon,
            &mut self.letters,
            self.config.cell_score,
            ScoreMode::Silent,
        );
        self.session = Session::new(&self.config);
        self.phase = Phase::Playing;
        self.refresh_moves();

        tracing::info!(
            game_id = self.game_id,
            cleanup_waves = cleanup.waves.len(),
            moves = self.moves.len(),
            "new game"
        );
        if self.moves.is_empty() {
            self.end(GameOverReason::NoMoves);
        }
    }

    /// Swap two adjacent tiles.
    ///
    /// A swap that forms a word is resolved to a settled board, scored, and
    /// refreshes the clock and the hint. A swap that forms nothing is undone
    /// and costs the miss penalty; if a hint was live the game is lost.
    pub fn attempt_swap(&mut self, p: Pos, q: Pos) -> SwapOutcome {
        if !self.phase.is_playing() {
            return SwapOutcome::Invalid(SwapError::NotPlaying);
        }
        if let Err(err) = self.grid.swap(p, q) {
            return SwapOutcome::Invalid(err);
        }
        self.session.clear_selection();

        if !has_match(&self.grid, &self.lexicon) {
            self.grid.exchange(p, q);
            return self.miss();
        }

        let cascade = resolve(
            &mut self.grid,
            &self.lexicon,
            &mut self.letters,
            self.config.cell_score,
            ScoreMode::Scored,
        );
        self.session.add_points(cascade.total_points());
        self.session.refresh_clock(self.config.time_budget_ms);
        self.session.clear_hint();
        self.refresh_moves();

        if self.moves.is_empty() {
            self.end(GameOverReason::NoMoves);
        }

        SwapOutcome::Matched {
            cascade,
            grid: self.grid.clone(),
        }
    }

    fn miss(&mut self) -> SwapOutcome {
        let penalty_ms = self.config.miss_penalty_ms;
        let out_of_time = self.session.elapse(penalty_ms);

        let game_over = if self.session.hint_live() {
            Some(GameOverReason::HintMiss)
        } else if out_of_time {
            Some(GameOverReason::TimeUp)
        } else {
            None
        };
        if let Some(reason) = game_over {
            self.end(reason);
        }

        SwapOutcome::Reverted {
            penalty_ms,
            game_over,
        }
    }

    /// Click-to-select flow: first tile selects, an adjacent second tile
    /// swaps, anything else clears the selection.
    pub fn select(&mut self, pos: Pos) -> Result<SelectOutcome, SwapError> {
        if !self.phase.is_playing() {
            return Err(SwapError::NotPlaying);
        }
        if !pos.in_bounds(self.grid.size()) {
            return Err(SwapError::OutOfBounds(pos));
        }

        match self.session.selected() {
            None => {
                self.session.select(pos);
                Ok(SelectOutcome::Selected(pos))
            }
            Some(first) if first.is_adjacent(pos) => {
                Ok(SelectOutcome::Swapped(self.attempt_swap(first, pos)))
            }
            Some(_) => {
                self.session.clear_selection();
                Ok(SelectOutcome::Deselected)
            }
        }
    }

    /// Reveal a random cell that has a match-forming swap.
    ///
    /// While the hint is live, the next swap that forms no word ends the game.
    pub fn request_hint(&mut self) -> Result<Pos, HintError> {
        if !self.phase.is_playing() {
            return Err(HintError::NotPlaying);
        }
        self.session.check_hint()?;
        let anchor = self
            .moves
            .random_anchor(&mut self.rng)
            .ok_or(HintError::NoMoves)?;

        self.session.arm_hint(anchor);
        tracing::info!(
            %anchor,
            hints_remaining = self.session.hints_remaining(),
            "hint revealed"
        );
        Ok(anchor)
    }

    /// Run the clock down by `elapsed_ms`; ends the game when it reaches zero.
    pub fn advance_time(&mut self, elapsed_ms: u32) -> Phase {
        if self.phase.is_playing() && self.session.elapse(elapsed_ms) {
            self.end(GameOverReason::TimeUp);
        }
        self.phase
    }

    /// Leave the game for good
    pub fn quit(&mut self) {
        self.phase = Phase::Terminated;
    }

    fn refresh_moves(&mut self) {
        self.moves = enumerate(&mut self.grid, &self.lexicon);
    }

    fn end(&mut self, reason: GameOverReason) {
        self.phase = Phase::GameOver(reason);
        self.session.clear_selection();
        tracing::info!(
            game_id = self.game_id,
            reason = reason.as_str(),
            score = self.session.score(),
            "game over"
        );
    }

    /// Moves available on the current board
    pub fn current_moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    /// Copy the render-relevant state into an existing snapshot, reusing its
    /// grid allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid.clone_from(&self.grid);
        out.session.clone_from(&self.session);
        out.phase = self.phase;
        out.possible_moves = self.moves.len();
        out.game_id = self.game_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
