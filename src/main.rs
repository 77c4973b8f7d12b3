//! Terminal word-swap runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! Logging goes to a file (`--log`) because the terminal belongs to the game.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing_subscriber::EnvFilter;

use tui_wordfall::core::{
    GameConfig, GameSnapshot, GameState, Lexicon, SelectOutcome, SwapOutcome,
};
use tui_wordfall::input::{handle_key_event, left_click, Cursor};
use tui_wordfall::term::{Flash, FrameBuffer, GameView, TerminalRenderer, ViewState, Viewport};
use tui_wordfall::types::{GameAction, Pos, TICK_MS};

/// How long a match or rejection stays highlighted.
const FLASH_MS: u32 = 400;

#[derive(Parser, Debug)]
#[command(name = "tui-wordfall", version, about = "Swap letters to spell words")]
struct Args {
    /// Word list, one word per line
    #[arg(long, default_value = "ValidWords.txt")]
    words: PathBuf,

    /// Game configuration (TOML); missing file means defaults
    #[arg(long, default_value = "wordfall.toml")]
    config: PathBuf,

    /// Board size, overriding the config file
    #[arg(long)]
    size: Option<usize>,

    /// Seed for tile and hint randomness
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log {
        init_logging(path)?;
    }

    let mut config = GameConfig::load_or_default(&args.config)
        .with_context(|| format!("loading config {}", args.config.display()))?;
    if let Some(size) = args.size {
        config.grid_size = size;
    }
    config.validate().context("invalid game configuration")?;

    let lexicon = Lexicon::load_or_empty(&args.words, config.word_len);
    let seed = args.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, words = lexicon.len(), size = config.grid_size, "starting");

    let game = GameState::new(config, lexicon, seed).context("creating game")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("installing log subscriber")
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Frontend-only state: cursor plus a timed flash.
struct Frontend {
    cursor: Cursor,
    view: ViewState,
    flash_ms: u32,
}

impl Frontend {
    fn new(size: usize) -> Self {
        Self {
            cursor: Cursor::new(size),
            view: ViewState::default(),
            flash_ms: 0,
        }
    }

    fn flash(&mut self, flash: Flash) {
        self.view.flash = Some(flash);
        self.flash_ms = FLASH_MS;
    }

    fn tick(&mut self, elapsed_ms: u32) {
        self.flash_ms = self.flash_ms.saturating_sub(elapsed_ms);
        if self.flash_ms == 0 {
            self.view.flash = None;
        }
    }

    fn select(&mut self, game: &mut GameState, pos: Pos) {
        let first = game.session().selected();
        match game.select(pos) {
            Ok(SelectOutcome::Swapped(outcome)) => self.on_swap(outcome, first, pos),
            Ok(_) => {}
            Err(err) => tracing::debug!(%err, "selection ignored"),
        }
    }

    fn on_swap(&mut self, outcome: SwapOutcome, first: Option<Pos>, second: Pos) {
        match &outcome {
            SwapOutcome::Matched { .. } => {
                if let Some(cleared) = outcome.cleared() {
                    self.flash(Flash::matched(cleared.clone()));
                }
            }
            SwapOutcome::Reverted { .. } => {
                if let Some(first) = first {
                    self.flash(Flash::rejected(first, second));
                }
            }
            SwapOutcome::Invalid(err) => tracing::debug!(%err, "swap rejected"),
        }
    }
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let mut ui = Frontend::new(game.grid().size());
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let viewport = term.viewport().unwrap_or(Viewport::new(80, 24));
        game.snapshot_into(&mut snap);
        ui.view.cursor = Some(ui.cursor.pos());
        view.render_into(&snap, &ui.view, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match handle_key_event(key) {
                    Some(GameAction::Quit) => {
                        game.quit();
                        return Ok(());
                    }
                    Some(GameAction::Select) => {
                        let pos = ui.cursor.pos();
                        ui.select(&mut game, pos);
                    }
                    Some(GameAction::Hint) => {
                        if let Err(err) = game.request_hint() {
                            tracing::debug!(%err, "hint unavailable");
                        }
                    }
                    Some(GameAction::Restart) => {
                        game.new_game();
                        ui = Frontend::new(game.grid().size());
                    }
                    Some(action) => {
                        ui.cursor.apply(action);
                    }
                    None => {}
                },
                Event::Mouse(mouse) => {
                    let hit = left_click(mouse)
                        .and_then(|(x, y)| view.cell_at(game.grid().size(), viewport, x, y));
                    if let Some(pos) = hit {
                        ui.cursor.set(pos);
                        ui.select(&mut game, pos);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            game.advance_time(elapsed_ms);
            ui.tick(elapsed_ms);
        }
    }
}
