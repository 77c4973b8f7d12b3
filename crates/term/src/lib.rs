//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a plain framebuffer that is diffed and flushed to
//! the terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout pure so mouse hit-testing and drawing always agree
//! - Allow precise control over tile width (3 columns per tile by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_wordfall_core as core;
pub use tui_wordfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{Flash, FlashKind, GameView, ViewState, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
