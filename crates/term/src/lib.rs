//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the game view draws a snapshot
//! into a framebuffer of styled characters, and the renderer flushes that
//! framebuffer to the terminal, re-emitting only what changed.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure so it can be tested without a terminal
//! - Cells are 2 characters wide to keep the board roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_terminal_core as core;
pub use tetris_terminal_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{status_line, GameView, Viewport, GAME_OVER_MESSAGE, LEGEND, PAUSED_MESSAGE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
