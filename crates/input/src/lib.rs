//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Nothing here
//! knows about game state; the loop decides what an action means.

pub mod map;

pub use tetris_terminal_types as types;

pub use map::{handle_key_event, is_actionable, should_quit};
