//! Terminal falling-block game (workspace facade crate).
//!
//! Re-exports the member crates as `tetris_terminal::{core, input, term, types}`
//! and holds the startup plumbing shared by the binary: command-line
//! configuration and log setup.

pub use tetris_terminal_core as core;
pub use tetris_terminal_input as input;
pub use tetris_terminal_term as term;
pub use tetris_terminal_types as types;

pub mod config;
pub mod logging;
