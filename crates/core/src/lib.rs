//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and the loop
//! state machine. It has no dependency on the terminal, so it can be driven
//! by tests exactly the way the binary drives it.
//!
//! # Module Structure
//!
//! - [`shape`]: the seven catalog shapes and clockwise rotation
//! - [`piece`]: a shape placed on the board, spawn positioning
//! - [`board`]: 10x20 occupancy grid, collision, merge and line clearing
//! - [`rng`]: injectable source of piece kinds
//! - [`scoring`]: line-clear points
//! - [`game_state`]: the engine (move, rotate, drop, lock, gravity)
//! - [`gravity`]: wall-clock gravity timer with an adjustable delay
//! - [`session`]: Running / Paused / GameOver / Exited state machine
//! - [`snapshot`]: read-only view of the game for rendering
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random (no bag)
//! - Rotation is clockwise only, with no wall kicks; a blocked rotation is ignored
//! - A piece locks when gravity cannot move it down, or on hard drop
//! - 1/2/3/4 lines score 100/300/700/1500
//! - The game ends when a newly spawned piece overlaps filled cells
//!
//! # Example
//!
//! ```
//! use tetris_terminal_core::{GameState, ScriptedSource};
//! use tetris_terminal_types::{GameAction, PieceKind};
//!
//! let mut game = GameState::new(ScriptedSource::new([PieceKind::O, PieceKind::T]));
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.piece().kind, PieceKind::T);
//! assert_eq!(game.board().filled_count(), 4);
//! ```

pub mod board;
pub mod game_state;
pub mod gravity;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use tetris_terminal_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Overrides};
pub use game_state::{GameState, GravityStep, LockOutcome};
pub use gravity::{GravityTimer, DELAY_STEP, MIN_DELAY};
pub use piece::Piece;
pub use rng::{RandomSource, ScriptedSource, ShapeSource};
pub use scoring::line_clear_score;
pub use session::{LoopEvent, LoopState, Session};
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
