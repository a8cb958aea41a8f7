//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no external dependencies, so it can be
//! used by the engine, the key mapper and the terminal view alike.
//!
//! # Board Dimensions
//!
//! The playfield is fixed:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn row**: -1, one row above the visible board
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POLL_INTERVAL_MS` | 25 | Input poll timeout per loop iteration |
//! | `DEFAULT_DELAY_MS` | 500 | Gravity delay when none is given |
//! | `MIN_DELAY_MS` | 50 | Floor for the gravity delay |
//! | `DELAY_STEP_MS` | 50 | Delay change per speed-up/slow-down |
//!
//! # Examples
//!
//! ```
//! use tetris_terminal_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PieceKind::T.as_str(), "t");
//! assert_ne!(GameAction::Rotate, GameAction::HardDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Row a freshly spawned piece starts on (one row above the board).
pub const SPAWN_Y: i8 = -1;

/// Input poll timeout. Keeps the loop responsive; does not drive gravity.
pub const POLL_INTERVAL_MS: u64 = 25;

/// Gravity delay used when none is configured (0.5s per row).
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Lowest gravity delay reachable through speed-up (0.05s).
pub const MIN_DELAY_MS: u64 = 50;

/// Amount one speed-up or slow-down changes the delay by (0.05s).
pub const DELAY_STEP_MS: u64 = 50;

/// Points awarded for clearing 1, 2, 3 or 4 lines in a single lock.
pub const LINE_SCORES: [u32; 4] = [100, 300, 700, 1500];

/// The seven piece kinds
///
/// - **I**: horizontal bar, 1x4
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Discrete actions the control loop can apply in one iteration
///
/// Piece actions (move, rotate, drops) go to the engine; the rest drive the
/// loop state machine or the gravity delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Move piece one cell down
    SoftDrop,
    /// Drop piece to its landing row and lock it
    HardDrop,
    /// Toggle pause
    Pause,
    /// Decrease the gravity delay (floored at the minimum)
    SpeedUp,
    /// Increase the gravity delay
    SlowDown,
    /// Leave the game immediately
    Quit,
}

/// A cell on the game board: `true` when filled.
///
/// Locked cells carry no piece identity.
pub type Cell = bool;
