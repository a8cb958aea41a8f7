use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_DELAY_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute (x, y) of each occupied cell with the piece top at row `at_y`.
    pub fn cells_at(&self, at_y: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, at_y + dy))
    }
}

/// Read-only copy of everything the view draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// 0 = empty, 1 = filled. Row 0 is the top.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub score: u32,
    pub lines: u32,
    pub delay_ms: u64,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            score: 0,
            lines: 0,
            delay_ms: DEFAULT_DELAY_MS,
            paused: false,
            game_over: false,
        }
    }
}
