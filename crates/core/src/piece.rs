//! Piece module - a catalog shape placed on the board

use crate::shape::Shape;
use crate::types::{PieceKind, BOARD_WIDTH, SPAWN_Y};

/// The falling piece: a shape plus the board position of its top-left corner.
///
/// `y` may be negative while the piece is still partly above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind` at the spawn position.
    ///
    /// Horizontally centered (`W/2 - width/2`, integer division) and one row
    /// above the visible board.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::of(kind);
        Self {
            kind,
            shape,
            x: (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8,
            y: SPAWN_Y,
        }
    }

    /// Same piece shifted by (`dx`, `dy`).
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its shape rotated clockwise. Position is unchanged.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotate(),
            ..*self
        }
    }

    /// Absolute board coordinates (x, y) of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}
