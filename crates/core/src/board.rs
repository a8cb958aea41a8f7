//! Board module - manages the game grid
//!
//! The board is a 10x20 occupancy grid stored as a flat array for cache
//! locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Rows with y < 0 sit above the board and hold nothing.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one clear, bottom to top.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// Optional replacements for a piece's position or shape in a collision query.
///
/// Lets callers ask "what if the piece were here / rotated" without building
/// or mutating a piece. Fields left as `None` fall back to the piece's own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub x: Option<i8>,
    pub y: Option<i8>,
    pub shape: Option<Shape>,
}

impl Overrides {
    pub fn x(x: i8) -> Self {
        Self {
            x: Some(x),
            ..Self::default()
        }
    }

    pub fn y(y: i8) -> Self {
        Self {
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn shape(shape: Shape) -> Self {
        Self {
            shape: Some(shape),
            ..Self::default()
        }
    }
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Build a board from a 0/1 grid (row 0 at the top).
    pub fn from_grid(grid: &[[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) -> Self {
        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                board.cells[y * BOARD_WIDTH as usize + x] = v != 0;
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, filled: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the board and filled
    pub fn is_filled(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell)
    }

    /// Whether `piece` collides with the walls, the floor or filled cells.
    pub fn collides(&self, piece: &Piece) -> bool {
        self.collides_with(piece, Overrides::default())
    }

    /// Collision test with optional position/shape overrides.
    ///
    /// A cell collides when its column is outside `[0, W)`, its row is at or
    /// below the floor, or its row is on the board and already filled. Cells
    /// above the board (row < 0) only count toward the horizontal bounds.
    pub fn collides_with(&self, piece: &Piece, overrides: Overrides) -> bool {
        let px = overrides.x.unwrap_or(piece.x);
        let py = overrides.y.unwrap_or(piece.y);
        let shape = overrides.shape.unwrap_or(piece.shape);

        let hit = shape.cells().any(|(dx, dy)| {
            let x = px + dx;
            let y = py + dy;
            if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                return true;
            }
            y >= 0 && self.is_filled(x, y)
        });
        hit
    }

    /// How many rows `piece` can fall before the next step would collide.
    pub fn drop_distance(&self, piece: &Piece) -> u8 {
        let mut d: u8 = 0;
        while !self.collides_with(piece, Overrides::y(piece.y + d as i8 + 1)) {
            d += 1;
        }
        d
    }

    /// Write the piece's on-board cells into the grid.
    ///
    /// Cells above the board are dropped.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, true);
            }
        }
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    /// Uses a two-pointer algorithm with zero-allocation
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Everything above the last kept row becomes empty.
        self.cells[..write_y * width].fill(false);

        cleared_rows
    }

    /// Remove full rows, shifting the rest down. Returns how many were removed.
    pub fn clear_lines(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Copy the board into a 0/1 grid (row 0 at the top).
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * width + x] as u8;
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
