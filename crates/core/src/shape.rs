//! Shape module - the piece catalog and clockwise rotation
//!
//! A shape is a small binary occupancy matrix (at most 4x4). Shapes are
//! `Copy` values: rotation always builds a new matrix and never touches the
//! catalog entry it started from.

use crate::types::PieceKind;

/// Largest row/column count any shape can have.
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of an occupied cell relative to the shape's top-left corner (col, row).
pub type CellOffset = (i8, i8);

/// Binary occupancy matrix of a piece.
///
/// Cells outside `rows x cols` are always zero, so derived equality compares
/// only the meaningful part of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

const I_SHAPE: Shape = Shape {
    rows: 1,
    cols: 4,
    bits: [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]],
};

const O_SHAPE: Shape = Shape {
    rows: 2,
    cols: 2,
    bits: [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]],
};

const T_SHAPE: Shape = Shape {
    rows: 2,
    cols: 3,
    bits: [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]],
};

const S_SHAPE: Shape = Shape {
    rows: 2,
    cols: 3,
    bits: [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]],
};

const Z_SHAPE: Shape = Shape {
    rows: 2,
    cols: 3,
    bits: [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]],
};

const J_SHAPE: Shape = Shape {
    rows: 2,
    cols: 3,
    bits: [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]],
};

const L_SHAPE: Shape = Shape {
    rows: 2,
    cols: 3,
    bits: [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]],
};

impl Shape {
    /// Catalog shape for a piece kind, in spawn orientation.
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => I_SHAPE,
            PieceKind::O => O_SHAPE,
            PieceKind::T => T_SHAPE,
            PieceKind::S => S_SHAPE,
            PieceKind::Z => Z_SHAPE,
            PieceKind::J => J_SHAPE,
            PieceKind::L => L_SHAPE,
        }
    }

    /// Number of rows (bounding box height).
    pub fn height(&self) -> u8 {
        self.rows
    }

    /// Number of columns (bounding box width).
    pub fn width(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (`row`, `col`) is occupied. Out of range is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.bits[row][col] != 0
    }

    /// Rotate 90° clockwise: `out[c][rows - 1 - r] = in[r][c]`.
    ///
    /// Equivalent to transposing the row-reversed matrix.
    pub fn rotate(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut bits = [[0u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in self.bits.iter().enumerate().take(rows) {
            for (c, &v) in row.iter().enumerate().take(cols) {
                bits[c][rows - 1 - r] = v;
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Occupied cells as (col, row) offsets, row-major.
    pub fn cells(&self) -> impl Iterator<Item = CellOffset> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.bits[r][c] != 0)
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Rows of the matrix as 0/1 values, trimmed to the bounding box.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.bits
            .iter()
            .take(self.rows as usize)
            .map(move |row| &row[..self.cols as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(shape: &Shape) -> Vec<Vec<u8>> {
        shape.rows().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn catalog_matrices() {
        assert_eq!(matrix(&Shape::of(PieceKind::I)), vec![vec![1, 1, 1, 1]]);
        assert_eq!(matrix(&Shape::of(PieceKind::O)), vec![vec![1, 1], vec![1, 1]]);
        assert_eq!(
            matrix(&Shape::of(PieceKind::T)),
            vec![vec![0, 1, 0], vec![1, 1, 1]]
        );
        assert_eq!(
            matrix(&Shape::of(PieceKind::L)),
            vec![vec![0, 0, 1], vec![1, 1, 1]]
        );
    }

    #[test]
    fn every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(Shape::of(kind).cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn rotate_t_clockwise() {
        // .#.      #.
        // ###  ->  ##
        //          #.
        let rotated = Shape::of(PieceKind::T).rotate();
        assert_eq!(
            matrix(&rotated),
            vec![vec![1, 0], vec![1, 1], vec![1, 0]]
        );
    }

    #[test]
    fn rotate_j_clockwise() {
        // #..      ##
        // ###  ->  #.
        //          #.
        let rotated = Shape::of(PieceKind::J).rotate();
        assert_eq!(
            matrix(&rotated),
            vec![vec![1, 1], vec![1, 0], vec![1, 0]]
        );
    }

    #[test]
    fn rotate_i_swaps_dimensions() {
        let rotated = Shape::of(PieceKind::I).rotate();
        assert_eq!(rotated.width(), 1);
        assert_eq!(rotated.height(), 4);
        assert_eq!(rotated.cells().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn rotate_does_not_touch_catalog() {
        let _ = Shape::of(PieceKind::S).rotate();
        assert_eq!(
            matrix(&Shape::of(PieceKind::S)),
            vec![vec![0, 1, 1], vec![1, 1, 0]]
        );
    }

    #[test]
    fn four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let shape = Shape::of(kind);
            assert_eq!(shape.rotate().rotate().rotate().rotate(), shape, "{:?}", kind);
        }
    }

    #[test]
    fn o_is_rotation_invariant() {
        let o = Shape::of(PieceKind::O);
        assert_eq!(o.rotate(), o);
    }
}
