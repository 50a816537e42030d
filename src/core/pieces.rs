//! Pieces module - shape matrices and the naive clockwise rotation
//!
//! A shape is a rectangular boolean matrix of occupied sub-cells measured
//! from the piece anchor at (0,0). Rotation reverses the row order and
//! transposes, so a 1x4 shape becomes 4x1 and back. There is no wall-kick
//! correction and no per-kind rotation table; a rotation that does not fit
//! is simply rejected by the engine.

use crate::types::PieceKind;

/// Rectangular occupancy matrix for a piece, at least 1x1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: Vec<Vec<bool>>,
}

impl Shape {
    /// Build a shape from a row-major matrix.
    ///
    /// Every row must have the same non-zero length.
    pub fn new(rows: Vec<Vec<bool>>) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(!rows[0].is_empty());
        debug_assert!(rows.iter().all(|row| row.len() == rows[0].len()));
        Self { rows }
    }

    /// Width of the bounding box in cells
    pub fn width(&self) -> i8 {
        self.rows[0].len() as i8
    }

    /// Height of the bounding box in cells
    pub fn height(&self) -> i8 {
        self.rows.len() as i8
    }

    /// Iterate over occupied sub-cell offsets as (x, y)
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &cell)| cell)
                .map(move |(x, _)| (x as i8, y as i8))
        })
    }

    /// Number of occupied sub-cells
    pub fn cell_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&c| c).count())
            .sum()
    }

    /// 90-degree clockwise rotation: reverse the row order, then transpose.
    ///
    /// Pure function of the matrix; the board is not consulted. Output cell
    /// (x, h-1-y) corresponds to input cell (x, y) of the un-reversed matrix,
    /// so four applications return the original matrix for any bounding box.
    pub fn rotated_cw(&self) -> Self {
        let h = self.rows.len();
        let w = self.rows[0].len();
        let mut out = vec![vec![false; h]; w];
        for (y, row) in self.rows.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell {
                    out[x][h - 1 - y] = true;
                }
            }
        }
        Self { rows: out }
    }
}

/// The canonical un-rotated shape for a piece kind.
///
/// These matrices are immutable process-wide configuration; the kind tag
/// travels with locked cells so the original piece is recoverable later.
pub fn canonical_shape(kind: PieceKind) -> Shape {
    let rows: Vec<Vec<bool>> = match kind {
        PieceKind::I => vec![vec![true, true, true, true]],
        PieceKind::O => vec![vec![true, true], vec![true, true]],
        PieceKind::T => vec![vec![false, true, false], vec![true, true, true]],
        PieceKind::S => vec![vec![false, true, true], vec![true, true, false]],
        PieceKind::Z => vec![vec![true, true, false], vec![false, true, true]],
        PieceKind::J => vec![vec![true, false, false], vec![true, true, true]],
        PieceKind::L => vec![vec![false, false, true], vec![true, true, true]],
    };
    Shape::new(rows)
}
