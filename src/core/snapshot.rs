//! Read-only snapshot views consumed by external drivers.
//!
//! The shapes here are the wire contract for the recorded-session dataset:
//! board cells are 0/1 occupancy (not color tuples) and piece cells are
//! absolute board coordinates. External consumers never see the mutable
//! board or piece directly.

use serde::Serialize;

use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// 0/1 occupancy grid, row-major
pub type OccupancyGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The active piece as external consumers see it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceSnapshot {
    /// Piece kind tag ("I", "O", ...)
    #[serde(rename = "type")]
    pub kind: PieceKind,
    /// RGB display tag paired with the kind
    pub color: (u8, u8, u8),
    /// Absolute board coordinates of the four occupied cells, as [x, y]
    pub cells: [[i8; 2]; 4],
}

/// Point-in-time view of the engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Board occupancy, 1 per filled cell
    pub board: OccupancyGrid,
    /// Active piece, absent before the first spawn
    pub piece: Option<PieceSnapshot>,
}

impl GameSnapshot {
    /// An all-empty snapshot with no active piece
    pub fn empty() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            piece: None,
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
