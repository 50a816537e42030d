//! Core module - pure game logic with no I/O
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on rendering, input polling, or the filesystem.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game_state::{fits, ActivePiece, GameState, TickResult};
pub use pieces::{canonical_shape, Shape};
pub use rng::{PiecePicker, SimpleRng};
pub use snapshot::{GameSnapshot, PieceSnapshot};
