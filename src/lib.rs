//! Falling-block game-state engine - pure, deterministic, and testable
//!
//! The engine owns the board, the active piece, the score, and the two
//! elapsed-time accumulators (gravity and move-repeat). It performs no I/O
//! and reads no clocks: the external driver feeds elapsed milliseconds into
//! every tick, so a given seed and elapsed-time sequence replays
//! identically.
//!
//! # Module Structure
//!
//! - [`core::board`]: 10x20 grid with locking and full-row clearing
//! - [`core::pieces`]: the 7 canonical shape matrices and naive clockwise
//!   rotation (reverse rows, transpose; no wall kicks)
//! - [`core::game_state`]: collision checking, input gating, gravity,
//!   lock/clear/spawn transitions, game-over detection
//! - [`core::rng`]: seedable LCG with uniform piece selection
//! - [`core::snapshot`]: read-only 0/1 occupancy views for external drivers
//! - [`recorder`]: driver-side dataset recorder producing the
//!   `{step, board, piece, move}` JSON records of a session
//!
//! # Example
//!
//! ```
//! use tetris_core::core::GameState;
//! use tetris_core::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_input(GameAction::Right);
//! let result = game.tick(400);
//! assert!(!result.game_over);
//!
//! let snapshot = game.snapshot();
//! assert!(snapshot.piece.is_some());
//! ```

pub mod core;
pub mod recorder;
pub mod types;

pub use crate::core::{Board, GameSnapshot, GameState, PieceSnapshot, Shape, TickResult};
pub use crate::recorder::{DatasetRecorder, MoveRecord};
pub use crate::types::{GameAction, GameConfig, Phase, PieceKind};
