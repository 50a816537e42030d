//! Core types shared across the crate
//! This module contains pure data types with no external dependencies
//! beyond serde derives for the dataset/snapshot contract.

use serde::Serialize;

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval: one row of descent per this many milliseconds
pub const FALL_INTERVAL_MS: u32 = 400;

/// Move-repeat cooldown: minimum elapsed time between honored inputs
pub const MOVE_REPEAT_MS: u32 = 150;

/// Flat score awarded per cleared row (not tiered by simultaneous clears)
pub const SCORE_PER_ROW: u32 = 100;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// All seven kinds, in canonical order
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
];

impl PieceKind {
    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to the uppercase tag used in dataset records
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Fixed RGB display tag paired 1:1 with the kind
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0, 255, 255),
            PieceKind::O => (255, 255, 0),
            PieceKind::T => (128, 0, 128),
            PieceKind::S => (0, 255, 0),
            PieceKind::Z => (255, 0, 0),
            PieceKind::J => (0, 0, 255),
            PieceKind::L => (255, 165, 0),
        }
    }
}

/// Player actions recognized by the engine.
///
/// At most one action is honored per move-repeat window; `None` is the
/// explicit no-op the driver passes on frames without input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameAction {
    Left,
    Right,
    Rotate,
    Down,
    None,
}

impl GameAction {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(GameAction::Left),
            "right" => Some(GameAction::Right),
            "rotate" => Some(GameAction::Rotate),
            "down" => Some(GameAction::Down),
            "none" => Some(GameAction::None),
            _ => None,
        }
    }

    /// Convert to the lowercase tag used in dataset records
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Left => "left",
            GameAction::Right => "right",
            GameAction::Rotate => "rotate",
            GameAction::Down => "down",
            GameAction::None => "none",
        }
    }
}

/// Engine lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, first piece not yet spawned
    Ready,
    /// A piece is in play; tick and input are accepted
    Falling,
    /// Terminal: spawn position was blocked; tick and input are inert
    GameOver,
}

/// Timing and scoring knobs recognized by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub fall_interval_ms: u32,
    pub move_repeat_ms: u32,
    pub score_per_row: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fall_interval_ms: FALL_INTERVAL_MS,
            move_repeat_ms: MOVE_REPEAT_MS,
            score_per_row: SCORE_PER_ROW,
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
