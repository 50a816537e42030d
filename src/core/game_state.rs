//! Game state module - the engine's per-tick state machine
//!
//! Ties together board, pieces, and RNG, and owns the two elapsed-time
//! accumulators (gravity and move-repeat). The driver serializes all calls:
//! poll input, `apply_input`, `tick(elapsed_ms)`, then read state to render.
//! Nothing outside this module mutates the board or the active piece.

use crate::core::pieces::{canonical_shape, Shape};
use crate::core::snapshot::{GameSnapshot, PieceSnapshot};
use crate::core::{Board, PiecePicker};
use crate::types::{GameAction, GameConfig, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether a shape placed at anchor (x, y) is a legal position.
///
/// For every occupied sub-cell: the absolute column must lie in
/// [0, BOARD_WIDTH) and the absolute row must be above the floor. Cells with
/// a negative absolute row are exempt from the occupancy test (the piece may
/// still be entering from above) but stay column-bounded. Pure, no side
/// effects.
pub fn fits(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    shape.cells().all(|(dx, dy)| {
        let cx = x + dx;
        let cy = y + dy;
        if cx < 0 || cx >= BOARD_WIDTH as i8 || cy >= BOARD_HEIGHT as i8 {
            return false;
        }
        cy < 0 || !board.is_occupied(cx, cy)
    })
}

/// Active falling piece: a kind, its current (possibly rotated) shape, and
/// a signed anchor in board coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece of the given kind at its spawn anchor:
    /// horizontally centered, top row.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = canonical_shape(kind);
        let x = BOARD_WIDTH as i8 / 2 - shape.width() / 2;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }

    /// Check legality of this piece displaced by (dx, dy)
    pub fn fits(&self, board: &Board, dx: i8, dy: i8) -> bool {
        fits(board, &self.shape, self.x + dx, self.y + dy)
    }

    /// Absolute board coordinates of the occupied cells, as [x, y] pairs,
    /// in row-major shape order
    pub fn absolute_cells(&self) -> [[i8; 2]; 4] {
        let mut cells = [[0i8; 2]; 4];
        let mut i = 0;
        for (dx, dy) in self.shape.cells() {
            cells[i] = [self.x + dx, self.y + dy];
            i += 1;
        }
        debug_assert_eq!(i, 4);
        cells
    }
}

/// Outcome of one engine tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickResult {
    /// Rows removed by this tick's lock (0 when nothing locked)
    pub rows_cleared: u32,
    /// True when the tick locked the old piece and spawned a fresh one
    pub spawned_new_piece: bool,
    /// True once the engine has reached the terminal phase
    pub game_over: bool,
}

/// Complete game state: board, active piece, score, and timers.
///
/// Single-owner, single-threaded: the engine holds no interior mutability
/// and performs no I/O. Timers advance only through the elapsed-time values
/// the driver feeds into [`tick`](GameState::tick), so a given seed and
/// elapsed-time sequence replays identically.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    picker: PiecePicker,
    phase: Phase,
    score: u32,
    config: GameConfig,
    fall_timer_ms: u32,
    move_timer_ms: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed and default timing
    pub fn new(seed: u32) -> Self {
        Self::new_with_config(seed, GameConfig::default())
    }

    /// Create a new game with explicit timing/scoring configuration
    pub fn new_with_config(seed: u32, config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            active: None,
            picker: PiecePicker::new(seed),
            phase: Phase::Ready,
            score: 0,
            // First input after spawn is honored immediately; the cooldown
            // only spaces out repeats.
            move_timer_ms: config.move_repeat_ms,
            fall_timer_ms: 0,
            config,
        }
    }

    /// Spawn the first piece and start accepting ticks and input
    pub fn start(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        self.phase = Phase::Falling;
        self.spawn_piece();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// Current RNG state (reproduces the remaining piece sequence)
    pub fn seed(&self) -> u32 {
        self.picker.seed()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Read-only snapshot: 0/1 occupancy grid plus the active piece's
    /// absolute cells. This is the dataset-record contract shape.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::empty();
        self.board.write_u8_grid(&mut snapshot.board);
        snapshot.piece = self.active.as_ref().map(|piece| PieceSnapshot {
            kind: piece.kind,
            color: piece.kind.color(),
            cells: piece.absolute_cells(),
        });
        snapshot
    }

    /// Apply a single player action.
    ///
    /// Returns true iff the action changed the piece's position or shape.
    /// Actions are gated by the move-repeat timer; an honored action resets
    /// it to 0, a rejected one (cooldown, wall, or overlap) mutates nothing.
    /// `Down` is a manual single-row descent, distinct from gravity, and
    /// does not touch the fall timer.
    pub fn apply_input(&mut self, action: GameAction) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        if action == GameAction::None {
            return false;
        }
        if self.move_timer_ms < self.config.move_repeat_ms {
            return false;
        }

        let applied = match action {
            GameAction::Left => self.try_move(-1, 0),
            GameAction::Right => self.try_move(1, 0),
            GameAction::Rotate => self.try_rotate(),
            GameAction::Down => self.try_move(0, 1),
            GameAction::None => false,
        };

        if applied {
            self.move_timer_ms = 0;
        }
        applied
    }

    /// Advance the engine by `elapsed_ms` of wall-clock time.
    ///
    /// Both accumulators advance every tick. When the fall timer reaches the
    /// gravity interval the piece descends one row; if it cannot, it locks,
    /// full rows clear (score += rows x score_per_row, flat), and the next
    /// piece spawns. At most one gravity step happens per tick. A spawn into
    /// an occupied position ends the game; after that, ticks are inert.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickResult {
        let mut result = TickResult::default();
        if self.phase != Phase::Falling {
            result.game_over = self.phase == Phase::GameOver;
            return result;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        self.move_timer_ms = self.move_timer_ms.saturating_add(elapsed_ms);

        if self.fall_timer_ms >= self.config.fall_interval_ms {
            self.fall_timer_ms = 0;
            if !self.try_move(0, 1) {
                let cleared = self.lock_active();
                result.rows_cleared = cleared;
                self.score += cleared * self.config.score_per_row;
                result.spawned_new_piece = self.spawn_piece();
            }
        }

        result.game_over = self.phase == Phase::GameOver;
        result
    }

    /// Try to translate the active piece by (dx, dy)
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let ok = match &self.active {
            Some(piece) => piece.fits(&self.board, dx, dy),
            None => false,
        };
        if ok {
            if let Some(piece) = self.active.as_mut() {
                piece.x += dx;
                piece.y += dy;
            }
        }
        ok
    }

    /// Try to rotate the active piece clockwise at its current anchor.
    ///
    /// The rotated matrix is tested as-is; there are no kick attempts, so a
    /// rotation blocked by a wall or the stack keeps the prior shape.
    fn try_rotate(&mut self) -> bool {
        let rotated = match &self.active {
            Some(piece) => {
                let rotated = piece.shape.rotated_cw();
                if fits(&self.board, &rotated, piece.x, piece.y) {
                    Some(rotated)
                } else {
                    None
                }
            }
            None => None,
        };
        match rotated {
            Some(shape) => {
                if let Some(piece) = self.active.as_mut() {
                    piece.shape = shape;
                }
                true
            }
            None => false,
        }
    }

    /// Commit the active piece into the board and clear full rows.
    /// Returns the number of rows cleared.
    fn lock_active(&mut self) -> u32 {
        let Some(piece) = self.active.take() else {
            return 0;
        };
        self.board.lock(&piece.shape, piece.x, piece.y, piece.kind);
        self.board.clear_full_rows().len() as u32
    }

    /// Spawn a fresh random piece. A blocked spawn position is the terminal
    /// condition: the piece stays visible for the final snapshot and the
    /// phase flips to GameOver.
    fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.picker.next_kind());
        let ok = piece.fits(&self.board, 0, 0);
        self.active = Some(piece);
        if !ok {
            self.phase = Phase::GameOver;
        }
        ok
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
