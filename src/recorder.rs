//! Dataset recorder - the driver-side collaborator for recorded sessions.
//!
//! Appends one `{step, board, piece, move}` record per honored action and
//! serializes the sequence as a pretty-printed JSON array, matching the
//! `tetris_dataset_<timestamp>.json` files consumed by the offline training
//! tooling. The engine itself never performs I/O; the driver owns the
//! recorder and decides when to flush it.

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::snapshot::{GameSnapshot, OccupancyGrid, PieceSnapshot};
use crate::types::GameAction;

/// One recorded move: the board and piece as observed right after the
/// action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// 1-based position in the session
    pub step: u32,
    /// 0/1 occupancy of the committed board (the active piece excluded)
    pub board: OccupancyGrid,
    pub piece: PieceSnapshot,
    /// The honored action, lowercase
    #[serde(rename = "move")]
    pub action: GameAction,
}

/// Accumulates the move records of one session
#[derive(Debug, Clone, Default)]
pub struct DatasetRecorder {
    records: Vec<MoveRecord>,
}

impl DatasetRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Append a record for an honored action.
    ///
    /// `None` actions and snapshots without an active piece are skipped
    /// (nothing moved, nothing to learn from). Returns true when a record
    /// was appended.
    pub fn record(&mut self, snapshot: &GameSnapshot, action: GameAction) -> bool {
        if action == GameAction::None {
            return false;
        }
        let Some(piece) = snapshot.piece else {
            return false;
        };
        self.records.push(MoveRecord {
            step: self.records.len() as u32 + 1,
            board: snapshot.board,
            piece,
            action,
        });
        true
    }

    /// Serialize the session as a pretty-printed JSON array
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records)
    }

    /// Write the session to any sink (file, buffer, socket)
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let json = self.to_json().context("serializing dataset records")?;
        writer
            .write_all(json.as_bytes())
            .context("writing dataset records")?;
        Ok(())
    }
}

/// Uniquely timestamped dataset filename for a session ending at `now`
pub fn dataset_filename(now: SystemTime) -> String {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("tetris_dataset_{secs}.json")
}
