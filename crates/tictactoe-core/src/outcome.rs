//! Results of applying a move.

use crate::board::Player;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a move was refused. The game state is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RejectReason {
    #[error("Cell is already occupied")]
    CellOccupied,

    #[error("Game is already over")]
    GameAlreadyOver,

    #[error("No cell at index {0}")]
    InvalidCell(usize),
}

/// Outcome of a single move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum MoveResult {
    /// Move placed, game goes on with the other player
    Continue,
    /// Move completed a line for this player
    Win(Player),
    /// Move filled the board with no line
    Draw,
    /// Move refused
    Rejected(RejectReason),
}

impl MoveResult {
    /// Whether the move ended the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveResult::Win(_) | MoveResult::Draw)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveResult::Rejected(_))
    }
}
