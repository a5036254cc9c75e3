//! Persisted form of the game state.
//!
//! `SavedState` is a plain value object: small integers and a flag, with
//! no validation. It can be stored as a JSON document or as flat
//! key-value entries. Turning it back into a game is done by
//! [`GameEngine::from_saved`](crate::game::GameEngine::from_saved), which
//! decides what to do with out-of-range values.

use crate::board::{Player, CELL_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Flat key for the comma-joined cell codes
pub const KEY_BOARD: &str = "BOARD_STATE";
/// Flat key for player one's score
pub const KEY_SCORE_ONE: &str = "PLAYER_1_SCORE";
/// Flat key for player two's score
pub const KEY_SCORE_TWO: &str = "PLAYER_2_SCORE";
/// Flat key for the player to move
pub const KEY_CURRENT_PLAYER: &str = "CURRENT_PLAYER";
/// Flat key for the game-over flag
pub const KEY_GAME_OVER: &str = "IS_GAME_OVER";

/// Snapshot of everything needed to resume a game.
///
/// Missing fields take their default when deserialized, so a partial
/// document still restores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedState {
    /// Cell codes, 0 = empty, 1/2 = player id
    pub cells: Vec<u8>,
    pub score_player_one: u32,
    pub score_player_two: u32,
    /// Player id to move next (1 or 2)
    pub current_player: u8,
    pub is_over: bool,
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            cells: vec![0; CELL_COUNT],
            score_player_one: 0,
            score_player_two: 0,
            current_player: Player::One.id(),
            is_over: false,
        }
    }
}

impl SavedState {
    /// Cells as comma-separated digits, e.g. `1,0,2,0,0,0,0,0,0`
    pub fn board_string(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse comma-separated cell codes
    pub fn parse_board(text: &str) -> Option<Vec<u8>> {
        text.split(',')
            .map(|part| part.trim().parse::<u8>().ok())
            .collect()
    }

    /// Flat key-value form, one entry per field
    pub fn to_entries(&self) -> BTreeMap<String, String> {
        let mut entries = BTreeMap::new();
        entries.insert(KEY_BOARD.to_string(), self.board_string());
        entries.insert(KEY_SCORE_ONE.to_string(), self.score_player_one.to_string());
        entries.insert(KEY_SCORE_TWO.to_string(), self.score_player_two.to_string());
        entries.insert(
            KEY_CURRENT_PLAYER.to_string(),
            self.current_player.to_string(),
        );
        entries.insert(KEY_GAME_OVER.to_string(), self.is_over.to_string());
        entries
    }

    /// Rebuild from flat entries. Each field that is missing or does not
    /// parse keeps its default.
    pub fn from_entries(entries: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let cells = match entries.get(KEY_BOARD) {
            Some(text) => Self::parse_board(text).unwrap_or_else(|| {
                warn!("Unreadable {} entry {:?}, using empty board", KEY_BOARD, text);
                defaults.cells.clone()
            }),
            None => defaults.cells.clone(),
        };

        Self {
            cells,
            score_player_one: parse_entry(entries, KEY_SCORE_ONE)
                .unwrap_or(defaults.score_player_one),
            score_player_two: parse_entry(entries, KEY_SCORE_TWO)
                .unwrap_or(defaults.score_player_two),
            current_player: parse_entry(entries, KEY_CURRENT_PLAYER)
                .unwrap_or(defaults.current_player),
            is_over: parse_entry(entries, KEY_GAME_OVER).unwrap_or(defaults.is_over),
        }
    }
}

fn parse_entry<T: std::str::FromStr>(entries: &BTreeMap<String, String>, key: &str) -> Option<T> {
    let text = entries.get(key)?;
    match text.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Unreadable {} entry {:?}, using default", key, text);
            None
        }
    }
}
