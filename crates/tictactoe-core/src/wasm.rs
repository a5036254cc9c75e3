//! WebAssembly bindings for the tic-tac-toe engine.
//!
//! A browser or webview UI drives the game through this wrapper. The host
//! owns storage: it reads the snapshot JSON at startup, passes it to the
//! constructor, and writes `getSavedState()` back after moves that end the
//! game and after `reset()`.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::board::Player;
#[cfg(feature = "wasm")]
use crate::game::GameEngine;
#[cfg(feature = "wasm")]
use crate::saved::SavedState;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    engine: GameEngine,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Create a game from saved JSON, or a fresh game when none is given
    #[wasm_bindgen(constructor)]
    pub fn new(saved_json: Option<String>) -> Result<WasmGame, JsValue> {
        let saved = match saved_json {
            Some(json) => Some(
                serde_json::from_str::<SavedState>(&json)
                    .map_err(|e| JsValue::from_str(&format!("Invalid saved state: {}", e)))?,
            ),
            None => None,
        };

        Ok(WasmGame {
            engine: GameEngine::from_saved(saved.as_ref()),
        })
    }

    /// Apply a move, returns the move result as JSON
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, index: usize) -> String {
        let result = self.engine.apply_move(index);
        serde_json::to_string(&result).unwrap_or_else(|_| "null".to_string())
    }

    /// Clear the board and both scores
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Snapshot JSON for the host to persist
    #[wasm_bindgen(js_name = getSavedState)]
    pub fn get_saved_state(&self) -> String {
        serde_json::to_string(&self.engine.to_saved()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Cell codes in index order (0 = empty, 1/2 = player)
    #[wasm_bindgen(js_name = getCells)]
    pub fn get_cells(&self) -> Vec<u8> {
        self.engine.cells().codes().to_vec()
    }

    /// Id of the player to move (1 or 2)
    #[wasm_bindgen(js_name = getCurrentPlayer)]
    pub fn get_current_player(&self) -> u8 {
        self.engine.current_player().id()
    }

    /// Score for player id 1 or 2; 0 for any other id
    #[wasm_bindgen(js_name = getScore)]
    pub fn get_score(&self, player: u8) -> u32 {
        Player::from_id(player)
            .map(|p| self.engine.score(p))
            .unwrap_or(0)
    }

    /// Check if the game is over
    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.engine.is_over()
    }

    /// Id of the winner, if a line is complete
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<u8> {
        self.engine.check_win().map(Player::id)
    }

    /// Indices of the completed line, for highlighting
    #[wasm_bindgen(js_name = getWinningLine)]
    pub fn get_winning_line(&self) -> Option<Vec<u32>> {
        self.engine
            .cells()
            .winning_line()
            .map(|line| line.iter().map(|&i| i as u32).collect())
    }
}

#[cfg(all(test, feature = "wasm"))]
mod tests {
    use super::*;

    #[test]
    fn test_wasm_game_plays_to_win() {
        let mut game = WasmGame::new(None).unwrap();
        for index in [0, 3, 1, 4] {
            assert_eq!(game.apply_move(index), r#"{"type":"Continue"}"#);
        }
        assert_eq!(game.apply_move(2), r#"{"type":"Win","payload":"One"}"#);
        assert_eq!(game.get_winner(), Some(1));
        assert_eq!(game.get_winning_line(), Some(vec![0, 1, 2]));
        assert_eq!(game.get_score(1), 1);
    }

    #[test]
    fn test_wasm_game_restores_snapshot() {
        let mut game = WasmGame::new(None).unwrap();
        game.apply_move(4);
        let restored = WasmGame::new(Some(game.get_saved_state())).unwrap();
        assert_eq!(restored.get_cells(), game.get_cells());
        assert_eq!(restored.get_current_player(), 2);
    }
}
