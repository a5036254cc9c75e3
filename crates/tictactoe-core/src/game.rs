//! Core game state machine.
//!
//! This module contains the `GameState` entity and the `GameEngine` that
//! owns it. The engine is the only way to mutate the state: moves go
//! through [`GameEngine::apply_move`] and new rounds through
//! [`GameEngine::reset`].
//!
//! The game has two implicit states. While `is_over` is false the game is
//! playing; a win or draw moves it to over, where every move is rejected
//! until reset.

use crate::board::{Board, Cell, Player, CELL_COUNT};
use crate::outcome::{MoveResult, RejectReason};
use crate::saved::SavedState;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board
    pub cells: Board,
    /// Whose move is next
    pub current_player: Player,
    /// Wins credited to player one
    pub score_player_one: u32,
    /// Wins credited to player two
    pub score_player_two: u32,
    /// Set once a win or draw is detected; blocks moves until reset
    pub is_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            cells: Board::new(),
            current_player: Player::One,
            score_player_one: 0,
            score_player_two: 0,
            is_over: false,
        }
    }
}

/// Enforces the rules and holds the authoritative state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Create a fresh game: empty board, player one to move, no score
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn cells(&self) -> &Board {
        &self.state.cells
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over
    }

    /// Score for a player
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::One => self.state.score_player_one,
            Player::Two => self.state.score_player_two,
        }
    }

    /// Player owning a completed line, if any
    pub fn check_win(&self) -> Option<Player> {
        self.state.cells.winner()
    }

    /// Board is full and no line is complete
    pub fn check_draw(&self) -> bool {
        self.state.cells.is_draw()
    }

    /// Place the current player's mark at `index` (0-8, row-major).
    ///
    /// Rejected moves leave the state untouched.
    pub fn apply_move(&mut self, index: usize) -> MoveResult {
        if self.state.is_over {
            return MoveResult::Rejected(RejectReason::GameAlreadyOver);
        }

        match self.state.cells.get(index) {
            None => return MoveResult::Rejected(RejectReason::InvalidCell(index)),
            Some(Cell::Occupied(_)) => return MoveResult::Rejected(RejectReason::CellOccupied),
            Some(Cell::Empty) => {}
        }

        let mover = self.state.current_player;
        self.state.cells.place(index, mover);

        // Only a line through the new mark counts, so a restored board
        // cannot hand the mover someone else's line. Win is checked before
        // draw: a full board with a line is a win.
        if self.state.cells.completes_line(index, mover) {
            self.credit_win(mover);
            self.state.is_over = true;
            return MoveResult::Win(mover);
        }

        if self.state.cells.is_full() {
            self.state.is_over = true;
            return MoveResult::Draw;
        }

        self.state.current_player = mover.other();
        MoveResult::Continue
    }

    /// Start over: empty board, player one to move, scores cleared
    pub fn reset(&mut self) {
        self.state = GameState::default();
    }

    /// Snapshot for persistence
    pub fn to_saved(&self) -> SavedState {
        SavedState {
            cells: self.state.cells.codes().to_vec(),
            score_player_one: self.state.score_player_one,
            score_player_two: self.state.score_player_two,
            current_player: self.state.current_player.id(),
            is_over: self.state.is_over,
        }
    }

    /// Rebuild a game from a snapshot, or a fresh game if there is none.
    ///
    /// Out-of-range values are clamped rather than rejected: unknown cell
    /// codes become empty, an unknown player id becomes player one, missing
    /// cells are empty and surplus cells are ignored.
    pub fn from_saved(saved: Option<&SavedState>) -> Self {
        let Some(saved) = saved else {
            return Self::new();
        };

        if saved.cells.len() != CELL_COUNT {
            warn!(
                "Saved board has {} cells, expected {}",
                saved.cells.len(),
                CELL_COUNT
            );
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (index, (slot, &code)) in cells.iter_mut().zip(&saved.cells).enumerate() {
            *slot = Cell::from_code(code).unwrap_or_else(|| {
                warn!("Saved cell {} has unknown code {}, clearing it", index, code);
                Cell::Empty
            });
        }

        let current_player = Player::from_id(saved.current_player).unwrap_or_else(|| {
            warn!(
                "Saved current player {} is not 1 or 2, using player 1",
                saved.current_player
            );
            Player::One
        });

        Self {
            state: GameState {
                cells: Board::from_cells(cells),
                current_player,
                score_player_one: saved.score_player_one,
                score_player_two: saved.score_player_two,
                is_over: saved.is_over,
            },
        }
    }

    fn credit_win(&mut self, winner: Player) {
        match winner {
            Player::One => {
                self.state.score_player_one = self.state.score_player_one.saturating_add(1)
            }
            Player::Two => {
                self.state.score_player_two = self.state.score_player_two.saturating_add(1)
            }
        }
    }
}
