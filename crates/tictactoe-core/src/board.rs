//! Board representation and line checks.
//!
//! This module contains:
//! - Player identities and their numeric codes
//! - Cell contents
//! - The fixed 3x3 board and the 8 winning lines

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the board (fixed 3x3 grid)
pub const CELL_COUNT: usize = 9;

/// Side length of the board
pub const BOARD_SIZE: usize = 3;

/// The 8 winning lines as index triples: 3 rows, 3 columns, 2 diagonals
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first, plays X
    One,
    /// Moves second, plays O
    Two,
}

impl Player {
    /// Both players in turn order
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Numeric id used in saved state (1 or 2)
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Player for a numeric id, if valid
    pub fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The opponent
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Mark drawn on the grid
    pub fn mark(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.id())
    }
}

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    /// Numeric code used in saved state: 0 = empty, 1/2 = player id
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(player) => player.id(),
        }
    }

    /// Cell for a numeric code, if valid
    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            other => Player::from_id(other).map(Cell::Occupied),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The occupying player, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// The 3x3 grid, indexed 0-8 row-major (index = row * 3 + col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw cells
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Index for a (row, col) pair, if on the board
    pub fn index_of(row: usize, col: usize) -> Option<usize> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(row * BOARD_SIZE + col)
        } else {
            None
        }
    }

    /// Get the cell at an index, `None` if out of range
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Mark a cell. Callers check emptiness first; the board itself only
    /// guards the index range.
    pub(crate) fn place(&mut self, index: usize, player: Player) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = Cell::Occupied(player);
                true
            }
            None => false,
        }
    }

    /// All cells in index order
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Numeric codes for all cells
    pub fn codes(&self) -> [u8; CELL_COUNT] {
        self.cells.map(Cell::code)
    }

    /// Indices of empty cells
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// First completed line, if any
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LINES.into_iter().find(|&[a, b, c]| {
            let first = self.cells[a];
            !first.is_empty() && first == self.cells[b] && first == self.cells[c]
        })
    }

    /// Player owning a completed line, if any
    pub fn winner(&self) -> Option<Player> {
        self.winning_line()
            .and_then(|[a, _, _]| self.cells[a].player())
    }

    /// Whether `player` owns every cell of some line through `index`
    pub fn completes_line(&self, index: usize, player: Player) -> bool {
        LINES
            .iter()
            .filter(|line| line.contains(&index))
            .any(|line| line.iter().all(|&i| self.cells[i] == Cell::Occupied(player)))
    }

    /// Full board with no completed line
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winning_line().is_none()
    }
}
