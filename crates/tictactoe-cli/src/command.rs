//! Parsing of player input.

use thiserror::Error;
use tictactoe_core::CELL_COUNT;

/// Something the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark a cell, 0-based index
    Place(usize),
    Reset,
    Save,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("No input")]
    Empty,

    #[error("Cell must be between 1 and {}, got {0}", CELL_COUNT)]
    CellOutOfRange(usize),

    #[error("Unknown command: {0}")]
    Unknown(String),
}

impl Command {
    /// Parse one line. Cells are entered 1-based, as shown on the grid.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let word = line.trim().to_ascii_lowercase();
        match word.as_str() {
            "" => Err(CommandError::Empty),
            "r" | "reset" => Ok(Command::Reset),
            "s" | "save" => Ok(Command::Save),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => match other.parse::<usize>() {
                Ok(cell) if (1..=CELL_COUNT).contains(&cell) => Ok(Command::Place(cell - 1)),
                Ok(cell) => Err(CommandError::CellOutOfRange(cell)),
                Err(_) => Err(CommandError::Unknown(other.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_one_based() {
        assert_eq!(Command::parse("1"), Ok(Command::Place(0)));
        assert_eq!(Command::parse(" 9\n"), Ok(Command::Place(8)));
        assert_eq!(Command::parse("0"), Err(CommandError::CellOutOfRange(0)));
        assert_eq!(Command::parse("10"), Err(CommandError::CellOutOfRange(10)));
    }

    #[test]
    fn test_words() {
        assert_eq!(Command::parse("RESET"), Ok(Command::Reset));
        assert_eq!(Command::parse("s"), Ok(Command::Save));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse(""), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
