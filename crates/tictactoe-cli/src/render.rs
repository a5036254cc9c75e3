//! Text rendering of the board and game messages.

use tictactoe_core::{Board, Cell, BOARD_SIZE, GameEngine, MoveResult, Player, RejectReason};

/// Grid with marks; empty cells show their 1-based number
pub fn board(board: &Board) -> String {
    let line = board.winning_line();
    let divider = vec!["---"; BOARD_SIZE].join("+");
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .filter_map(|col| Board::index_of(row, col))
            .map(|index| match board.get(index) {
                Some(Cell::Occupied(player)) if line.is_some_and(|l| l.contains(&index)) => {
                    format!("[{}]", player.mark())
                }
                Some(Cell::Occupied(player)) => format!(" {} ", player.mark()),
                _ => format!(" {} ", index + 1),
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row + 1 < BOARD_SIZE {
            out.push_str(&divider);
            out.push('\n');
        }
    }
    out
}

pub fn scores(engine: &GameEngine) -> String {
    format!(
        "{}: {}   {}: {}",
        Player::One,
        engine.score(Player::One),
        Player::Two,
        engine.score(Player::Two)
    )
}

/// Prompt for the next move, or a hint to reset once the game is over
pub fn prompt(engine: &GameEngine) -> String {
    if engine.is_over() {
        "Game over. Type 'reset' to play again.".to_string()
    } else {
        let player = engine.current_player();
        format!("{} ({}) to move:", player, player.mark())
    }
}

/// Message for a move result, `None` when play just continues
pub fn outcome(result: &MoveResult) -> Option<String> {
    match result {
        MoveResult::Continue => None,
        MoveResult::Win(player) => Some(format!("{} wins!", player)),
        MoveResult::Draw => Some("It's a draw!".to_string()),
        MoveResult::Rejected(RejectReason::GameAlreadyOver) => {
            Some("Wrong move! The game is over, reset to play again.".to_string())
        }
        MoveResult::Rejected(reason) => Some(format!("Wrong move! {}", reason)),
    }
}

pub fn help() -> &'static str {
    "Commands:\n  1-9    place your mark in that cell\n  reset  clear the board and scores\n  save   save the game\n  quit   save and exit\n  help   show this text\n"
}
