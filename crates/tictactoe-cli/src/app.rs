//! Terminal game loop.

use crate::command::{Command, CommandError};
use crate::render;
use std::io::{BufRead, Write};
use tictactoe_core::{Session, StateStore};
use tracing::{info, warn};

/// Play until the player quits or input ends. The game is saved on exit.
pub fn run<S, R, W>(session: &mut Session<S>, input: R, mut output: W) -> anyhow::Result<()>
where
    S: StateStore,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", render::board(session.engine().cells()))?;
    writeln!(output, "{}", render::scores(session.engine()))?;
    writeln!(output, "{}", render::prompt(session.engine()))?;

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                writeln!(output, "Wrong move! {}", e)?;
                continue;
            }
        };

        match command {
            Command::Place(index) => {
                let (result, saved) = session.apply_move(index);
                if let Err(e) = saved {
                    warn!("Failed to save game: {}", e);
                }
                write!(output, "{}", render::board(session.engine().cells()))?;
                if let Some(message) = render::outcome(&result) {
                    writeln!(output, "{}", message)?;
                }
                if result.is_terminal() {
                    writeln!(output, "{}", render::scores(session.engine()))?;
                }
            }
            Command::Reset => {
                if let Err(e) = session.reset() {
                    warn!("Failed to save game: {}", e);
                }
                write!(output, "{}", render::board(session.engine().cells()))?;
                writeln!(output, "{}", render::scores(session.engine()))?;
            }
            Command::Save => match session.save() {
                Ok(()) => writeln!(output, "Game saved.")?,
                Err(e) => writeln!(output, "Could not save game: {}", e)?,
            },
            Command::Help => write!(output, "{}", render::help())?,
            Command::Quit => break,
        }

        writeln!(output, "{}", render::prompt(session.engine()))?;
    }

    session.save()?;
    info!("Game saved on exit");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{MemoryStore, Player};

    fn run_script(session: &mut Session<MemoryStore>, script: &str) -> String {
        let mut out = Vec::new();
        run(session, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_scripted_win() {
        let mut session = Session::open(MemoryStore::new());
        let out = run_script(&mut session, "1\n4\n2\n5\n3\n5\nquit\n");

        assert!(out.contains("Player 1 wins!"));
        assert!(out.contains("Player 1: 1   Player 2: 0"));
        assert!(out.contains("Wrong move! The game is over"));
        assert_eq!(session.engine().score(Player::One), 1);
        // One save when the game ended, one on quit
        assert_eq!(session.store().writes(), 2);
    }

    #[test]
    fn test_bad_input_is_reported() {
        let mut session = Session::open(MemoryStore::new());
        let out = run_script(&mut session, "5\n5\nten\n12\n");

        assert!(out.contains("Wrong move! Cell is already occupied"));
        assert!(out.contains("Wrong move! Unknown command: ten"));
        assert!(out.contains("Wrong move! Cell must be between 1 and 9, got 12"));
        assert_eq!(session.engine().current_player(), Player::Two);
    }

    #[test]
    fn test_end_of_input_saves() {
        let mut session = Session::open(MemoryStore::new());
        run_script(&mut session, "1\n");
        let saved = session.store().saved().unwrap();
        assert_eq!(saved.cells[0], 1);
        assert_eq!(saved.current_player, 2);
    }

    #[test]
    fn test_reset_clears_scores() {
        let mut session = Session::open(MemoryStore::new());
        run_script(&mut session, "1\n4\n2\n5\n3\nreset\n");
        assert_eq!(session.engine().score(Player::One), 0);
        assert!(!session.engine().is_over());
    }
}
