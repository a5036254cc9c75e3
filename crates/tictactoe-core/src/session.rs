//! A game bound to a storage backend.
//!
//! `Session` is what a UI layer holds: it forwards moves and resets to the
//! engine and writes a snapshot to the store whenever the game-over status
//! changes, after every reset, and on explicit [`Session::save`]. Writes
//! happen synchronously in the order of the mutations that caused them.

use crate::board::Player;
use crate::game::GameEngine;
use crate::outcome::MoveResult;
use crate::store::{StateStore, StoreError};
use tracing::{debug, warn};

pub struct Session<S: StateStore> {
    engine: GameEngine,
    store: S,
}

impl<S: StateStore> Session<S> {
    /// Open a session, restoring the last snapshot from the store.
    ///
    /// A store that cannot be read is logged and the game starts fresh.
    pub fn open(mut store: S) -> Self {
        let saved = match store.load() {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Could not load saved game, starting fresh: {}", e);
                None
            }
        };

        if saved.is_some() {
            debug!("Restored saved game");
        }

        Self {
            engine: GameEngine::from_saved(saved.as_ref()),
            store,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the store, dropping the game
    pub fn into_store(self) -> S {
        self.store
    }

    /// Apply a move and save if it ended the game.
    ///
    /// The move result is returned even when the save fails; the error
    /// only reports that the snapshot on disk is stale.
    pub fn apply_move(&mut self, index: usize) -> (MoveResult, Result<(), StoreError>) {
        let mover = self.engine.current_player();
        let result = self.engine.apply_move(index);
        debug!("{} -> cell {}: {:?}", mover, index, result);

        let saved = if result.is_terminal() {
            self.save()
        } else {
            Ok(())
        };
        (result, saved)
    }

    /// Reset the game and scores, then save
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.engine.reset();
        debug!("Game reset");
        self.save()
    }

    /// Write the current state to the store
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.store.save(&self.engine.to_saved())?;
        debug!(
            "Saved game ({} {} - {} {})",
            Player::One,
            self.engine.score(Player::One),
            Player::Two,
            self.engine.score(Player::Two)
        );
        Ok(())
    }
}
