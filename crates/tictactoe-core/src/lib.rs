//! Two-player tic-tac-toe engine with score tracking and saved games.
//!
//! This crate provides the core game logic, including:
//! - The fixed 3x3 board and its winning lines
//! - The game state machine with move validation, win/draw detection and
//!   score accrual
//! - A persisted snapshot format and pluggable storage backends
//!
//! # Architecture
//!
//! The engine is framework-free. A UI layer (terminal, browser, mobile)
//! owns its own lifecycle and calls into the engine, usually through a
//! [`Session`] that also keeps the saved game up to date. It can be
//! compiled to:
//! - Native Rust for terminal and desktop front ends
//! - WebAssembly for browser front ends
//!
//! # Modules
//!
//! - [`board`]: Players, cells and the grid
//! - [`outcome`]: Move results and rejection reasons
//! - [`game`]: Game state machine
//! - [`saved`]: Persisted snapshot format
//! - [`store`]: Storage backends
//! - [`session`]: Engine plus store, saving at the right moments

pub mod board;
pub mod game;
pub mod outcome;
pub mod saved;
pub mod session;
pub mod store;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{Board, Cell, Player, BOARD_SIZE, CELL_COUNT, LINES};
pub use game::{GameEngine, GameState};
pub use outcome::{MoveResult, RejectReason};
pub use saved::SavedState;
pub use session::Session;
pub use store::{JsonFileStore, KeyValueFileStore, MemoryStore, StateStore, StoreError};
