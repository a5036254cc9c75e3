//! Terminal tic-tac-toe for two players sharing a keyboard.

use std::io;
use std::path::PathBuf;
use tictactoe_core::{JsonFileStore, KeyValueFileStore, Session};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod command;
mod render;

fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr so the board on stdout stays readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Save file and format from env or use defaults
    let path = PathBuf::from(
        std::env::var("TICTACTOE_SAVE").unwrap_or_else(|_| "tictactoe_save.json".into()),
    );
    let format = std::env::var("TICTACTOE_FORMAT").unwrap_or_else(|_| "json".into());

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match format.as_str() {
        "json" => {
            let store = JsonFileStore::new(path);
            info!("Using JSON save file {}", store.path().display());
            let mut session = Session::open(store);
            app::run(&mut session, stdin, stdout)
        }
        "kv" => {
            let store = KeyValueFileStore::new(path);
            info!("Using key-value save file {}", store.path().display());
            let mut session = Session::open(store);
            app::run(&mut session, stdin, stdout)
        }
        other => anyhow::bail!("Unknown TICTACTOE_FORMAT {:?}, expected \"json\" or \"kv\"", other),
    }
}
