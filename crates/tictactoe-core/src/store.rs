//! Durable storage for saved games.
//!
//! The engine never touches storage itself. A caller picks a
//! [`StateStore`] backend and hands snapshots to it; [`Session`] does this
//! on the caller's behalf.
//!
//! [`Session`]: crate::session::Session

use crate::saved::SavedState;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from a storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid saved game document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Somewhere a snapshot can be kept between runs
pub trait StateStore {
    /// Read the last saved snapshot, `None` if nothing was saved yet
    fn load(&mut self) -> Result<Option<SavedState>, StoreError>;

    /// Replace the stored snapshot
    fn save(&mut self, state: &SavedState) -> Result<(), StoreError>;
}

/// In-memory store, for tests and hosts that persist elsewhere
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<SavedState>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with a snapshot
    pub fn with_state(saved: SavedState) -> Self {
        Self {
            saved: Some(saved),
            writes: 0,
        }
    }

    /// The current snapshot, if any
    pub fn saved(&self) -> Option<&SavedState> {
        self.saved.as_ref()
    }

    /// Number of successful saves
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StateStore for MemoryStore {
    fn load(&mut self) -> Result<Option<SavedState>, StoreError> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, state: &SavedState) -> Result<(), StoreError> {
        self.saved = Some(state.clone());
        self.writes += 1;
        Ok(())
    }
}

/// Snapshot kept as a JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&mut self) -> Result<Option<SavedState>, StoreError> {
        let Some(text) = read_if_exists(&self.path)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    fn save(&mut self, state: &SavedState) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(state)?;
        write_replace(&self.path, &text)
    }
}

/// Snapshot kept as `KEY=value` lines, one per field
#[derive(Debug, Clone)]
pub struct KeyValueFileStore {
    path: PathBuf,
}

impl KeyValueFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(text: &str) -> BTreeMap<String, String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect()
    }
}

impl StateStore for KeyValueFileStore {
    fn load(&mut self) -> Result<Option<SavedState>, StoreError> {
        let Some(text) = read_if_exists(&self.path)? else {
            return Ok(None);
        };
        Ok(Some(SavedState::from_entries(&Self::parse(&text))))
    }

    fn save(&mut self, state: &SavedState) -> Result<(), StoreError> {
        let text: String = state
            .to_entries()
            .iter()
            .map(|(key, value)| format!("{}={}\n", key, value))
            .collect();
        write_replace(&self.path, &text)
    }
}

fn read_if_exists(path: &Path) -> Result<Option<String>, StoreError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write to a sibling temp file, then rename over the target
fn write_replace(path: &Path, contents: &str) -> Result<(), StoreError> {
    let io_err = |source: io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> SavedState {
        SavedState {
            cells: vec![1, 2, 0, 0, 1, 0, 0, 0, 0],
            score_player_one: 2,
            score_player_two: 5,
            current_player: 2,
            is_over: false,
        }
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_json_store_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("save.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_json_store_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("save.json"));
        assert_eq!(store.path(), dir.path().join("save.json").as_path());
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
        assert!(!dir.path().join("save.json.tmp").exists());
    }

    #[test]
    fn test_json_store_corrupt_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, "not json").unwrap();
        let mut store = JsonFileStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_key_value_store_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.kv");
        let mut store = KeyValueFileStore::new(&path);
        assert_eq!(store.path(), path.as_path());
        store.save(&sample()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("BOARD_STATE=1,2,0,0,1,0,0,0,0\n"));
        assert!(text.contains("CURRENT_PLAYER=2\n"));
        assert_eq!(store.load().unwrap(), Some(sample()));
    }

    #[test]
    fn test_key_value_store_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.kv");
        fs::write(&path, "# hand edited\nPLAYER_1_SCORE = 7\nbogus line\n").unwrap();

        let mut store = KeyValueFileStore::new(path);
        let saved = store.load().unwrap().unwrap();
        assert_eq!(
            saved,
            SavedState {
                score_player_one: 7,
                ..SavedState::default()
            }
        );
    }
}
