//! Persistence adapter: board snapshots to and from a key-value store
//!
//! The whole board lives under one key as JSON, an object keyed by column id
//! whose values are `{id, title, cards: [{id, title}]}`.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::store::BoardStore;
use crate::types::Board;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Key the board is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "kanbanBoard";

/// External string blob storage (browser local storage, a directory, ...)
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing what was there
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Loads and saves boards under a fixed key
pub struct Persistence {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl Persistence {
    /// Persist under [`DEFAULT_STORAGE_KEY`]
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Use a different storage key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read and parse the stored board exactly as persisted.
    ///
    /// `Ok(None)` when nothing is stored; an error when the blob cannot be
    /// read or parsed.
    pub fn read(&self) -> Result<Option<Board>> {
        let Some(blob) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let board = serde_json::from_str(&blob)?;
        Ok(Some(board))
    }

    /// Load the stored board for a new session.
    ///
    /// A missing or malformed blob yields `Ok(None)` so the caller can fall
    /// back to the default board. A failure of the backend itself is returned
    /// as an error: the stored board may still be intact and must not be
    /// replaced. Every task id of a loaded board is regenerated, which
    /// repairs any duplicated ids in stored data.
    pub fn load(&self, store: &BoardStore) -> Result<Option<Board>> {
        let Some(blob) = self.store.get(&self.key)? else {
            debug!(key = %self.key, "no persisted board");
            return Ok(None);
        };
        match serde_json::from_str::<Board>(&blob) {
            Ok(board) => {
                debug!(
                    key = %self.key,
                    columns = board.len(),
                    tasks = board.task_count(),
                    "loaded persisted board"
                );
                Ok(Some(store.regenerate_task_ids(&board)))
            }
            Err(error) => {
                warn!(key = %self.key, %error, "discarding malformed persisted board");
                Ok(None)
            }
        }
    }

    /// Serialize and write `board`, reporting failures
    pub fn try_save(&self, board: &Board) -> Result<()> {
        let blob = serde_json::to_string(board)?;
        self.store.set(&self.key, &blob)
    }

    /// Best-effort save: failures are logged, never returned
    pub fn save(&self, board: &Board) {
        if let Err(error) = self.try_save(board) {
            warn!(key = %self.key, %error, "failed to persist board");
        }
    }
}

impl fmt::Debug for Persistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persistence")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
