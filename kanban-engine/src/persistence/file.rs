//! Directory-backed key-value store, one JSON file per key

use super::KeyValueStore;
use crate::error::{KanbanError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Stores each key as `<root>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key.starts_with('.')
            || key.contains(['/', '\\'])
            || key.chars().any(char::is_control)
        {
            return Err(KanbanError::store(key, "invalid key for file storage"));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        atomic_write(&path, value.as_bytes())
    }
}

/// Write via a temp file in the same directory, then rename over the target
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    // Rename (atomic on same filesystem)
    let result = fs::write(&temp_path, content).and_then(|()| fs::rename(&temp_path, path));
    if let Err(error) = result {
        if let Err(cleanup) = fs::remove_file(&temp_path) {
            if cleanup.kind() != ErrorKind::NotFound {
                warn!(path = %temp_path.display(), error = %cleanup, "failed to remove temp file");
            }
        }
        return Err(error.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join(".kanban"));

        assert_eq!(store.get("kanbanBoard").unwrap(), None);
        store.set("kanbanBoard", "{}").unwrap();

        assert_eq!(store.get("kanbanBoard").unwrap(), Some("{}".to_string()));
        assert!(temp.path().join(".kanban").join("kanbanBoard.json").exists());
        assert!(!temp.path().join(".kanban").join("kanbanBoard.tmp").exists());
    }

    #[test]
    fn test_file_store_overwrites() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());

        store.set("board", "first").unwrap();
        store.set("board", "second").unwrap();

        assert_eq!(store.get("board").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let store = FileStore::new("/tmp/unused");
        assert!(store.path_for("../escape").is_err());
        assert!(store.path_for("a/b").is_err());
        assert!(store.path_for("").is_err());
        assert!(store.path_for("kanbanBoard").is_ok());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());
        // A non-empty directory where the board file should go
        let blocker = temp.path().join("board.json");
        std::fs::create_dir(&blocker).unwrap();
        std::fs::write(blocker.join("occupied"), "x").unwrap();

        assert!(store.set("board", "{}").is_err());

        assert!(!temp.path().join("board.tmp").exists());
        assert!(blocker.is_dir());
    }
}
