//! Session configuration

use crate::persistence::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};

/// Tunables for a [`crate::KanbanSession`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Key the board is persisted under
    pub storage_key: String,
    /// Maximum undo depth; `None` keeps every step
    pub history_limit: Option<usize>,
    /// Also persist the board after undo and redo, not only after commits
    pub persist_navigation: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            history_limit: None,
            persist_navigation: true,
        }
    }
}
