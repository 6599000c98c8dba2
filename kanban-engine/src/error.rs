//! Error types for the kanban engine

use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
///
/// Validation rejections and missing ids are not errors: the board store
/// treats them as no-ops. Errors are reserved for contract violations by the
/// caller and for failures of the storage backend.
#[derive(Debug, Error)]
pub enum KanbanError {
    /// A task index outside the bounds of its column
    #[error("index {index} out of range for column '{column}' with {len} tasks")]
    IndexOutOfRange {
        column: String,
        index: usize,
        len: usize,
    },

    /// A column reference that matches no column, from the strict lookups
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// The key-value backend rejected a read or write
    #[error("store error for key '{key}': {message}")]
    Store { key: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    /// Create an index out of range error
    pub fn index_out_of_range(column: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            column: column.into(),
            index,
            len,
        }
    }

    /// Create a store error
    pub fn store(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Store {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Check if this error came from the caller rather than the environment
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::ColumnNotFound { .. }
        )
    }
}
