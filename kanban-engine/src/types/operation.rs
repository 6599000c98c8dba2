//! Operation vocabulary: every board mutation as a value

use super::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction for keyboard reordering within a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
        }
    }
}

/// A board mutation, as produced by the input and drag layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    AddColumn {
        title: String,
    },
    DeleteColumn {
        column: ColumnId,
    },
    AddTask {
        column: ColumnId,
        title: String,
    },
    DeleteTask {
        column: ColumnId,
        task: TaskId,
    },
    MoveTask {
        source: ColumnId,
        source_index: usize,
        destination: ColumnId,
        destination_index: usize,
    },
    ReorderTask {
        column: ColumnId,
        index: usize,
        direction: Direction,
    },
}

impl Operation {
    /// Canonical op string (e.g., "add task")
    pub fn op_string(&self) -> &'static str {
        match self {
            Self::AddColumn { .. } => "add column",
            Self::DeleteColumn { .. } => "delete column",
            Self::AddTask { .. } => "add task",
            Self::DeleteTask { .. } => "delete task",
            Self::MoveTask { .. } => "move task",
            Self::ReorderTask { .. } => "reorder task",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.op_string())
    }
}
