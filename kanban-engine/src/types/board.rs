//! Board-level types: Board, Column, Task

use super::ids::{ColumnId, TaskId};
use crate::error::{KanbanError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;

/// A task/card on the kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
}

impl Task {
    /// Create a task with the given id and title
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// A column defines a workflow stage and owns its ordered tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Task>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Set the initial tasks
    pub fn with_cards(mut self, cards: Vec<Task>) -> Self {
        self.cards = cards;
        self
    }

    /// Number of tasks in the column
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of a task within this column
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.cards.iter().position(|t| &t.id == task_id)
    }
}

/// The kanban board: columns in display order, keyed by id.
///
/// Columns are shared between snapshots behind `Arc` and copied on write, so
/// cloning a board is cheap and a mutation of one snapshot is never visible
/// through another.
///
/// Serializes as a JSON object keyed by column id, in display order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "IndexMap<ColumnId, Column>")]
pub struct Board {
    columns: IndexMap<ColumnId, Arc<Column>>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from columns in display order.
    ///
    /// A later column with an id already present replaces the earlier one.
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> Self {
        columns.into_iter().map(Arc::new).collect()
    }

    /// Columns in display order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values().map(|c| c.as_ref())
    }

    /// Column ids in display order
    pub fn column_ids(&self) -> impl Iterator<Item = &ColumnId> {
        self.columns.keys()
    }

    /// Look up a column by id
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id).map(|c| c.as_ref())
    }

    pub fn contains_column(&self, id: &ColumnId) -> bool {
        self.columns.contains_key(id)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.values().map(|c| c.len()).sum()
    }

    /// Find the column and index holding a task
    pub fn find_task(&self, task_id: &TaskId) -> Option<(&ColumnId, usize)> {
        self.columns
            .iter()
            .find_map(|(id, column)| column.position_of(task_id).map(|index| (id, index)))
    }

    /// Resolve a user-supplied column reference: an exact id first, then a
    /// case-insensitive title match.
    pub fn resolve_column(&self, reference: &str) -> Option<&ColumnId> {
        if let Some((id, _)) = self.columns.get_key_value(reference) {
            return Some(id);
        }
        let wanted = reference.trim().to_lowercase();
        self.columns
            .values()
            .find(|c| c.title.trim().to_lowercase() == wanted)
            .map(|c| &c.id)
    }

    /// Resolve a column reference, reporting a miss as an error
    pub fn lookup_column(&self, reference: &str) -> Result<&ColumnId> {
        self.resolve_column(reference)
            .ok_or_else(|| KanbanError::ColumnNotFound {
                id: reference.to_string(),
            })
    }

    /// Id of the task at `index` in `column`
    pub fn task_at(&self, column: &ColumnId, index: usize) -> Result<&TaskId> {
        let found = self.column(column).ok_or_else(|| KanbanError::ColumnNotFound {
            id: column.to_string(),
        })?;
        found
            .cards
            .get(index)
            .map(|t| &t.id)
            .ok_or_else(|| KanbanError::index_out_of_range(column.as_str(), index, found.len()))
    }

    /// Mutable access to a column, copying it first if another snapshot
    /// shares it
    pub(crate) fn column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.get_mut(id).map(Arc::make_mut)
    }

    /// Append a column at the end of the display order
    pub(crate) fn push_column(&mut self, column: Column) {
        self.columns.insert(column.id.clone(), Arc::new(column));
    }

    /// Remove a column, keeping the order of the remaining ones
    pub(crate) fn remove_column(&mut self, id: &ColumnId) -> Option<Arc<Column>> {
        self.columns.shift_remove(id)
    }

    /// Shared handles to every column, for building derived views
    pub(crate) fn shared_columns(&self) -> impl Iterator<Item = &Arc<Column>> {
        self.columns.values()
    }

    /// Whether two snapshots share the same allocation for a column
    #[cfg(test)]
    pub(crate) fn shares_column_with(&self, other: &Board, id: &ColumnId) -> bool {
        match (self.columns.get(id), other.columns.get(id)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl FromIterator<Arc<Column>> for Board {
    fn from_iter<I: IntoIterator<Item = Arc<Column>>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }
}

/// The map key is authoritative for a column's identity; an inner `id` that
/// disagrees with its key is overwritten.
impl From<IndexMap<ColumnId, Column>> for Board {
    fn from(map: IndexMap<ColumnId, Column>) -> Self {
        let columns = map
            .into_iter()
            .map(|(key, mut column)| {
                column.id = key.clone();
                (key, Arc::new(column))
            })
            .collect();
        Self { columns }
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.columns.serialize(serializer)
    }
}

/// Equality is order-sensitive: two boards with the same columns in a
/// different display order are different snapshots.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(other.columns.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && (Arc::ptr_eq(va, vb) || va == vb))
    }
}

impl Eq for Board {}
