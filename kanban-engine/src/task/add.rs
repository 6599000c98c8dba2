//! AddTask operation

use crate::store::BoardStore;
use crate::types::{Board, ColumnId, Task};
use tracing::trace;

impl BoardStore {
    /// Append a new task to the end of a column.
    ///
    /// Rejected (board returned unchanged) when the trimmed title is empty or
    /// the column does not exist.
    pub fn add_task(&self, board: &Board, column: &ColumnId, title: &str) -> Board {
        if title.trim().is_empty() {
            trace!(%column, "add task rejected: empty title");
            return board.clone();
        }
        if !board.contains_column(column) {
            trace!(%column, "add task: column not found");
            return board.clone();
        }

        let mut next = board.clone();
        let task = Task::new(self.next_task_id(), title);
        if let Some(target) = next.column_mut(column) {
            target.cards.push(task);
        }
        next
    }
}
