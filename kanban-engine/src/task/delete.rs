//! DeleteTask operation

use crate::store::BoardStore;
use crate::types::{Board, ColumnId, TaskId};
use tracing::trace;

impl BoardStore {
    /// Remove a task from the named column
    pub fn delete_task(&self, board: &Board, column: &ColumnId, task: &TaskId) -> Board {
        let Some(index) = board.column(column).and_then(|c| c.position_of(task)) else {
            trace!(%column, %task, "delete task: not found");
            return board.clone();
        };

        let mut next = board.clone();
        if let Some(target) = next.column_mut(column) {
            target.cards.remove(index);
        }
        next
    }
}
