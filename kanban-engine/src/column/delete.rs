//! DeleteColumn operation

use crate::store::BoardStore;
use crate::types::{Board, ColumnId};
use tracing::trace;

impl BoardStore {
    /// Remove a column together with all of its tasks
    pub fn delete_column(&self, board: &Board, column: &ColumnId) -> Board {
        let mut next = board.clone();
        if next.remove_column(column).is_none() {
            trace!(%column, "delete column: not found");
        }
        next
    }
}
