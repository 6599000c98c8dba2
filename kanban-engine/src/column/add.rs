//! AddColumn operation

use crate::store::BoardStore;
use crate::types::{Board, Column};
use tracing::trace;

impl BoardStore {
    /// Append a new, empty column with a fresh id.
    ///
    /// A title that is empty after trimming is rejected and the board is
    /// returned unchanged. The title is stored as given.
    pub fn add_column(&self, board: &Board, title: &str) -> Board {
        if title.trim().is_empty() {
            trace!("add column rejected: empty title");
            return board.clone();
        }

        let mut next = board.clone();
        next.push_column(Column::new(self.next_column_id(), title));
        next
    }
}
