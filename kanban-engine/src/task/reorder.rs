//! ReorderTask operation (keyboard up/down)

use crate::error::{KanbanError, Result};
use crate::store::BoardStore;
use crate::types::{Board, ColumnId, Direction};
use tracing::trace;

impl BoardStore {
    /// Swap the task at `index` with its neighbour in `direction`.
    ///
    /// Moving the first task up or the last task down is a no-op, as is a
    /// missing column. An index past the end of the column is an error.
    pub fn reorder_task(
        &self,
        board: &Board,
        column: &ColumnId,
        index: usize,
        direction: Direction,
    ) -> Result<Board> {
        let Some(current) = board.column(column) else {
            trace!(%column, "reorder task: column not found");
            return Ok(board.clone());
        };
        if index >= current.len() {
            return Err(KanbanError::index_out_of_range(
                column.as_str(),
                index,
                current.len(),
            ));
        }

        let neighbour = match direction {
            Direction::Up if index > 0 => index - 1,
            Direction::Down if index + 1 < current.len() => index + 1,
            _ => {
                trace!(%column, index, %direction, "reorder task: already at boundary");
                return Ok(board.clone());
            }
        };

        let mut next = board.clone();
        if let Some(target) = next.column_mut(column) {
            target.cards.swap(index, neighbour);
        }
        Ok(next)
    }
}
