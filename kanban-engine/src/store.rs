//! BoardStore - pure snapshot-in, snapshot-out board mutations
//!
//! Every operation takes a board by reference and returns a new snapshot.
//! The argument is never modified. Rejected input (empty titles) and
//! references to missing columns or tasks return an unchanged copy; only
//! out-of-range indices are reported as errors.
//!
//! The operations themselves live next to their nouns in [`crate::column`]
//! and [`crate::task`].

use crate::error::Result;
use crate::id_gen::{IdGenerator, UlidGenerator};
use crate::types::{Board, Column, ColumnId, Operation, Task, TaskId};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Owner of the id source; all board mutations go through here
#[derive(Clone)]
pub struct BoardStore {
    ids: Arc<dyn IdGenerator>,
}

impl BoardStore {
    /// Create a store that mints ULID identifiers
    pub fn new() -> Self {
        Self::with_generator(UlidGenerator)
    }

    /// Create a store with a custom id source
    pub fn with_generator(ids: impl IdGenerator + 'static) -> Self {
        Self { ids: Arc::new(ids) }
    }

    pub(crate) fn next_column_id(&self) -> ColumnId {
        ColumnId::from_string(self.ids.generate())
    }

    pub(crate) fn next_task_id(&self) -> TaskId {
        TaskId::from_string(self.ids.generate())
    }

    /// The board shown when nothing has been persisted yet
    pub fn default_board(&self) -> Board {
        Board::from_columns([
            Column::new("todo", "To Do").with_cards(vec![
                Task::new(self.next_task_id(), "Task 1"),
                Task::new(self.next_task_id(), "Task 2"),
            ]),
            Column::new("inProgress", "In Progress")
                .with_cards(vec![Task::new(self.next_task_id(), "Task 3")]),
            Column::new("done", "Done").with_cards(vec![Task::new(self.next_task_id(), "Task 4")]),
        ])
    }

    /// Copy of `board` with every task given a fresh id.
    ///
    /// Column ids, titles and all ordering are kept.
    pub fn regenerate_task_ids(&self, board: &Board) -> Board {
        Board::from_columns(board.columns().map(|column| {
            let cards = column
                .cards
                .iter()
                .map(|task| Task::new(self.next_task_id(), task.title.clone()))
                .collect();
            Column::new(column.id.clone(), column.title.clone()).with_cards(cards)
        }))
    }

    /// Apply an operation value to a board
    pub fn apply(&self, board: &Board, operation: &Operation) -> Result<Board> {
        trace!(op = operation.op_string(), "applying operation");
        match operation {
            Operation::AddColumn { title } => Ok(self.add_column(board, title)),
            Operation::DeleteColumn { column } => Ok(self.delete_column(board, column)),
            Operation::AddTask { column, title } => Ok(self.add_task(board, column, title)),
            Operation::DeleteTask { column, task } => Ok(self.delete_task(board, column, task)),
            Operation::MoveTask {
                source,
                source_index,
                destination,
                destination_index,
            } => self.move_task(
                board,
                source,
                *source_index,
                destination,
                *destination_index,
            ),
            Operation::ReorderTask {
                column,
                index,
                direction,
            } => self.reorder_task(board, column, *index, *direction),
        }
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardStore").finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{store, titles};
    use super::*;
    use crate::types::Direction;
    use std::collections::HashSet;

    #[test]
    fn test_default_board() {
        let board = store().default_board();
        let ids: Vec<&str> = board.column_ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["todo", "inProgress", "done"]);
        assert_eq!(titles(&board, "todo"), vec!["Task 1", "Task 2"]);
        assert_eq!(titles(&board, "inProgress"), vec!["Task 3"]);
        assert_eq!(titles(&board, "done"), vec!["Task 4"]);
    }

    #[test]
    fn test_regenerate_task_ids() {
        let store = store();
        let board = Board::from_columns([
            Column::new("a", "A").with_cards(vec![Task::new("dup", "One"), Task::new("dup", "Two")]),
            Column::new("b", "B").with_cards(vec![Task::new("dup", "Three")]),
        ]);

        let fresh = store.regenerate_task_ids(&board);

        let ids: HashSet<&str> = fresh
            .columns()
            .flat_map(|c| c.cards.iter().map(|t| t.id.as_str()))
            .collect();
        assert_eq!(ids.len(), 3);
        assert!(!ids.contains("dup"));
        assert_eq!(titles(&fresh, "a"), vec!["One", "Two"]);
        assert_eq!(titles(&fresh, "b"), vec!["Three"]);
        // Source board untouched
        assert_eq!(board.column(&ColumnId::from("a")).unwrap().cards[0].id.as_str(), "dup");
    }

    #[test]
    fn test_apply_dispatches() {
        let store = store();
        let board = store.default_board();

        let moved = store
            .apply(
                &board,
                &Operation::ReorderTask {
                    column: "todo".into(),
                    index: 0,
                    direction: Direction::Down,
                },
            )
            .unwrap();
        assert_eq!(titles(&moved, "todo"), vec!["Task 2", "Task 1"]);

        let added = store
            .apply(&moved, &Operation::AddColumn { title: "Blocked".into() })
            .unwrap();
        assert_eq!(added.len(), 4);
    }
}
