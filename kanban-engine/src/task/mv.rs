//! MoveTask operation (drag and drop)

use crate::error::{KanbanError, Result};
use crate::store::BoardStore;
use crate::types::{Board, ColumnId};
use tracing::trace;

impl BoardStore {
    /// Move the task at `source_index` of `source` so that it ends up at
    /// `destination_index` of `destination`.
    ///
    /// Source and destination may be the same column (reordering). The
    /// destination index is interpreted after the task has been removed from
    /// its source, so for a column of length `n` the valid destination
    /// indices are `0..=n` across columns and `0..n` within one column.
    ///
    /// Missing columns are a no-op. Indices outside those ranges fail with
    /// [`KanbanError::IndexOutOfRange`] and leave nothing changed.
    pub fn move_task(
        &self,
        board: &Board,
        source: &ColumnId,
        source_index: usize,
        destination: &ColumnId,
        destination_index: usize,
    ) -> Result<Board> {
        let (Some(from), Some(to)) = (board.column(source), board.column(destination)) else {
            trace!(%source, %destination, "move task: column not found");
            return Ok(board.clone());
        };

        if source_index >= from.len() {
            return Err(KanbanError::index_out_of_range(
                source.as_str(),
                source_index,
                from.len(),
            ));
        }

        let room = if source == destination {
            from.len() - 1
        } else {
            to.len()
        };
        if destination_index > room {
            return Err(KanbanError::index_out_of_range(
                destination.as_str(),
                destination_index,
                room,
            ));
        }
        if source == destination && source_index == destination_index {
            return Ok(board.clone());
        }

        let mut next = board.clone();
        let task = next
            .column_mut(source)
            .map(|column| column.cards.remove(source_index));
        if let (Some(task), Some(target)) = (task, next.column_mut(destination)) {
            target.cards.insert(destination_index, task);
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::KanbanError;
    use crate::store::test_support::{store, titles};
    use crate::types::ColumnId;

    #[test]
    fn test_move_task_between_columns() {
        let store = store();
        let board = store.default_board();

        let next = store
            .move_task(
                &board,
                &ColumnId::from("todo"),
                0,
                &ColumnId::from("inProgress"),
                1,
            )
            .unwrap();

        assert_eq!(titles(&next, "todo"), vec!["Task 2"]);
        assert_eq!(titles(&next, "inProgress"), vec!["Task 3", "Task 1"]);
        assert_eq!(next.task_count(), board.task_count());
    }

    #[test]
    fn test_move_task_keeps_identity() {
        let store = store();
        let board = store.default_board();
        let todo = ColumnId::from("todo");
        let done = ColumnId::from("done");
        let task_1 = board.column(&todo).unwrap().cards[0].clone();

        let next = store.move_task(&board, &todo, 0, &done, 0).unwrap();

        assert_eq!(next.column(&done).unwrap().cards[0], task_1);
        assert_eq!(next.find_task(&task_1.id), Some((&done, 0)));
    }

    #[test]
    fn test_move_task_within_column() {
        let store = store();
        let board = store.default_board();
        let todo = ColumnId::from("todo");

        let next = store.move_task(&board, &todo, 0, &todo, 1).unwrap();
        assert_eq!(titles(&next, "todo"), vec!["Task 2", "Task 1"]);
    }

    #[test]
    fn test_move_task_same_position_is_noop() {
        let store = store();
        let board = store.default_board();
        let todo = ColumnId::from("todo");

        assert_eq!(store.move_task(&board, &todo, 1, &todo, 1).unwrap(), board);
    }

    #[test]
    fn test_move_task_to_end_of_other_column() {
        let store = store();
        let board = store.default_board();

        let next = store
            .move_task(&board, &"todo".into(), 1, &"done".into(), 1)
            .unwrap();
        assert_eq!(titles(&next, "done"), vec!["Task 4", "Task 2"]);
    }

    #[test]
    fn test_move_task_missing_column_is_noop() {
        let store = store();
        let board = store.default_board();

        let next = store
            .move_task(&board, &"todo".into(), 0, &"ghost".into(), 0)
            .unwrap();
        assert_eq!(next, board);
    }

    #[test]
    fn test_move_task_out_of_range() {
        let store = store();
        let board = store.default_board();

        let result = store.move_task(&board, &"done".into(), 1, &"todo".into(), 0);
        assert!(matches!(
            result,
            Err(KanbanError::IndexOutOfRange { index: 1, len: 1, .. })
        ));

        let result = store.move_task(&board, &"todo".into(), 0, &"done".into(), 2);
        assert!(matches!(
            result,
            Err(KanbanError::IndexOutOfRange { index: 2, len: 1, .. })
        ));

        // Within one column the last slot is len - 1
        let result = store.move_task(&board, &"todo".into(), 0, &"todo".into(), 2);
        assert!(result.is_err());
    }
}
