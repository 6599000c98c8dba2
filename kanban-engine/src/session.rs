//! KanbanSession - the board as owned by one UI session
//!
//! Holds the board store, the history, the persistence adapter and the
//! current filter. Every input event is a method here; mutations go through
//! the board store, are committed to history and then saved.

use crate::config::BoardConfig;
use crate::error::Result;
use crate::filter::Filter;
use crate::history::History;
use crate::persistence::{KeyValueStore, Persistence};
use crate::store::BoardStore;
use crate::types::{Board, ColumnId, Direction, Operation, TaskId};
use tracing::{debug, info, trace, warn};

/// One user's editing session over a persisted board
#[derive(Debug)]
pub struct KanbanSession {
    store: BoardStore,
    history: History,
    persistence: Persistence,
    filter: Filter,
    config: BoardConfig,
}

impl KanbanSession {
    /// Open a session over `kv`, loading the stored board or falling back to
    /// the default one
    pub fn open(config: BoardConfig, kv: impl KeyValueStore + 'static) -> Self {
        let persistence = Persistence::new(kv).with_key(config.storage_key.clone());
        Self::open_with(config, BoardStore::new(), persistence)
    }

    /// Open a session with explicit collaborators.
    ///
    /// The starting board is saved straight away so storage always holds the
    /// ids the session is using. When the backend cannot be read the session
    /// starts from the default board without saving it, leaving whatever is
    /// stored untouched.
    pub fn open_with(config: BoardConfig, store: BoardStore, persistence: Persistence) -> Self {
        let initial = match persistence.load(&store) {
            Ok(Some(board)) => {
                persistence.save(&board);
                board
            }
            Ok(None) => {
                info!(key = persistence.key(), "starting from the default board");
                let board = store.default_board();
                persistence.save(&board);
                board
            }
            Err(error) => {
                warn!(
                    key = persistence.key(),
                    %error,
                    "storage unreadable, starting from the default board without saving"
                );
                store.default_board()
            }
        };

        let history = History::new(initial).with_limit(config.history_limit);
        Self {
            store,
            history,
            persistence,
            filter: Filter::default(),
            config,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a column. Returns whether the board changed.
    pub fn add_column(&mut self, title: &str) -> bool {
        let next = self.store.add_column(self.board(), title);
        self.commit_if_changed("add column", next)
    }

    /// Delete a column and its tasks. Returns whether the board changed.
    pub fn delete_column(&mut self, column: &ColumnId) -> bool {
        let next = self.store.delete_column(self.board(), column);
        self.commit_if_changed("delete column", next)
    }

    /// Add a task to the end of a column. Returns whether the board changed.
    pub fn add_task(&mut self, column: &ColumnId, title: &str) -> bool {
        let next = self.store.add_task(self.board(), column, title);
        self.commit_if_changed("add task", next)
    }

    /// Delete a task. Returns whether the board changed.
    pub fn delete_task(&mut self, column: &ColumnId, task: &TaskId) -> bool {
        let next = self.store.delete_task(self.board(), column, task);
        self.commit_if_changed("delete task", next)
    }

    /// Handle a completed drag. Returns whether the board changed.
    pub fn move_task(
        &mut self,
        source: &ColumnId,
        source_index: usize,
        destination: &ColumnId,
        destination_index: usize,
    ) -> Result<bool> {
        let next = self.store.move_task(
            self.board(),
            source,
            source_index,
            destination,
            destination_index,
        )?;
        Ok(self.commit_if_changed("move task", next))
    }

    /// Handle an up/down key on a task. Returns whether the board changed.
    pub fn reorder_task(
        &mut self,
        column: &ColumnId,
        index: usize,
        direction: Direction,
    ) -> Result<bool> {
        let next = self
            .store
            .reorder_task(self.board(), column, index, direction)?;
        Ok(self.commit_if_changed("reorder task", next))
    }

    /// Apply an operation value. Returns whether the board changed.
    pub fn apply(&mut self, operation: &Operation) -> Result<bool> {
        let next = self.store.apply(self.board(), operation)?;
        Ok(self.commit_if_changed(operation.op_string(), next))
    }

    // =========================================================================
    // History navigation
    // =========================================================================

    /// Step back one change. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            debug!(undo = self.history.undo_depth(), redo = self.history.redo_depth(), "undo");
            self.persist_navigation();
        }
        moved
    }

    /// Re-apply one undone change. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            debug!(undo = self.history.undo_depth(), redo = self.history.redo_depth(), "redo");
            self.persist_navigation();
        }
        moved
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.search = text.into();
    }

    /// Show a single column, or every column with `None`
    pub fn set_column_filter(&mut self, column: Option<ColumnId>) {
        self.filter.column = column;
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// The board to render: the current snapshot through the filter
    pub fn view(&self) -> Board {
        self.filter.apply(self.board())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The current, unfiltered board
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Replace the board with a fresh default one, as an undoable change
    pub fn reset(&mut self) -> bool {
        let next = self.store.default_board();
        self.commit_if_changed("reset board", next)
    }

    fn commit_if_changed(&mut self, op: &str, next: Board) -> bool {
        if &next == self.board() {
            trace!(op, "operation left the board unchanged");
            return false;
        }
        self.history.commit(next);
        self.persistence.save(self.history.current());
        debug!(
            op,
            columns = self.board().len(),
            tasks = self.board().task_count(),
            "committed"
        );
        true
    }

    fn persist_navigation(&self) {
        if self.config.persist_navigation {
            self.persistence.save(self.history.current());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KanbanError;
    use crate::persistence::MemoryStore;
    use crate::store::test_support::{titles, SequentialIds};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn session_with(config: BoardConfig) -> (Arc<MemoryStore>, KanbanSession) {
        let memory = Arc::new(MemoryStore::new());
        let persistence =
            Persistence::new(Arc::clone(&memory)).with_key(config.storage_key.clone());
        let store = BoardStore::with_generator(SequentialIds::default());
        let session = KanbanSession::open_with(config, store, persistence);
        (memory, session)
    }

    /// Memory-backed store whose reads can be made to fail
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_reads: AtomicBool,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(KanbanError::store(key, "backend unavailable"));
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.inner.set(key, value)
        }
    }

    fn stored(memory: &MemoryStore) -> Board {
        let blob = memory.get("kanbanBoard").unwrap().unwrap();
        serde_json::from_str(&blob).unwrap()
    }

    #[test]
    fn test_open_saves_initial_board() {
        let (memory, session) = session_with(BoardConfig::default());
        assert_eq!(&stored(&memory), session.board());
        assert!(!session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn test_rejected_mutation_is_not_committed() {
        let (_memory, mut session) = session_with(BoardConfig::default());

        assert!(!session.add_column("   "));
        assert!(!session.add_task(&"todo".into(), ""));
        assert!(!session.delete_column(&"ghost".into()));
        assert!(!session.delete_task(&"todo".into(), &"ghost".into()));

        assert!(!session.can_undo());
    }

    #[test]
    fn test_commit_saves() {
        let (memory, mut session) = session_with(BoardConfig::default());

        assert!(session.add_task(&"inProgress".into(), "Task 5"));

        assert_eq!(titles(&stored(&memory), "inProgress"), vec!["Task 3", "Task 5"]);
    }

    #[test]
    fn test_navigation_persisted_by_default() {
        let (memory, mut session) = session_with(BoardConfig::default());
        session.add_task(&"inProgress".into(), "Task 5");

        session.undo();
        assert_eq!(titles(&stored(&memory), "inProgress"), vec!["Task 3"]);

        session.redo();
        assert_eq!(titles(&stored(&memory), "inProgress"), vec!["Task 3", "Task 5"]);
    }

    #[test]
    fn test_navigation_not_persisted_when_disabled() {
        let config = BoardConfig {
            persist_navigation: false,
            ..BoardConfig::default()
        };
        let (memory, mut session) = session_with(config);
        session.add_task(&"inProgress".into(), "Task 5");

        session.undo();

        assert_eq!(titles(session.board(), "inProgress"), vec!["Task 3"]);
        assert_eq!(titles(&stored(&memory), "inProgress"), vec!["Task 3", "Task 5"]);
    }

    #[test]
    fn test_move_error_leaves_session_untouched() {
        let (_memory, mut session) = session_with(BoardConfig::default());
        let before = session.board().clone();

        let result = session.move_task(&"done".into(), 3, &"todo".into(), 0);

        assert!(result.is_err());
        assert_eq!(session.board(), &before);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_view_applies_filter() {
        let (_memory, mut session) = session_with(BoardConfig::default());

        session.set_search_text("task 1");
        assert_eq!(session.view().task_count(), 1);

        session.set_column_filter(Some("done".into()));
        let view = session.view();
        assert_eq!(view.len(), 1);
        assert_eq!(view.task_count(), 0);

        // The filter never reaches the board itself
        assert_eq!(session.board().task_count(), 4);

        session.set_search_text("");
        session.set_column_filter(None);
        assert_eq!(&session.view(), session.board());
    }

    #[test]
    fn test_apply_operation_value() {
        let (_memory, mut session) = session_with(BoardConfig::default());

        let changed = session
            .apply(&Operation::MoveTask {
                source: "todo".into(),
                source_index: 0,
                destination: "done".into(),
                destination_index: 1,
            })
            .unwrap();

        assert!(changed);
        assert_eq!(titles(session.board(), "done"), vec!["Task 4", "Task 1"]);
    }

    #[test]
    fn test_reset_is_undoable() {
        let (_memory, mut session) = session_with(BoardConfig::default());
        session.delete_column(&"done".into());

        assert!(session.reset());
        assert_eq!(session.board().len(), 3);

        session.undo();
        assert_eq!(session.board().len(), 2);
    }

    #[test]
    fn test_history_limit_from_config() {
        let config = BoardConfig {
            history_limit: Some(1),
            ..BoardConfig::default()
        };
        let (_memory, mut session) = session_with(config);
        session.add_column("One");
        session.add_column("Two");

        assert!(session.undo());
        assert!(!session.undo());
        assert_eq!(session.board().len(), 4);
    }

    #[test]
    fn test_read_failure_does_not_overwrite_stored_board() {
        let flaky = Arc::new(FlakyStore::default());
        let open = |kv: Arc<FlakyStore>| {
            let persistence = Persistence::new(kv);
            let store = BoardStore::with_generator(SequentialIds::default());
            KanbanSession::open_with(BoardConfig::default(), store, persistence)
        };

        let mut session = open(Arc::clone(&flaky));
        assert!(session.add_column("Precious"));
        assert_eq!(stored(&flaky.inner).len(), 4);

        flaky.fail_reads.store(true, Ordering::SeqCst);
        let unreadable = open(Arc::clone(&flaky));
        assert_eq!(unreadable.board().len(), 3);
        assert_eq!(stored(&flaky.inner).len(), 4);

        flaky.fail_reads.store(false, Ordering::SeqCst);
        let recovered = open(Arc::clone(&flaky));
        assert_eq!(recovered.board().len(), 4);
        assert!(recovered.board().resolve_column("Precious").is_some());
    }
}
