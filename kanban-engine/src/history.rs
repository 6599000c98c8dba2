//! Undo/redo history of board snapshots
//!
//! The timeline is `undo_stack ++ [current] ++ reverse(redo_stack)`. Undo and
//! redo walk along it; a commit truncates everything after `current` and
//! appends the new snapshot.

use crate::types::Board;
use tracing::trace;

/// Current board plus the snapshots before and after it
#[derive(Debug, Clone)]
pub struct History {
    current: Board,
    undo_stack: Vec<Board>,
    redo_stack: Vec<Board>,
    limit: Option<usize>,
}

impl History {
    /// Start a history at `initial` with unbounded depth
    pub fn new(initial: Board) -> Self {
        Self {
            current: initial,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: None,
        }
    }

    /// Keep at most `limit` undo steps, dropping the oldest first.
    ///
    /// `None` keeps every step.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self.enforce_limit();
        self
    }

    /// The board as the user currently sees it (before filtering)
    pub fn current(&self) -> &Board {
        &self.current
    }

    /// Record `next` as the new current board.
    ///
    /// The previous board becomes the newest undo step and the redo stack is
    /// cleared.
    pub fn commit(&mut self, next: Board) {
        let previous = std::mem::replace(&mut self.current, next);
        self.undo_stack.push(previous);
        self.redo_stack.clear();
        self.enforce_limit();
        trace!(
            undo = self.undo_stack.len(),
            "committed snapshot, redo history cleared"
        );
    }

    /// Step back one snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        let undone = std::mem::replace(&mut self.current, previous);
        self.redo_stack.push(undone);
        true
    }

    /// Step forward one snapshot. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let redone = std::mem::replace(&mut self.current, next);
        self.undo_stack.push(redone);
        self.enforce_limit();
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undo steps available
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of redo steps available
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Every snapshot from oldest to newest, current included
    pub fn timeline(&self) -> Vec<&Board> {
        self.undo_stack
            .iter()
            .chain(std::iter::once(&self.current))
            .chain(self.redo_stack.iter().rev())
            .collect()
    }

    /// Index of `current` within [`History::timeline`]
    pub fn position(&self) -> usize {
        self.undo_stack.len()
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            if self.undo_stack.len() > limit {
                let excess = self.undo_stack.len() - limit;
                self.undo_stack.drain(..excess);
            }
        }
    }
}
