//! Kanban board mutation engine
//!
//! This crate holds the state and rules of a kanban board: ordered columns
//! each owning an ordered list of tasks, the mutations a user can perform on
//! them, undo/redo over snapshots of the whole board, search filtering for
//! display, and persistence to any string key-value store.
//!
//! ## Overview
//!
//! - **Snapshots, not edits** - [`BoardStore`] operations take a [`Board`] and
//!   return a new one. Columns are shared between snapshots and copied on
//!   write, so history is cheap and snapshots never alias mutable state
//! - **Linear history** - [`History`] keeps undo and redo stacks; a new commit
//!   discards whatever was undone
//! - **Projections** - [`filter::project`] derives the visible board without
//!   touching the real one
//! - **Pluggable storage** - [`KeyValueStore`] is the only thing a host must
//!   provide; [`MemoryStore`] and [`FileStore`] ship with the crate
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_engine::{BoardConfig, ColumnId, KanbanSession, MemoryStore};
//!
//! let mut session = KanbanSession::open(BoardConfig::default(), MemoryStore::new());
//! let todo = ColumnId::from("todo");
//!
//! session.add_task(&todo, "Write release notes");
//! assert!(session.can_undo());
//!
//! session.undo();
//! assert_eq!(session.board().column(&todo).unwrap().len(), 2);
//! ```
//!
//! ## Storage Layout
//!
//! ```text
//! kanbanBoard = {
//!   "todo":       { "id": "todo",       "title": "To Do",       "cards": [{ "id": "...", "title": "Task 1" }, ...] },
//!   "inProgress": { "id": "inProgress", "title": "In Progress", "cards": [...] },
//!   "done":       { "id": "done",       "title": "Done",        "cards": [...] }
//! }
//! ```
//!
//! Key order is display order. Task ids are regenerated every time a board is
//! loaded.

mod config;
mod error;
pub mod filter;
mod history;
mod id_gen;
pub mod persistence;
mod session;
mod store;
pub mod types;

// Operation modules
mod column;
mod task;

pub use config::BoardConfig;
pub use error::{KanbanError, Result};
pub use filter::Filter;
pub use history::History;
pub use id_gen::{IdGenerator, UlidGenerator};
pub use persistence::{FileStore, KeyValueStore, MemoryStore, Persistence, DEFAULT_STORAGE_KEY};
pub use session::KanbanSession;
pub use store::BoardStore;

// Re-export commonly used types
pub use types::{Board, Column, ColumnId, Direction, Operation, Task, TaskId};
