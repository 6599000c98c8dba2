//! Core types for the kanban engine

mod board;
mod ids;
mod operation;

// Re-export all types
pub use board::{Board, Column, Task};
pub use ids::{ColumnId, TaskId};
pub use operation::{Direction, Operation};
