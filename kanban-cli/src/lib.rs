//! Kanban CLI - terminal front end for `kanban-engine`.
//!
//! Parses command lines and shell input into board events, hands them to a
//! [`kanban_engine::KanbanSession`], and renders the filtered board.

pub mod cli;
pub mod config;
pub mod render;
pub mod run;
pub mod shell;

pub use cli::{BoardCommand, Cli, Commands, ShellCommand, ShellLine};
pub use config::CliConfig;
