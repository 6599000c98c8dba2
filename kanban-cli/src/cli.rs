//! CLI definition for the kanban command-line interface.
//!
//! Only depends on `clap` and `std`. Shell lines are parsed with the same
//! board commands as the top-level invocation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kanban - a board of columns and tasks in your terminal.
///
/// The board is stored as JSON under the data directory and reloaded on
/// every invocation. Undo and redo are available inside `kanban shell`.
#[derive(Parser, Debug)]
#[command(name = "kanban")]
#[command(version)]
#[command(about = "Kanban board in the terminal")]
#[command(
    long_about = "Organize tasks into named columns, move and reorder them, and filter what \
    you see.\n\n\
    Columns can be named by id or by title (case-insensitive). Task positions are \
    zero-based.\n\n\
    Environment variables:\n  \
    KANBAN_DATA_DIR            Directory holding the board (default .kanban)\n  \
    KANBAN_STORAGE_KEY         Storage key / file name (default kanbanBoard)\n  \
    KANBAN_HISTORY_LIMIT       Maximum undo depth in the shell\n  \
    KANBAN_PERSIST_NAVIGATION  Save after undo/redo (default true)"
)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding the board
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (default ./kanban.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the board
    Show {
        /// Only show tasks whose title contains this text
        #[arg(long)]
        search: Option<String>,
        /// Only show this column
        #[arg(long)]
        column: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    #[command(flatten)]
    Board(BoardCommand),

    /// Start an interactive session with undo and redo
    Shell,
}

/// Commands that change the board
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    /// Append a new, empty column
    AddColumn {
        /// Column title
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Delete a column and all of its tasks
    DeleteColumn {
        /// Column id or title
        column: String,
    },

    /// Append a task to a column
    AddTask {
        /// Column id or title
        column: String,
        /// Task title
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Delete the task at a position
    DeleteTask {
        /// Column id or title
        column: String,
        /// Task position in the column
        index: usize,
    },

    /// Move a task to another column or position
    Move {
        /// Source column id or title
        source: String,
        /// Task position in the source column
        source_index: usize,
        /// Destination column id or title
        destination: String,
        /// Position in the destination column
        destination_index: usize,
    },

    /// Swap a task with the one above it
    Up {
        /// Column id or title
        column: String,
        /// Task position in the column
        index: usize,
    },

    /// Swap a task with the one below it
    Down {
        /// Column id or title
        column: String,
        /// Task position in the column
        index: usize,
    },

    /// Replace the board with the default one
    Reset,
}

/// One line typed into `kanban shell`
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
#[command(name = "kanban shell")]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    #[command(flatten)]
    Board(BoardCommand),

    /// Print the board through the current filter
    Show,

    /// Revert the last change
    Undo,

    /// Re-apply the last undone change
    Redo,

    /// Filter tasks by title; no text clears the search
    Search {
        text: Vec<String>,
    },

    /// Show a single column; no argument shows all columns
    Filter {
        column: Option<String>,
    },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}
