//! Kanban CLI - a kanban board in the terminal.
//!
//! Commands:
//! - `kanban show [--search TEXT] [--column C] [--json]`: Print the board
//! - `kanban add-column TITLE`: Append a column
//! - `kanban delete-column C`: Delete a column and its tasks
//! - `kanban add-task C TITLE`: Append a task to a column
//! - `kanban delete-task C INDEX`: Delete a task
//! - `kanban move SRC I DST J`: Move a task
//! - `kanban up C I` / `kanban down C I`: Swap a task with its neighbour
//! - `kanban reset`: Restore the default board
//! - `kanban shell`: Interactive session with undo/redo
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use std::io;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kanban_cli::render::{render_board, status_line};
use kanban_cli::run::{execute, open_session, show};
use kanban_cli::shell::run_shell;
use kanban_cli::{Cli, CliConfig, Commands};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("kanban_engine=debug,kanban_cli=debug"),
        _ => EnvFilter::new("kanban_engine=trace,kanban_cli=trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();

    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.config {
        if !path.exists() {
            bail!("config file not found: {}", path.display());
        }
    }
    let config = CliConfig::load(cli.config.as_deref())?.with_data_dir(cli.data_dir);
    let mut session = open_session(&config);

    match cli.command {
        Commands::Show {
            search,
            column,
            json,
        } => {
            println!(
                "{}",
                show(&session, search.as_deref(), column.as_deref(), json)?
            );
        }
        Commands::Board(command) => {
            if !execute(&mut session, &command)? {
                eprintln!("nothing changed");
            }
            println!("{}", render_board(session.board()));
        }
        Commands::Shell => {
            let stdin = io::stdin();
            run_shell(&mut session, stdin.lock(), io::stdout())?;
            eprintln!("{}", status_line(&session));
        }
    }
    Ok(())
}
