//! Interactive session: one history for as long as the shell runs

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;
use kanban_engine::KanbanSession;
use tracing::{debug, warn};

use crate::cli::{ShellCommand, ShellLine};
use crate::render::{render_board, status_line};
use crate::run::{execute, resolve_column};

const PROMPT: &str = "kanban> ";

/// What the loop should do after a line
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Read commands from `input` until EOF or `quit`, writing the board after
/// every command that may have changed what is visible
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut KanbanSession,
    input: R,
    mut output: W,
) -> Result<()> {
    print_view(session, &mut output)?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if handle_line(session, &line, &mut output)? == Flow::Quit {
            break;
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}

fn handle_line<W: Write>(session: &mut KanbanSession, line: &str, output: &mut W) -> Result<Flow> {
    let words = match shell_words::split(line) {
        Ok(words) => words,
        Err(e) => {
            writeln!(output, "error: {}", e)?;
            return Ok(Flow::Continue);
        }
    };
    if words.is_empty() {
        return Ok(Flow::Continue);
    }

    let command = match ShellLine::try_parse_from(&words) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            write!(output, "{}", e.render())?;
            return Ok(Flow::Continue);
        }
    };
    debug!(?command, "shell command");

    match command {
        ShellCommand::Quit => return Ok(Flow::Quit),
        ShellCommand::Show => {}
        ShellCommand::Undo => {
            if !session.undo() {
                writeln!(output, "nothing to undo")?;
            }
        }
        ShellCommand::Redo => {
            if !session.redo() {
                writeln!(output, "nothing to redo")?;
            }
        }
        ShellCommand::Search { text } => session.set_search_text(text.join(" ")),
        ShellCommand::Filter { column: None } => session.set_column_filter(None),
        ShellCommand::Filter {
            column: Some(reference),
        } => match resolve_column(session, &reference) {
            Ok(column) => session.set_column_filter(Some(column)),
            Err(e) => {
                writeln!(output, "error: {}", e)?;
                return Ok(Flow::Continue);
            }
        },
        ShellCommand::Board(board_command) => match execute(session, &board_command) {
            Ok(true) => {}
            Ok(false) => writeln!(output, "nothing changed")?,
            Err(e) => {
                warn!(error = %e, "command failed");
                writeln!(output, "error: {}", e)?;
                return Ok(Flow::Continue);
            }
        },
    }

    print_view(session, output)?;
    Ok(Flow::Continue)
}

fn print_view<W: Write>(session: &KanbanSession, output: &mut W) -> Result<()> {
    writeln!(output, "{}", render_board(&session.view()))?;
    writeln!(output, "{}", status_line(session))?;
    Ok(())
}
