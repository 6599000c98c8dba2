//! Translate parsed commands into session events

use anyhow::Result;
use kanban_engine::{ColumnId, Direction, FileStore, Filter, KanbanSession, TaskId};
use tracing::debug;

use crate::cli::BoardCommand;
use crate::config::CliConfig;
use crate::render::render_board;

/// Open the session described by `config`
pub fn open_session(config: &CliConfig) -> KanbanSession {
    debug!(data_dir = %config.data_dir.display(), "opening board");
    KanbanSession::open(config.board_config(), FileStore::new(&config.data_dir))
}

/// Resolve a column given by id or title against the current board
pub fn resolve_column(session: &KanbanSession, reference: &str) -> Result<ColumnId> {
    Ok(session.board().lookup_column(reference)?.clone())
}

fn task_at(session: &KanbanSession, column: &ColumnId, index: usize) -> Result<TaskId> {
    Ok(session.board().task_at(column, index)?.clone())
}

/// Render the board for `kanban show`, as a table or as pretty JSON.
///
/// The filter applies to this output only; the session keeps its own.
pub fn show(
    session: &KanbanSession,
    search: Option<&str>,
    column: Option<&str>,
    json: bool,
) -> Result<String> {
    let mut filter = Filter::new().with_search(search.unwrap_or_default());
    if let Some(reference) = column {
        filter = filter.with_column(resolve_column(session, reference)?);
    }
    let view = filter.apply(session.board());
    if json {
        Ok(serde_json::to_string_pretty(&view)?)
    } else {
        Ok(render_board(&view))
    }
}

/// Run one board command. Returns whether the board changed.
pub fn execute(session: &mut KanbanSession, command: &BoardCommand) -> Result<bool> {
    let changed = match command {
        BoardCommand::AddColumn { title } => session.add_column(&title.join(" ")),
        BoardCommand::DeleteColumn { column } => {
            let column = resolve_column(session, column)?;
            session.delete_column(&column)
        }
        BoardCommand::AddTask { column, title } => {
            let column = resolve_column(session, column)?;
            session.add_task(&column, &title.join(" "))
        }
        BoardCommand::DeleteTask { column, index } => {
            let column = resolve_column(session, column)?;
            let task = task_at(session, &column, *index)?;
            session.delete_task(&column, &task)
        }
        BoardCommand::Move {
            source,
            source_index,
            destination,
            destination_index,
        } => {
            let source = resolve_column(session, source)?;
            let destination = resolve_column(session, destination)?;
            session.move_task(&source, *source_index, &destination, *destination_index)?
        }
        BoardCommand::Up { column, index } => {
            let column = resolve_column(session, column)?;
            session.reorder_task(&column, *index, Direction::Up)?
        }
        BoardCommand::Down { column, index } => {
            let column = resolve_column(session, column)?;
            session.reorder_task(&column, *index, Direction::Down)?
        }
        BoardCommand::Reset => session.reset(),
    };
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_engine::{BoardConfig, MemoryStore};

    fn session() -> KanbanSession {
        KanbanSession::open(BoardConfig::default(), MemoryStore::new())
    }

    fn titles(session: &KanbanSession, column: &str) -> Vec<String> {
        session
            .board()
            .column(&ColumnId::from(column))
            .map(|c| c.cards.iter().map(|t| t.title.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_execute_add_task_by_title() {
        let mut session = session();

        let changed = execute(
            &mut session,
            &BoardCommand::AddTask {
                column: "in progress".into(),
                title: vec!["Task".into(), "5".into()],
            },
        )
        .unwrap();

        assert!(changed);
        assert_eq!(titles(&session, "inProgress"), vec!["Task 3", "Task 5"]);
    }

    #[test]
    fn test_execute_delete_task_by_index() {
        let mut session = session();

        execute(
            &mut session,
            &BoardCommand::DeleteTask {
                column: "todo".into(),
                index: 1,
            },
        )
        .unwrap();

        assert_eq!(titles(&session, "todo"), vec!["Task 1"]);
    }

    #[test]
    fn test_execute_unknown_column() {
        let mut session = session();
        let err = execute(
            &mut session,
            &BoardCommand::DeleteColumn {
                column: "Blocked".into(),
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("Blocked"));
    }

    #[test]
    fn test_execute_move_out_of_range() {
        let mut session = session();
        let result = execute(
            &mut session,
            &BoardCommand::Move {
                source: "done".into(),
                source_index: 7,
                destination: "todo".into(),
                destination_index: 0,
            },
        );
        assert!(result.is_err());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_execute_blank_column_title_unchanged() {
        let mut session = session();
        let changed = execute(
            &mut session,
            &BoardCommand::AddColumn {
                title: vec!["  ".into()],
            },
        )
        .unwrap();
        assert!(!changed);
    }

    #[test]
    fn test_show_table_with_search() {
        let session = session();

        let out = show(&session, Some("task 2"), None, false).unwrap();

        assert!(out.contains("0. Task 2"));
        assert!(!out.contains("Task 1"));
        assert!(out.contains("Done (done)"));
    }

    #[test]
    fn test_show_json_single_column() {
        let session = session();

        let out = show(&session, None, Some("In Progress"), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        let columns = value.as_object().unwrap();
        assert_eq!(columns.len(), 1);
        assert_eq!(value["inProgress"]["cards"][0]["title"], "Task 3");
        assert!(session.filter().column.is_none());
    }

    #[test]
    fn test_show_unknown_column() {
        let session = session();
        let err = show(&session, None, Some("Blocked"), false).unwrap_err();
        assert!(err.to_string().contains("Blocked"));
    }
}
