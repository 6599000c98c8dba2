//! Board rendering for the terminal.
//!
//! One table column per board column; each row holds the task at that
//! position, prefixed with its zero-based index.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use kanban_engine::{Board, KanbanSession};

/// Render a board as a table
pub fn render_board(board: &Board) -> String {
    if board.is_empty() {
        return "(no columns)".to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        board
            .columns()
            .map(|c| format!("{} ({})", c.title, short_id(c.id.as_str()))),
    );

    let depth = board.columns().map(|c| c.len()).max().unwrap_or(0);
    for row in 0..depth {
        table.add_row(board.columns().map(|c| {
            c.cards
                .get(row)
                .map(|t| format!("{}. {}", row, t.title))
                .unwrap_or_default()
        }));
    }

    table.to_string()
}

/// One-line summary of filter and history state
pub fn status_line(session: &KanbanSession) -> String {
    let filter = session.filter();
    let mut parts = Vec::new();
    if !filter.search.is_empty() {
        parts.push(format!("search: \"{}\"", filter.search));
    }
    if let Some(column) = &filter.column {
        parts.push(format!("column: {}", column));
    }
    parts.push(format!("undo: {}", availability(session.can_undo())));
    parts.push(format!("redo: {}", availability(session.can_redo())));
    parts.join(" | ")
}

fn availability(available: bool) -> &'static str {
    if available {
        "yes"
    } else {
        "no"
    }
}

/// Shorten a generated column id for display
fn short_id(id: &str) -> String {
    if id.chars().count() <= 12 {
        id.to_string()
    } else {
        let tail: String = id.chars().skip(id.chars().count() - 6).collect();
        format!("…{}", tail)
    }
}
