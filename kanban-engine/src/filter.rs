//! Read-only projections of a board for display
//!
//! A projection is never committed to history or persisted.

use crate::types::{Board, Column, ColumnId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Search text plus an optional column selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub search: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<ColumnId>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restrict the view to a single column
    pub fn with_column(mut self, column: impl Into<ColumnId>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Whether applying this filter can hide anything
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.column.is_some()
    }

    /// Project `board` through this filter
    pub fn apply(&self, board: &Board) -> Board {
        project(board, &self.search, self.column.as_ref())
    }
}

/// Derive the visible board.
///
/// - With `selected` set, only that column is kept (none, if it no longer
///   exists); otherwise every column is kept in display order.
/// - Within each kept column, only tasks whose title contains `search`
///   case-insensitively remain, in order. Empty search keeps every task.
/// - The text filter never hides a column, even when it leaves it empty.
pub fn project(board: &Board, search: &str, selected: Option<&ColumnId>) -> Board {
    let needle = search.to_lowercase();
    board
        .shared_columns()
        .filter(|column| selected.is_none_or(|id| &column.id == id))
        .map(|column| {
            if needle.is_empty() {
                return Arc::clone(column);
            }
            let cards = column
                .cards
                .iter()
                .filter(|task| task.title.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            Arc::new(Column::new(column.id.clone(), column.title.clone()).with_cards(cards))
        })
        .collect()
}
