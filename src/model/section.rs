//! Section types.

use super::Row;
use serde::Serialize;

/// A titled group of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Title rendered as a full-width title row (none for untitled blocks)
    pub title: Option<String>,

    /// Content rows, title row excluded
    pub rows: Vec<Row>,
}

impl Section {
    /// Get the number of content rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the section has no content rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        if let Some(ref title) = self.title {
            lines.push(title.clone());
        }
        lines.extend(
            self.rows
                .iter()
                .filter(|r| !r.is_spacer())
                .map(|r| r.plain_text()),
        );
        lines.join("\n")
    }
}
