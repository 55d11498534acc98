//! Row types.

use super::Cell;
use serde::{Deserialize, Serialize};

/// Row-level style tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    /// Ordinary content row
    #[default]
    Body,
    /// A row of column labels
    Header,
    /// Blank padding; may under-fill the grid
    Spacer,
}

/// A composed, validated row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Cells in declaration order
    pub cells: Vec<Cell>,

    /// Row style tag
    pub kind: RowKind,

    /// Columns covered by row spans from rows above
    pub carried: usize,
}

impl Row {
    /// Get the number of declared cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Sum of declared column spans.
    pub fn declared_width(&self) -> usize {
        self.cells.iter().map(|c| c.col_span as usize).sum()
    }

    /// Columns covered by this row, including carried row spans.
    pub fn covered_width(&self) -> usize {
        self.carried + self.declared_width()
    }

    /// Check if this is a spacer row.
    pub fn is_spacer(&self) -> bool {
        self.kind == RowKind::Spacer
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}
