//! Document-level types.

use super::{Cell, Section, SpanTracker};
use serde::{Deserialize, Serialize};

/// A built, validated grid document.
///
/// Documents are immutable once built; change the layout or content and
/// build again. Only the layout builder produces them, so there is no
/// `Deserialize` impl.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Banner shown above all sections
    pub banner: Option<String>,

    /// Fixed number of grid columns
    pub column_count: usize,

    /// Sections in document order
    pub sections: Vec<Section>,
}

impl Document {
    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get the number of content rows across all sections.
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.row_count()).sum()
    }

    /// Get the number of declared cells across all sections.
    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// Iterate over every declared cell in document order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.sections
            .iter()
            .flat_map(|s| &s.rows)
            .flat_map(|r| &r.cells)
    }

    /// Check if the document has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Check if any cell spans more than one row or column.
    pub fn has_merged_cells(&self) -> bool {
        self.cells().any(|c| c.is_merged())
    }

    /// Expand a section into a `rows x column_count` grid of slots.
    ///
    /// Returns `None` when the section index is out of range.
    pub fn slots(&self, section: usize) -> Option<Vec<Vec<Slot<'_>>>> {
        let section = self.sections.get(section)?;
        let mut tracker = SpanTracker::new(self.column_count);
        let mut grid = Vec::with_capacity(section.rows.len());

        for (row_index, row) in section.rows.iter().enumerate() {
            let mut slots: Vec<Slot<'_>> = (0..self.column_count)
                .map(|column| match tracker.covering(column) {
                    Some((row, column)) => Slot::Covered { row, column },
                    None => Slot::Vacant,
                })
                .collect();

            // Spacer cells are never drawn as slots and never span rows.
            let cells = if row.is_spacer() { &[][..] } else { &row.cells[..] };
            for cell in cells {
                let placement =
                    tracker.place(cell.col_span as usize, cell.row_span as usize, row_index);
                let end = (placement.start + cell.col_span as usize).min(self.column_count);
                for column in placement.start..end {
                    slots[column] = if column == placement.start {
                        Slot::Origin(cell)
                    } else {
                        Slot::Covered {
                            row: row_index,
                            column: placement.start,
                        }
                    };
                }
            }

            tracker.end_row();
            grid.push(slots);
        }

        Some(grid)
    }

    /// Compute structural statistics.
    pub fn stats(&self) -> DocumentStats {
        let mut stats = DocumentStats {
            section_count: self.sections.len(),
            column_count: self.column_count,
            ..Default::default()
        };
        for row in self.sections.iter().flat_map(|s| &s.rows) {
            stats.row_count += 1;
            if row.is_spacer() {
                stats.spacer_row_count += 1;
                continue;
            }
            for cell in &row.cells {
                stats.cell_count += 1;
                if cell.is_merged() {
                    stats.merged_cell_count += 1;
                }
                if cell.content.is_empty() {
                    stats.blank_cell_count += 1;
                }
            }
        }
        stats
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        let mut parts = Vec::with_capacity(self.sections.len() + 1);
        if let Some(ref banner) = self.banner {
            parts.push(banner.clone());
        }
        parts.extend(self.sections.iter().map(|s| s.plain_text()));
        parts.join("\n\n")
    }
}

/// One grid position of an expanded section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<'a> {
    /// Top-left position of a declared cell
    Origin(&'a Cell),
    /// Position merged into the cell declared at `(row, column)`
    Covered {
        /// Row of the covering cell
        row: usize,
        /// First column of the covering cell
        column: usize,
    },
    /// Position left blank (spacer padding)
    Vacant,
}

/// Structural statistics of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of sections
    pub section_count: usize,

    /// Grid column count
    pub column_count: usize,

    /// Content rows, spacers included
    pub row_count: usize,

    /// Spacer rows
    pub spacer_row_count: usize,

    /// Declared cells outside spacer rows
    pub cell_count: usize,

    /// Cells spanning more than one row or column
    pub merged_cell_count: usize,

    /// Cells without visible content
    pub blank_cell_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Row, RowKind};

    fn sample() -> Document {
        let rows = vec![
            Row {
                cells: vec![
                    Cell::header("INICIO").row_span(2).unwrap(),
                    Cell::plain("Motivación").col_span(2).unwrap(),
                ],
                kind: RowKind::Body,
                carried: 0,
            },
            Row {
                cells: vec![Cell::plain("Propósito").col_span(2).unwrap()],
                kind: RowKind::Body,
                carried: 1,
            },
            Row {
                cells: vec![Cell::empty()],
                kind: RowKind::Spacer,
                carried: 0,
            },
        ];
        Document {
            banner: Some("SESIÓN DE APRENDIZAJE".to_string()),
            column_count: 3,
            sections: vec![Section {
                title: Some("III. MOMENTOS".to_string()),
                rows,
            }],
        }
    }

    #[test]
    fn test_counts() {
        let doc = sample();
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.row_count(), 3);
        assert_eq!(doc.cell_count(), 4);
        assert!(doc.has_merged_cells());
    }

    #[test]
    fn test_slots_expand_merges() {
        let doc = sample();
        let grid = doc.slots(0).unwrap();
        assert_eq!(grid.len(), 3);
        assert!(matches!(grid[0][0], Slot::Origin(c) if c.plain_text() == "INICIO"));
        assert!(matches!(grid[0][1], Slot::Origin(_)));
        assert_eq!(grid[0][2], Slot::Covered { row: 0, column: 1 });
        assert_eq!(grid[1][0], Slot::Covered { row: 0, column: 0 });
        assert!(matches!(grid[1][1], Slot::Origin(c) if c.plain_text() == "Propósito"));
        assert!(grid[2].iter().all(|s| *s == Slot::Vacant));
        assert!(doc.slots(1).is_none());
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.section_count, 1);
        assert_eq!(stats.row_count, 3);
        assert_eq!(stats.spacer_row_count, 1);
        assert_eq!(stats.cell_count, 3);
        assert_eq!(stats.merged_cell_count, 3);
        assert_eq!(stats.blank_cell_count, 0);
    }

    #[test]
    fn test_plain_text() {
        let text = sample().plain_text();
        assert!(text.starts_with("SESIÓN DE APRENDIZAJE"));
        assert!(text.contains("III. MOMENTOS"));
        assert!(text.contains("INICIO\tMotivación"));
    }
}
