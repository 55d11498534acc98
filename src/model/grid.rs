//! Column occupancy tracking for merged cells.
//!
//! Cells are placed left to right. A cell with `row_span > 1` keeps its
//! columns covered for the following rows, and placement in those rows
//! skips covered columns. The same walk is used to validate layouts and to
//! expand rows into grid slots for rendering.

/// Result of placing one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// First column of the cell (may be `>= column_count` for overfull rows)
    pub start: usize,

    /// First column inside the cell's span that a row span above still covers
    pub overlap: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default)]
struct Carry {
    /// Rows still covered after the current one
    remaining: usize,
    /// Row the covering cell was declared on
    origin_row: usize,
    /// First column of the covering cell
    origin_column: usize,
}

/// Tracks which columns are covered by row spans from earlier rows.
#[derive(Debug, Clone)]
pub struct SpanTracker {
    carries: Vec<Carry>,
    staged: Vec<(usize, Carry)>,
    cursor: usize,
}

impl SpanTracker {
    /// Create a tracker for a grid of `column_count` columns.
    pub fn new(column_count: usize) -> Self {
        Self {
            carries: vec![Carry::default(); column_count],
            staged: Vec::new(),
            cursor: 0,
        }
    }

    /// Number of grid columns.
    pub fn column_count(&self) -> usize {
        self.carries.len()
    }

    /// Check if a column of the current row is covered from above.
    pub fn is_covered(&self, column: usize) -> bool {
        self.carries
            .get(column)
            .map(|c| c.remaining > 0)
            .unwrap_or(false)
    }

    /// Origin `(row, column)` of the span covering `column`, if any.
    pub fn covering(&self, column: usize) -> Option<(usize, usize)> {
        self.carries
            .get(column)
            .filter(|c| c.remaining > 0)
            .map(|c| (c.origin_row, c.origin_column))
    }

    /// Number of columns of the current row covered from above.
    pub fn covered_count(&self) -> usize {
        self.carries.iter().filter(|c| c.remaining > 0).count()
    }

    /// Place the next cell of the current row.
    pub fn place(&mut self, col_span: usize, row_span: usize, row: usize) -> Placement {
        while self.is_covered(self.cursor) {
            self.cursor += 1;
        }
        let start = self.cursor;
        let end = start + col_span;
        let overlap = (start..end.min(self.column_count())).find(|&c| self.is_covered(c));

        if row_span > 1 {
            for column in start..end.min(self.column_count()) {
                self.staged.push((
                    column,
                    Carry {
                        remaining: row_span - 1,
                        origin_row: row,
                        origin_column: start,
                    },
                ));
            }
        }

        self.cursor = end;
        Placement { start, overlap }
    }

    /// Finish the current row and move the carries down one row.
    pub fn end_row(&mut self) {
        for carry in &mut self.carries {
            carry.remaining = carry.remaining.saturating_sub(1);
        }
        for (column, carry) in self.staged.drain(..) {
            self.carries[column] = carry;
        }
        self.cursor = 0;
    }

    /// First span still open after the last row, as `(row, column)` of its origin.
    pub fn pending(&self) -> Option<(usize, usize)> {
        self.carries
            .iter()
            .find(|c| c.remaining > 0)
            .map(|c| (c.origin_row, c.origin_column))
    }

    /// Drop all carries.
    pub fn reset(&mut self) {
        self.carries.iter_mut().for_each(|c| *c = Carry::default());
        self.staged.clear();
        self.cursor = 0;
    }
}
