//! Row composition and span validation.

use crate::error::{CellPosition, ConfigurationError, LayoutError, Result};
use crate::model::{Cell, CellContent, Row, SpanTracker};
use log::trace;

use super::{ContentMap, ContentSpec, RowSpec};

/// Compose a single row against a grid of `column_count` columns.
///
/// The row is checked on its own, with no row spans carried in from above.
pub fn compose_row(spec: &RowSpec, column_count: usize, content: &ContentMap) -> Result<Row> {
    let mut composer = RowComposer::new(column_count)?;
    let row = composer.compose(spec, 0, 0, content)?;
    Ok(row)
}

/// Composes the rows of a section, tracking row spans between them.
#[derive(Debug, Clone)]
pub struct RowComposer {
    column_count: usize,
    tracker: SpanTracker,
}

impl RowComposer {
    /// Create a composer for a grid of `column_count` columns.
    pub fn new(column_count: usize) -> Result<Self> {
        if column_count == 0 {
            return Err(ConfigurationError::ColumnCount(column_count).into());
        }
        Ok(Self {
            column_count,
            tracker: SpanTracker::new(column_count),
        })
    }

    /// Grid column count.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Build and validate the next row of `section`.
    ///
    /// Non-spacer rows must cover exactly `column_count` columns, counting
    /// columns still covered by row spans from earlier rows. Spacer rows may
    /// cover fewer, never more.
    pub fn compose(
        &mut self,
        spec: &RowSpec,
        section: usize,
        row: usize,
        content: &ContentMap,
    ) -> Result<Row> {
        let carried = self.tracker.covered_count();
        let mut cells = Vec::with_capacity(spec.cells.len());
        let mut declared = 0usize;

        for (index, cell_spec) in spec.cells.iter().enumerate() {
            let at = CellPosition {
                section,
                row,
                cell: index,
            };
            let mut cell = Cell::new(
                resolve_content(&cell_spec.content, content),
                cell_spec.col_span,
                cell_spec.row_span,
                cell_spec.variant,
            )
            .map_err(|e| e.at(at))?;
            if let Some(align) = cell_spec.align {
                cell.align = align;
            }
            cell.emphasis = cell_spec.emphasis;

            let placement = self.tracker.place(
                cell.col_span as usize,
                cell.row_span as usize,
                row,
            );
            if let Some(column) = placement.overlap {
                return Err(LayoutError::MergedCellOverlap {
                    section,
                    row,
                    column,
                }
                .into());
            }
            // A spacer renders as one blank run and cannot hold a merge.
            if spec.is_spacer() && cell.row_span > 1 {
                return Err(LayoutError::SpacerRowSpan {
                    section,
                    row,
                    column: placement.start,
                }
                .into());
            }

            declared += cell.col_span as usize;
            cells.push(cell);
        }

        let actual = carried + declared;
        if actual > self.column_count {
            return Err(LayoutError::Surplus {
                section,
                row,
                expected: self.column_count,
                actual,
            }
            .into());
        }
        if actual < self.column_count && !spec.is_spacer() {
            return Err(LayoutError::Deficit {
                section,
                row,
                expected: self.column_count,
                actual,
            }
            .into());
        }

        self.tracker.end_row();
        trace!(
            "composed row {} of section {}: {} cells, {} carried",
            row,
            section,
            cells.len(),
            carried
        );

        Ok(Row {
            cells,
            kind: spec.kind,
            carried,
        })
    }

    /// Close the current section.
    ///
    /// Fails if a row span reaches past the last composed row.
    pub fn finish_section(&mut self, section: usize) -> Result<()> {
        let pending = self.tracker.pending();
        self.tracker.reset();
        match pending {
            Some((row, column)) => Err(LayoutError::RowSpanOverflow {
                section,
                row,
                column,
            }
            .into()),
            None => Ok(()),
        }
    }
}

fn resolve_content(spec: &ContentSpec, content: &ContentMap) -> CellContent {
    match spec {
        ContentSpec::Empty => CellContent::Empty,
        ContentSpec::Text(source) => CellContent::Text(content.resolve(source)),
        ContentSpec::Items(sources) => {
            CellContent::Items(sources.iter().map(|s| content.resolve(s)).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, SpanAxis};
    use crate::layout::{CellSpec, TextSource};
    use crate::model::RowKind;

    fn spans(spans: &[i32]) -> RowSpec {
        RowSpec::new(spans.iter().map(|&s| CellSpec::blank().cols(s)).collect())
    }

    #[test]
    fn test_exact_row() {
        let row = compose_row(&spans(&[2, 2, 2, 3]), 9, &ContentMap::new()).unwrap();
        assert_eq!(row.cell_count(), 4);
        assert_eq!(row.covered_width(), 9);
        assert_eq!(row.kind, RowKind::Body);
    }

    #[test]
    fn test_deficit() {
        let err = compose_row(&spans(&[1, 2, 1, 1, 1, 2]), 9, &ContentMap::new()).unwrap_err();
        match err {
            Error::Layout(layout) => {
                assert_eq!(layout.row(), 0);
                assert_eq!(layout.deficit(), Some(1));
                assert_eq!(layout.delta(), Some(-1));
            }
            other => panic!("expected layout error, got {other:?}"),
        }
    }

    #[test]
    fn test_surplus() {
        let err = compose_row(&spans(&[5, 5]), 9, &ContentMap::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::Layout(LayoutError::Surplus {
                expected: 9,
                actual: 10,
                ..
            })
        ));
    }

    #[test]
    fn test_spacer_may_underfill() {
        let spacer = RowSpec::spacer_width(4);
        let row = compose_row(&spacer, 9, &ContentMap::new()).unwrap();
        assert!(row.is_spacer());
        assert_eq!(row.covered_width(), 4);

        let overfull = RowSpec::spacer_width(10);
        assert!(compose_row(&overfull, 9, &ContentMap::new()).is_err());
    }

    #[test]
    fn test_zero_span_is_configuration_error() {
        let err = compose_row(&spans(&[0, 9]), 9, &ContentMap::new()).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::InvalidSpan {
                axis: SpanAxis::Column,
                value: 0,
                position: Some(CellPosition { cell: 0, .. }),
            })
        ));
    }

    #[test]
    fn test_zero_columns() {
        assert!(matches!(
            RowComposer::new(0),
            Err(Error::Configuration(ConfigurationError::ColumnCount(0)))
        ));
    }

    #[test]
    fn test_row_span_counts_toward_next_row() {
        let mut composer = RowComposer::new(9).unwrap();
        let content = ContentMap::new();
        let first = RowSpec::new(vec![
            CellSpec::header("INICIO").rows(2),
            CellSpec::blank().cols(2),
            CellSpec::blank().cols(4),
            CellSpec::blank(),
            CellSpec::blank(),
        ]);
        let second = spans(&[2, 4, 1, 1]);

        composer.compose(&first, 0, 0, &content).unwrap();
        let row = composer.compose(&second, 0, 1, &content).unwrap();
        assert_eq!(row.carried, 1);
        assert_eq!(row.declared_width(), 8);
        composer.finish_section(0).unwrap();
    }

    #[test]
    fn test_redeclared_merged_column() {
        let mut composer = RowComposer::new(3).unwrap();
        let content = ContentMap::new();
        let first = RowSpec::new(vec![
            CellSpec::blank(),
            CellSpec::blank().rows(2),
            CellSpec::blank(),
        ]);
        composer.compose(&first, 2, 0, &content).unwrap();

        let err = composer
            .compose(&spans(&[2, 1]), 2, 1, &content)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Layout(LayoutError::MergedCellOverlap {
                section: 2,
                row: 1,
                column: 1,
            })
        ));
    }

    #[test]
    fn test_row_span_overflow() {
        let mut composer = RowComposer::new(2).unwrap();
        let content = ContentMap::new();
        let row = RowSpec::new(vec![CellSpec::blank().rows(3), CellSpec::blank()]);
        composer.compose(&row, 1, 0, &content).unwrap();
        composer
            .compose(&spans(&[1]), 1, 1, &content)
            .unwrap();

        let err = composer.finish_section(1).unwrap_err();
        assert!(matches!(
            err,
            Error::Layout(LayoutError::RowSpanOverflow {
                section: 1,
                row: 0,
                column: 0,
            })
        ));
    }

    #[test]
    fn test_content_resolution() {
        let content = ContentMap::new().with("area", "Informática");
        let spec = RowSpec::new(vec![
            CellSpec::header("Área"),
            CellSpec::plain(TextSource::key("area")).cols(2),
        ]);
        let row = compose_row(&spec, 3, &content).unwrap();
        assert_eq!(row.plain_text(), "Área\tInformática");
    }
}
