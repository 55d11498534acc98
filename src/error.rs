//! Error types for gridform library.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for gridform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid span values or column count.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Row spans do not fit the document grid.
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// A theme token is not a valid `#RRGGBB` color.
    #[error("Invalid theme color for {field}: {value:?}")]
    Theme {
        /// Name of the offending token
        field: &'static str,
        /// Value as supplied
        value: String,
    },

    /// Malformed layout, content, or theme input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error during rendering (HTML, Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Axis a span applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanAxis {
    /// `colSpan`
    Column,
    /// `rowSpan`
    Row,
}

impl fmt::Display for SpanAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanAxis::Column => f.write_str("column span"),
            SpanAxis::Row => f.write_str("row span"),
        }
    }
}

/// Where a cell sits in the document being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    /// Section index (0-based)
    pub section: usize,
    /// Row index within the section's content rows (0-based)
    pub row: usize,
    /// Cell index within the row (0-based, declared cells only)
    pub cell: usize,
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "section {}, row {}, cell {}",
            self.section, self.row, self.cell
        )
    }
}

/// Invalid configuration of a single cell or of the document grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A span was zero or negative.
    #[error("{axis} must be positive, got {value}{}", fmt_position(.position))]
    InvalidSpan {
        /// Which span was invalid
        axis: SpanAxis,
        /// Value as supplied
        value: i64,
        /// Location, when known
        position: Option<CellPosition>,
    },

    /// The document was declared with zero columns.
    #[error("column count must be positive, got {0}")]
    ColumnCount(usize),
}

impl ConfigurationError {
    /// Attach a cell position to a span error.
    pub fn at(self, at: CellPosition) -> Self {
        match self {
            ConfigurationError::InvalidSpan { axis, value, .. } => {
                ConfigurationError::InvalidSpan {
                    axis,
                    value,
                    position: Some(at),
                }
            }
            other => other,
        }
    }
}

fn fmt_position(position: &Option<CellPosition>) -> String {
    match position {
        Some(p) => format!(" ({})", p),
        None => String::new(),
    }
}

/// A row that does not fit the declared column count.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The row covers fewer columns than the document has.
    #[error("row {row} of section {section} covers {actual} of {expected} columns (deficit {})", .expected - .actual)]
    Deficit {
        /// Section index
        section: usize,
        /// Row index within the section
        row: usize,
        /// Document column count
        expected: usize,
        /// Columns covered by carried spans and declared cells
        actual: usize,
    },

    /// The row covers more columns than the document has.
    #[error("row {row} of section {section} covers {actual} of {expected} columns (surplus {})", .actual - .expected)]
    Surplus {
        /// Section index
        section: usize,
        /// Row index within the section
        row: usize,
        /// Document column count
        expected: usize,
        /// Columns covered by carried spans and declared cells
        actual: usize,
    },

    /// A declared cell lands on a column still covered by a row span above.
    #[error("row {row} of section {section} re-declares merged column {column}")]
    MergedCellOverlap {
        /// Section index
        section: usize,
        /// Row index within the section
        row: usize,
        /// Column that is already covered
        column: usize,
    },

    /// A cell in a spacer row declares a row span.
    #[error("spacer row {row} of section {section} declares a row span at column {column}")]
    SpacerRowSpan {
        /// Section index
        section: usize,
        /// Row index within the section
        row: usize,
        /// First column of the offending cell
        column: usize,
    },

    /// A row span reaches past the last row of its section.
    #[error("row span starting at row {row}, column {column} of section {section} runs past the end of the section")]
    RowSpanOverflow {
        /// Section index
        section: usize,
        /// Row the span starts on
        row: usize,
        /// Column the span starts on
        column: usize,
    },
}

impl LayoutError {
    /// Section index of the offending row.
    pub fn section(&self) -> usize {
        match self {
            LayoutError::Deficit { section, .. }
            | LayoutError::Surplus { section, .. }
            | LayoutError::MergedCellOverlap { section, .. }
            | LayoutError::SpacerRowSpan { section, .. }
            | LayoutError::RowSpanOverflow { section, .. } => *section,
        }
    }

    /// Row index of the offending row within its section.
    pub fn row(&self) -> usize {
        match self {
            LayoutError::Deficit { row, .. }
            | LayoutError::Surplus { row, .. }
            | LayoutError::MergedCellOverlap { row, .. }
            | LayoutError::SpacerRowSpan { row, .. }
            | LayoutError::RowSpanOverflow { row, .. } => *row,
        }
    }

    /// Signed span mismatch: negative for a deficit, positive for a surplus.
    pub fn delta(&self) -> Option<i64> {
        match self {
            LayoutError::Deficit {
                expected, actual, ..
            }
            | LayoutError::Surplus {
                expected, actual, ..
            } => Some(*actual as i64 - *expected as i64),
            _ => None,
        }
    }

    /// Missing columns, if this is a deficit.
    pub fn deficit(&self) -> Option<usize> {
        match self {
            LayoutError::Deficit {
                expected, actual, ..
            } => Some(expected - actual),
            _ => None,
        }
    }

    /// Extra columns, if this is a surplus.
    pub fn surplus(&self) -> Option<usize> {
        match self {
            LayoutError::Surplus {
                expected, actual, ..
            } => Some(actual - expected),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Layout(LayoutError::Deficit {
            section: 0,
            row: 2,
            expected: 9,
            actual: 8,
        });
        assert_eq!(
            err.to_string(),
            "Layout error: row 2 of section 0 covers 8 of 9 columns (deficit 1)"
        );

        let err = Error::Configuration(ConfigurationError::ColumnCount(0));
        assert_eq!(
            err.to_string(),
            "Configuration error: column count must be positive, got 0"
        );
    }

    #[test]
    fn test_span_error_position() {
        let err = ConfigurationError::InvalidSpan {
            axis: SpanAxis::Column,
            value: 0,
            position: None,
        };
        assert_eq!(err.to_string(), "column span must be positive, got 0");

        let err = err.at(CellPosition {
            section: 1,
            row: 3,
            cell: 2,
        });
        assert_eq!(
            err.to_string(),
            "column span must be positive, got 0 (section 1, row 3, cell 2)"
        );
    }

    #[test]
    fn test_layout_delta() {
        let deficit = LayoutError::Deficit {
            section: 0,
            row: 0,
            expected: 9,
            actual: 8,
        };
        assert_eq!(deficit.delta(), Some(-1));
        assert_eq!(deficit.deficit(), Some(1));
        assert_eq!(deficit.surplus(), None);

        let surplus = LayoutError::Surplus {
            section: 1,
            row: 4,
            expected: 9,
            actual: 11,
        };
        assert_eq!(surplus.delta(), Some(2));
        assert_eq!(surplus.surplus(), Some(2));
        assert_eq!(surplus.row(), 4);
        assert_eq!(surplus.section(), 1);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
