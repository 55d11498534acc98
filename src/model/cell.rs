//! Cell primitive.

use crate::error::{ConfigurationError, SpanAxis};
use serde::{Deserialize, Serialize};

/// Style role of a cell.
///
/// `Header` and `Title` are layers over `Plain`: renderers always apply the
/// plain styling first and then add the variant's own tokens on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Default cell styling
    #[default]
    Plain,
    /// Bold label on a tinted background
    Header,
    /// Centered section banner on a heavier background
    Title,
}

impl Variant {
    /// Whether the variant renders as a header cell (`<th>`).
    pub fn is_heading(self) -> bool {
        !matches!(self, Variant::Plain)
    }

    /// Alignment used when the cell does not set one.
    pub fn default_alignment(self) -> Alignment {
        match self {
            Variant::Title => Alignment::Center,
            _ => Alignment::Left,
        }
    }
}

/// Horizontal alignment of cell text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left aligned
    #[default]
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
}

impl Alignment {
    /// CSS `text-align` value.
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Extra text emphasis layered over the variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// No extra emphasis
    #[default]
    None,
    /// Semi-bold value text
    Strong,
    /// Italic, muted text marking a space the author fills in
    Placeholder,
}

/// Content of a cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CellContent {
    /// Blank filler cell
    #[default]
    Empty,
    /// A single run of text
    Text(String),
    /// Inline items spread evenly across the cell
    Items(Vec<String>),
}

impl CellContent {
    /// Create text content.
    pub fn text(text: impl Into<String>) -> Self {
        CellContent::Text(text.into())
    }

    /// Create a block of inline items.
    pub fn items<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        CellContent::Items(items.into_iter().map(Into::into).collect())
    }

    /// Plain text representation.
    pub fn plain_text(&self) -> String {
        match self {
            CellContent::Empty => String::new(),
            CellContent::Text(text) => text.clone(),
            CellContent::Items(items) => items.join(" "),
        }
    }

    /// Check if the content renders as blank.
    pub fn is_empty(&self) -> bool {
        match self {
            CellContent::Empty => true,
            CellContent::Text(text) => text.trim().is_empty(),
            CellContent::Items(items) => items.iter().all(|i| i.trim().is_empty()),
        }
    }
}

/// A single grid cell.
///
/// [`Cell::new`] and the span setters reject spans below 1. Cells are
/// serialized for output but never deserialized: load a
/// [`DocumentSpec`](crate::layout::DocumentSpec) and build it instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Cell content
    pub content: CellContent,

    /// Number of columns this cell spans
    pub col_span: u32,

    /// Number of rows this cell spans
    pub row_span: u32,

    /// Style role
    pub variant: Variant,

    /// Horizontal alignment
    pub align: Alignment,

    /// Extra emphasis
    pub emphasis: Emphasis,
}

impl Cell {
    /// Create a cell, validating the requested spans.
    ///
    /// Unset spans default to 1. Zero or negative spans are rejected and
    /// never clamped.
    pub fn new(
        content: CellContent,
        col_span: Option<i32>,
        row_span: Option<i32>,
        variant: Variant,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            content,
            col_span: check_span(SpanAxis::Column, col_span)?,
            row_span: check_span(SpanAxis::Row, row_span)?,
            variant,
            align: variant.default_alignment(),
            emphasis: Emphasis::None,
        })
    }

    /// Create a 1x1 plain text cell.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::single(CellContent::text(text), Variant::Plain)
    }

    /// Create a 1x1 header cell.
    pub fn header(text: impl Into<String>) -> Self {
        Self::single(CellContent::text(text), Variant::Header)
    }

    /// Create a 1x1 title cell.
    pub fn title(text: impl Into<String>) -> Self {
        Self::single(CellContent::text(text), Variant::Title)
    }

    /// Create a 1x1 blank cell.
    pub fn empty() -> Self {
        Self::single(CellContent::Empty, Variant::Plain)
    }

    fn single(content: CellContent, variant: Variant) -> Self {
        Self {
            content,
            col_span: 1,
            row_span: 1,
            variant,
            align: variant.default_alignment(),
            emphasis: Emphasis::None,
        }
    }

    /// Set the column span.
    pub fn col_span(self, span: i32) -> Result<Self, ConfigurationError> {
        Ok(Self {
            col_span: check_span(SpanAxis::Column, Some(span))?,
            ..self
        })
    }

    /// Set the row span.
    pub fn row_span(self, span: i32) -> Result<Self, ConfigurationError> {
        Ok(Self {
            row_span: check_span(SpanAxis::Row, Some(span))?,
            ..self
        })
    }

    /// Set alignment and return self.
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set emphasis and return self.
    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        self.content.plain_text()
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.row_span > 1 || self.col_span > 1
    }
}

fn check_span(axis: SpanAxis, span: Option<i32>) -> Result<u32, ConfigurationError> {
    match span {
        None => Ok(1),
        Some(value) if value >= 1 => Ok(value as u32),
        Some(value) => Err(ConfigurationError::InvalidSpan {
            axis,
            value: value as i64,
            position: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_defaults() {
        let cell = Cell::new(CellContent::text("Área"), None, None, Variant::Header).unwrap();
        assert_eq!(cell.col_span, 1);
        assert_eq!(cell.row_span, 1);
        assert_eq!(cell.align, Alignment::Left);
        assert!(!cell.is_merged());
    }

    #[test]
    fn test_cell_zero_col_span() {
        let err = Cell::new(CellContent::Empty, Some(0), None, Variant::Plain).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidSpan {
                axis: SpanAxis::Column,
                value: 0,
                position: None,
            }
        );
    }

    #[test]
    fn test_cell_negative_row_span() {
        let err = Cell::new(CellContent::Empty, Some(2), Some(-3), Variant::Plain).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidSpan {
                axis: SpanAxis::Row,
                value: -3,
                ..
            }
        ));
    }

    #[test]
    fn test_title_is_centered() {
        let cell = Cell::title("I. TÍTULO DE LA SESIÓN");
        assert_eq!(cell.align, Alignment::Center);
        assert!(cell.variant.is_heading());
    }

    #[test]
    fn test_span_setters() {
        let cell = Cell::header("Duración").row_span(2).unwrap();
        assert_eq!(cell.row_span, 2);
        assert!(cell.is_merged());
        assert!(Cell::plain("x").col_span(0).is_err());
    }

    #[test]
    fn test_content_text() {
        let items = CellContent::items(["Corresponsabilidad", "Colaboración"]);
        assert_eq!(items.plain_text(), "Corresponsabilidad Colaboración");
        assert!(!items.is_empty());
        assert!(CellContent::text("  ").is_empty());
        assert!(CellContent::Empty.is_empty());
    }
}
