//! Declarative layout descriptors.
//!
//! Descriptors are plain data: they carry unvalidated spans and content
//! references. The builder turns them into the validated model.

use crate::error::Result;
use crate::model::{Alignment, Emphasis, RowKind, Variant};
use serde::{Deserialize, Serialize};

/// Where a piece of text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSource {
    /// Text given inline
    Literal(String),
    /// Text looked up in the content map
    Key(String),
}

impl TextSource {
    /// Inline text.
    pub fn literal(text: impl Into<String>) -> Self {
        TextSource::Literal(text.into())
    }

    /// Content map reference.
    pub fn key(key: impl Into<String>) -> Self {
        TextSource::Key(key.into())
    }
}

impl From<&str> for TextSource {
    fn from(text: &str) -> Self {
        TextSource::Literal(text.to_string())
    }
}

impl From<String> for TextSource {
    fn from(text: String) -> Self {
        TextSource::Literal(text)
    }
}

/// Content descriptor of a cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSpec {
    /// Blank filler
    #[default]
    Empty,
    /// A single run of text
    Text(TextSource),
    /// Inline items spread across the cell
    Items(Vec<TextSource>),
}

/// Descriptor of one cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellSpec {
    /// Cell content
    pub content: ContentSpec,

    /// Requested column span (1 when unset)
    pub col_span: Option<i32>,

    /// Requested row span (1 when unset)
    pub row_span: Option<i32>,

    /// Style role
    pub variant: Variant,

    /// Alignment override (variant default when unset)
    pub align: Option<Alignment>,

    /// Extra emphasis
    pub emphasis: Emphasis,
}

impl CellSpec {
    fn with_variant(content: ContentSpec, variant: Variant) -> Self {
        Self {
            content,
            variant,
            ..Self::default()
        }
    }

    /// Plain text cell.
    pub fn plain(text: impl Into<TextSource>) -> Self {
        Self::with_variant(ContentSpec::Text(text.into()), Variant::Plain)
    }

    /// Header (label) cell.
    pub fn header(text: impl Into<TextSource>) -> Self {
        Self::with_variant(ContentSpec::Text(text.into()), Variant::Header)
    }

    /// Title cell.
    pub fn title(text: impl Into<TextSource>) -> Self {
        Self::with_variant(ContentSpec::Text(text.into()), Variant::Title)
    }

    /// Blank plain cell.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Plain cell holding inline items.
    pub fn items<T: Into<TextSource>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::with_variant(
            ContentSpec::Items(items.into_iter().map(Into::into).collect()),
            Variant::Plain,
        )
    }

    /// Set the column span.
    pub fn cols(mut self, span: i32) -> Self {
        self.col_span = Some(span);
        self
    }

    /// Set the row span.
    pub fn rows(mut self, span: i32) -> Self {
        self.row_span = Some(span);
        self
    }

    /// Set the alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    /// Center the cell text.
    pub fn centered(self) -> Self {
        self.align(Alignment::Center)
    }

    /// Set the emphasis.
    pub fn emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    /// Column span as requested, without validation.
    pub fn requested_cols(&self) -> i64 {
        self.col_span.unwrap_or(1) as i64
    }
}

/// Descriptor of one row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowSpec {
    /// Cells in declaration order
    pub cells: Vec<CellSpec>,

    /// Row style tag
    pub kind: RowKind,
}

impl RowSpec {
    /// Body row.
    pub fn new(cells: Vec<CellSpec>) -> Self {
        Self {
            cells,
            kind: RowKind::Body,
        }
    }

    /// Row of column labels.
    pub fn header(cells: Vec<CellSpec>) -> Self {
        Self {
            cells,
            kind: RowKind::Header,
        }
    }

    /// Spacer row made of the given cells.
    pub fn spacer(cells: Vec<CellSpec>) -> Self {
        Self {
            cells,
            kind: RowKind::Spacer,
        }
    }

    /// Spacer row of one blank cell spanning `width` columns.
    pub fn spacer_width(width: i32) -> Self {
        Self::spacer(vec![CellSpec::blank().cols(width)])
    }

    /// Check if this is a spacer row.
    pub fn is_spacer(&self) -> bool {
        self.kind == RowKind::Spacer
    }
}

/// A row or a run of identical rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowSource {
    /// A single row
    Row(RowSpec),
    /// `count` copies of `template`
    Repeat {
        /// Row to copy
        template: RowSpec,
        /// Number of copies (0 yields none)
        count: usize,
    },
}

impl From<RowSpec> for RowSource {
    fn from(row: RowSpec) -> Self {
        RowSource::Row(row)
    }
}

/// Descriptor of one section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionSpec {
    /// Title shown as a full-width title row
    pub title: Option<TextSource>,

    /// Rows and row runs in order
    pub rows: Vec<RowSource>,
}

impl SectionSpec {
    /// Section with a title row.
    pub fn titled(title: impl Into<TextSource>) -> Self {
        Self {
            title: Some(title.into()),
            rows: Vec::new(),
        }
    }

    /// Section without a title row.
    pub fn untitled() -> Self {
        Self::default()
    }

    /// Append a row.
    pub fn row(mut self, row: RowSpec) -> Self {
        self.rows.push(RowSource::Row(row));
        self
    }

    /// Append `count` copies of a row.
    pub fn repeat(mut self, template: RowSpec, count: usize) -> Self {
        self.rows.push(RowSource::Repeat { template, count });
        self
    }
}

/// Complete layout of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSpec {
    /// Banner above all sections
    #[serde(default)]
    pub banner: Option<TextSource>,

    /// Fixed number of grid columns
    pub column_count: usize,

    /// Sections in order
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
}

impl DocumentSpec {
    /// Create an empty layout.
    pub fn new(column_count: usize) -> Self {
        Self {
            banner: None,
            column_count,
            sections: Vec::new(),
        }
    }

    /// Parse a layout from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the layout to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
