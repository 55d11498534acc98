//! Section and document building.

use crate::error::Result;
use crate::model::{Document, Section};
use log::debug;

use super::{ContentMap, DocumentSpec, RowComposer, RowSource, RowSpec, SectionSpec, TextSource};

/// Produce `count` copies of a row template.
///
/// A count of zero yields no rows.
pub fn repeat_row(template: &RowSpec, count: usize) -> Vec<RowSpec> {
    vec![template.clone(); count]
}

/// Flatten rows and row runs into a plain list of rows.
pub fn expand_rows(sources: &[RowSource]) -> Vec<RowSpec> {
    let mut rows = Vec::with_capacity(sources.len());
    for source in sources {
        match source {
            RowSource::Row(row) => rows.push(row.clone()),
            RowSource::Repeat { template, count } => rows.extend(repeat_row(template, *count)),
        }
    }
    rows
}

/// Build one section.
///
/// Any row failure is returned unchanged; there is no partial section.
pub fn build_section(
    spec: &SectionSpec,
    index: usize,
    composer: &mut RowComposer,
    content: &ContentMap,
) -> Result<Section> {
    let title = spec.title.as_ref().map(|t| content.resolve(t));
    let row_specs = expand_rows(&spec.rows);
    debug!(
        "building section {} ({:?}) with {} rows",
        index,
        title.as_deref().unwrap_or("untitled"),
        row_specs.len()
    );

    let rows = row_specs
        .iter()
        .enumerate()
        .map(|(row, row_spec)| composer.compose(row_spec, index, row, content))
        .collect::<Result<Vec<_>>>()?;
    composer.finish_section(index)?;

    Ok(Section { title, rows })
}

/// Build a document from section descriptors with literal text only.
pub fn build_document(sections: &[SectionSpec], column_count: usize) -> Result<Document> {
    build_document_with_content(sections, column_count, &ContentMap::new())
}

/// Build a document, resolving content keys against `content`.
pub fn build_document_with_content(
    sections: &[SectionSpec],
    column_count: usize,
    content: &ContentMap,
) -> Result<Document> {
    DocumentBuilder::new(column_count)
        .content(content.clone())
        .sections(sections.iter().cloned())
        .build()
}

/// Builder collecting a banner, content, and sections before a single
/// validating build pass.
///
/// # Example
///
/// ```
/// use gridform::layout::{CellSpec, DocumentBuilder, RowSpec, SectionSpec};
///
/// let doc = DocumentBuilder::new(3)
///     .banner("Lesson")
///     .section(SectionSpec::titled("I. Title").row(RowSpec::new(vec![
///         CellSpec::header("Area"),
///         CellSpec::plain("Computing").cols(2),
///     ])))
///     .build()?;
/// assert_eq!(doc.row_count(), 1);
/// # Ok::<(), gridform::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    column_count: usize,
    banner: Option<TextSource>,
    content: ContentMap,
    sections: Vec<SectionSpec>,
}

impl DocumentBuilder {
    /// Create a builder for a grid of `column_count` columns.
    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            banner: None,
            content: ContentMap::new(),
            sections: Vec::new(),
        }
    }

    /// Set the document banner.
    pub fn banner(mut self, banner: impl Into<TextSource>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    /// Set the content map used to resolve keys.
    pub fn content(mut self, content: ContentMap) -> Self {
        self.content = content;
        self
    }

    /// Append a section.
    pub fn section(mut self, section: SectionSpec) -> Self {
        self.sections.push(section);
        self
    }

    /// Append several sections.
    pub fn sections(mut self, sections: impl IntoIterator<Item = SectionSpec>) -> Self {
        self.sections.extend(sections);
        self
    }

    /// Validate everything and build the document.
    pub fn build(&self) -> Result<Document> {
        let mut composer = RowComposer::new(self.column_count)?;
        let sections = self
            .sections
            .iter()
            .enumerate()
            .map(|(index, spec)| build_section(spec, index, &mut composer, &self.content))
            .collect::<Result<Vec<_>>>()?;

        let doc = Document {
            banner: self.banner.as_ref().map(|b| self.content.resolve(b)),
            column_count: self.column_count,
            sections,
        };
        debug!(
            "built document: {} sections, {} rows, {} cells",
            doc.section_count(),
            doc.row_count(),
            doc.cell_count()
        );
        Ok(doc)
    }
}

impl DocumentSpec {
    /// Build the described document against `content`.
    pub fn build(&self, content: &ContentMap) -> Result<Document> {
        let mut builder = DocumentBuilder::new(self.column_count)
            .content(content.clone())
            .sections(self.sections.iter().cloned());
        if let Some(ref banner) = self.banner {
            builder = builder.banner(banner.clone());
        }
        builder.build()
    }
}
