//! # gridform
//!
//! Fixed-layout grid documents with merged cells.
//!
//! A document is described declaratively as sections of rows of cells,
//! each with a column span, a row span, and a style variant. Building the
//! document checks every row against the fixed column count (row spans
//! from earlier rows included) before any output is produced. The built
//! document renders to HTML, Markdown, plain text, or JSON.
//!
//! ## Quick Start
//!
//! ```
//! use gridform::{build_document, render, CellSpec, RowSpec, SectionSpec};
//!
//! fn main() -> gridform::Result<()> {
//!     let sections = vec![SectionSpec::titled("I. TÍTULO DE LA SESIÓN").row(RowSpec::new(vec![
//!         CellSpec::header("Área"),
//!         CellSpec::plain("Informática").cols(2),
//!     ]))];
//!
//!     let doc = build_document(&sections, 3)?;
//!     let html = render::to_html(&doc, &render::RenderOptions::default())?;
//!     assert!(html.contains("colspan=\"2\""));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Span validation**: every non-spacer row must fill the grid exactly
//! - **Merged cells**: row spans are tracked and re-declared positions rejected
//! - **Repeated rows**: blank filler rows from one template and a count
//! - **Themes**: all colors come from a `Theme`, loadable from JSON
//! - **Multiple outputs**: HTML, Markdown, plain text, JSON

pub mod error;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{CellPosition, ConfigurationError, Error, LayoutError, Result, SpanAxis};
pub use layout::{
    build_document, build_document_with_content, compose_row, CellSpec, ContentMap, ContentSpec,
    DocumentBuilder, DocumentSpec, RowSource, RowSpec, SectionSpec, TextSource,
};
pub use model::{
    Alignment, Cell, CellContent, Document, DocumentStats, Emphasis, Row, RowKind, Section, Slot,
    Variant,
};
pub use render::{JsonFormat, RenderOptions, TableFallback, Theme};

use std::path::Path;

/// Load a layout from a JSON file.
pub fn load_layout<P: AsRef<Path>>(path: P) -> Result<DocumentSpec> {
    let json = std::fs::read_to_string(path)?;
    DocumentSpec::from_json(&json)
}

/// Load a content map from a JSON file.
pub fn load_content<P: AsRef<Path>>(path: P) -> Result<ContentMap> {
    let json = std::fs::read_to_string(path)?;
    ContentMap::from_json(&json)
}

/// Load and validate a theme from a JSON file.
pub fn load_theme<P: AsRef<Path>>(path: P) -> Result<Theme> {
    let json = std::fs::read_to_string(path)?;
    Theme::from_json(&json)
}

/// Build a layout and render it to HTML in one step.
///
/// # Example
///
/// ```
/// use gridform::{to_html, CellSpec, ContentMap, DocumentSpec, RenderOptions, RowSpec, SectionSpec};
///
/// let mut spec = DocumentSpec::new(2);
/// spec.sections.push(SectionSpec::untitled().row(RowSpec::new(vec![
///     CellSpec::header("Grado"),
///     CellSpec::plain("2 Sec"),
/// ])));
/// let html = to_html(&spec, &ContentMap::new(), &RenderOptions::default()).unwrap();
/// assert!(html.contains("2 Sec"));
/// ```
pub fn to_html(spec: &DocumentSpec, content: &ContentMap, options: &RenderOptions) -> Result<String> {
    let doc = spec.build(content)?;
    render::to_html(&doc, options)
}

/// Build a layout and render it to Markdown in one step.
pub fn to_markdown(
    spec: &DocumentSpec,
    content: &ContentMap,
    options: &RenderOptions,
) -> Result<String> {
    let doc = spec.build(content)?;
    render::to_markdown(&doc, options)
}

/// Builder for building and rendering grid documents.
///
/// # Example
///
/// ```
/// use gridform::{CellSpec, DocumentSpec, Gridform, RowSpec, SectionSpec, TextSource};
///
/// let mut spec = DocumentSpec::new(2);
/// spec.sections.push(SectionSpec::titled(TextSource::key("title")).row(RowSpec::new(vec![
///     CellSpec::header("Área"),
///     CellSpec::plain(TextSource::key("area")),
/// ])));
///
/// let html = Gridform::new()
///     .with_content_entry("title", "I. DATOS")
///     .with_content_entry("area", "Informática")
///     .standalone()
///     .build(&spec)?
///     .to_html()?;
/// assert!(html.contains("Informática"));
/// # Ok::<(), gridform::Error>(())
/// ```
pub struct Gridform {
    content: ContentMap,
    render_options: RenderOptions,
}

impl Gridform {
    /// Create a new Gridform builder.
    pub fn new() -> Self {
        Self {
            content: ContentMap::new(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the content map.
    pub fn with_content(mut self, content: ContentMap) -> Self {
        self.content = content;
        self
    }

    /// Add one content entry.
    pub fn with_content_entry(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.content.insert(key, text);
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.render_options = self.render_options.with_theme(theme);
        self
    }

    /// Wrap HTML output in a complete page.
    pub fn standalone(mut self) -> Self {
        self.render_options = self.render_options.with_standalone(true);
        self
    }

    /// Set table fallback mode for Markdown.
    pub fn with_table_fallback(mut self, fallback: TableFallback) -> Self {
        self.render_options = self.render_options.with_table_fallback(fallback);
        self
    }

    /// Build a layout and return a result wrapper.
    pub fn build(self, spec: &DocumentSpec) -> Result<GridformResult> {
        self.render_options.theme.validate()?;
        let document = spec.build(&self.content)?;
        Ok(GridformResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Gridform {
    fn default() -> Self {
        Self::new()
    }
}

/// A built document together with the options to render it.
pub struct GridformResult {
    /// The built document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl GridformResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> DocumentSpec {
        let mut spec = DocumentSpec::new(3);
        spec.banner = Some(TextSource::literal("SESIÓN DE APRENDIZAJE"));
        spec.sections.push(
            SectionSpec::titled("I. TÍTULO").row(RowSpec::new(vec![
                CellSpec::plain(TextSource::key("session_title")).cols(3)
            ])),
        );
        spec
    }

    // ==================== Builder Pattern Tests ====================

    #[test]
    fn test_gridform_builder() {
        let builder = Gridform::new()
            .standalone()
            .with_table_fallback(TableFallback::Html);
        assert!(builder.render_options.standalone);
        assert_eq!(builder.render_options.table_fallback, TableFallback::Html);
    }

    #[test]
    fn test_gridform_builder_default() {
        let builder = Gridform::default();
        assert!(!builder.render_options.standalone);
        assert!(builder.content.is_empty());
    }

    #[test]
    fn test_gridform_rejects_bad_theme() {
        let result = Gridform::new()
            .with_theme(Theme::new().with_text_color("blue"))
            .build(&spec());
        assert!(matches!(result, Err(Error::Theme { .. })));
    }

    #[test]
    fn test_gridform_outputs() {
        let result = Gridform::new()
            .with_content_entry("session_title", "Variables y tipos")
            .build(&spec())
            .unwrap();

        assert!(result.to_html().unwrap().contains("Variables y tipos"));
        assert!(result.to_markdown().unwrap().starts_with("# SESIÓN DE APRENDIZAJE"));
        assert!(result.to_text().unwrap().contains("I. TÍTULO"));
        assert!(result.to_json(JsonFormat::Compact).unwrap().contains("\"column_count\":3"));
        assert_eq!(result.document().row_count(), 1);
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_to_html_propagates_layout_error() {
        let mut bad = spec();
        bad.sections
            .push(SectionSpec::untitled().row(RowSpec::new(vec![CellSpec::blank().cols(2)])));
        let result = to_html(&bad, &ContentMap::new(), &RenderOptions::default());
        assert!(matches!(result, Err(Error::Layout(_))));
    }

    #[test]
    fn test_to_markdown_one_step() {
        let md = to_markdown(&spec(), &ContentMap::new(), &RenderOptions::default()).unwrap();
        assert!(md.contains("## I. TÍTULO"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_layout("does/not/exist.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
