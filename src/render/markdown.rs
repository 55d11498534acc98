//! Markdown rendering for grid documents.

use crate::error::Result;
use crate::model::{Document, Slot};

use super::{to_html, RenderOptions, RenderResult, TableFallback};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// Markdown renderer.
///
/// Pipe tables cannot express merged cells, so each section is expanded
/// to its full grid and merged positions are left blank.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to Markdown with statistics.
    pub fn render_with_stats(self, doc: &Document) -> Result<RenderResult> {
        let content = self.render_internal(doc)?;
        Ok(RenderResult::new(content, doc.stats()))
    }

    fn render_internal(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_banner {
            if let Some(ref banner) = doc.banner {
                output.push_str(&format!("# {}\n\n", self.text(banner)));
            }
        }

        if self.options.table_fallback == TableFallback::Html && doc.has_merged_cells() {
            let html_options = self.options.clone().with_banner(false).with_standalone(false);
            output.push_str(&to_html(doc, &html_options)?);
            return Ok(output.trim().to_string());
        }

        for (index, section) in doc.sections.iter().enumerate() {
            if let Some(ref title) = section.title {
                output.push_str(&format!("## {}\n\n", self.text(title)));
            }
            if let Some(grid) = doc.slots(index) {
                let rows: Vec<&Vec<Slot<'_>>> = grid
                    .iter()
                    .zip(&section.rows)
                    .filter(|(_, row)| !row.is_spacer())
                    .map(|(slots, _)| slots)
                    .collect();
                self.render_grid(&mut output, &rows, doc.column_count);
            }
        }

        Ok(output.trim().to_string())
    }

    fn render_grid(&self, output: &mut String, rows: &[&Vec<Slot<'_>>], columns: usize) {
        if rows.is_empty() {
            return;
        }

        for (i, slots) in rows.iter().enumerate() {
            output.push('|');
            for slot in slots.iter() {
                let content = match slot {
                    Slot::Origin(cell) => self.text(&cell.plain_text().replace('\n', " ")),
                    Slot::Covered { .. } | Slot::Vacant => String::new(),
                };
                output.push_str(&format!(" {} |", content.trim()));
            }
            output.push('\n');

            if i == 0 {
                output.push('|');
                for _ in 0..columns {
                    output.push_str(" --- |");
                }
                output.push('\n');
            }
        }

        output.push('\n');
    }

    fn text(&self, text: &str) -> String {
        if self.options.escape_text {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as Markdown syntax.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
