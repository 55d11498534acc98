//! HTML rendering for grid documents.
//!
//! Cell styling is composed in layers: the plain base first, then the
//! variant, then alignment and emphasis. Later layers override earlier
//! declarations of the same property.

use crate::error::Result;
use crate::model::{Alignment, Cell, CellContent, Document, Emphasis, Row, RowKind, Section, Variant};

use super::visitor::DocumentVisitor;
use super::{RenderOptions, RenderResult, Theme};

/// Convert a document to an HTML table (or page, if standalone).
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to HTML with statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    visitor: Option<Box<dyn DocumentVisitor>>,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            visitor: None,
        }
    }

    /// Attach a visitor that can replace or skip elements.
    pub fn with_visitor(mut self, visitor: impl DocumentVisitor + 'static) -> Self {
        self.visitor = Some(Box::new(visitor));
        self
    }

    /// Render a document to HTML.
    ///
    /// Fails with [`Error::Theme`](crate::Error::Theme) if a theme token is
    /// not a `#RRGGBB` color, since tokens are written into `style`
    /// attributes verbatim.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.options.theme.validate()?;
        Ok(self.render_internal(doc))
    }

    /// Render a document to HTML with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.theme.validate()?;
        let content = self.render_internal(doc);
        Ok(RenderResult::new(content, doc.stats()))
    }

    fn render_internal(&mut self, doc: &Document) -> String {
        let mut table = String::new();
        self.render_table(&mut table, doc);

        if !self.options.standalone {
            return table;
        }

        let theme = &self.options.theme;
        let title = doc.banner.as_deref().unwrap_or("Document");
        let mut page = String::with_capacity(table.len() + 512);
        page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        page.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        page.push_str("</head>\n");
        page.push_str(&format!(
            "<body style=\"margin: 0; padding: 2rem; background-color: {}\">\n",
            theme.page_background
        ));
        page.push_str(&format!(
            "<main style=\"max-width: 80rem; margin: 0 auto; padding: 2rem; background-color: {}\">\n",
            theme.surface_background
        ));
        page.push_str(&table);
        page.push_str("</main>\n</body>\n</html>\n");
        page
    }

    fn render_table(&mut self, output: &mut String, doc: &Document) {
        let columns = doc.column_count;
        output.push_str(
            "<table style=\"width: 100%; border-collapse: collapse; font-size: 0.875rem\">\n",
        );

        if self.options.equal_columns && columns > 0 {
            let width = 100.0 / columns as f64;
            output.push_str("<colgroup>\n");
            for _ in 0..columns {
                output.push_str(&format!("<col style=\"width: {:.2}%\">\n", width));
            }
            output.push_str("</colgroup>\n");
        }

        output.push_str("<tbody>\n");
        if self.options.include_banner {
            if let Some(ref banner) = doc.banner {
                self.render_banner(output, banner, columns);
            }
        }
        for (index, section) in doc.sections.iter().enumerate() {
            self.render_section(output, index, section, columns);
        }
        output.push_str("</tbody>\n</table>\n");
    }

    fn render_banner(&self, output: &mut String, banner: &str, columns: usize) {
        let theme = &self.options.theme;
        let mut style = base_style(theme);
        style.set("font-weight", "bold");
        style.set("text-align", "center");
        style.set("font-size", "1.25rem");
        style.set("padding", "0.75rem");
        style.set("background-color", &theme.banner_background);
        style.set("color", &theme.banner_text_color);
        output.push_str(&format!(
            "<tr><th{} style=\"{}\">{}</th></tr>\n",
            span_attr("colspan", columns as u32),
            style,
            self.text(banner)
        ));
    }

    fn render_section(&mut self, output: &mut String, index: usize, section: &Section, columns: usize) {
        if let Some(visitor) = self.visitor.as_mut() {
            let action = visitor.visit_section(index, section);
            if action.should_skip() {
                return;
            }
            if let Some(replacement) = action.replacement() {
                output.push_str(replacement);
                return;
            }
        }

        if let Some(ref title) = section.title {
            let title_cell = Cell::title(title.as_str());
            output.push_str("<tr>");
            self.render_cell_with_span(output, &title_cell, columns as u32);
            output.push_str("</tr>\n");
        }

        for row in &section.rows {
            self.render_row(output, row, columns);
        }
    }

    fn render_row(&mut self, output: &mut String, row: &Row, columns: usize) {
        if let Some(visitor) = self.visitor.as_mut() {
            let action = visitor.visit_row(row);
            if action.should_skip() {
                return;
            }
            if let Some(replacement) = action.replacement() {
                output.push_str(replacement);
                return;
            }
        }

        match row.kind {
            RowKind::Spacer => {
                let free = columns.saturating_sub(row.carried);
                output.push_str("<tr class=\"spacer\">");
                if free > 0 {
                    output.push_str(&format!(
                        "<td{} style=\"border: 0; padding: 0.5rem\"></td>",
                        span_attr("colspan", free as u32)
                    ));
                }
                output.push_str("</tr>\n");
            }
            RowKind::Header => {
                output.push_str("<tr class=\"header-row\">");
                self.render_cells(output, row);
                output.push_str("</tr>\n");
            }
            RowKind::Body => {
                output.push_str("<tr>");
                self.render_cells(output, row);
                output.push_str("</tr>\n");
            }
        }
    }

    fn render_cells(&mut self, output: &mut String, row: &Row) {
        for cell in &row.cells {
            if let Some(visitor) = self.visitor.as_mut() {
                let action = visitor.visit_cell(cell);
                if action.should_skip() {
                    continue;
                }
                if let Some(replacement) = action.replacement() {
                    output.push_str(replacement);
                    continue;
                }
            }
            self.render_cell_with_span(output, cell, cell.col_span);
        }
    }

    fn render_cell_with_span(&self, output: &mut String, cell: &Cell, col_span: u32) {
        let tag = if cell.variant.is_heading() { "th" } else { "td" };
        let style = cell_style(&self.options.theme, cell);

        output.push('<');
        output.push_str(tag);
        output.push_str(&span_attr("colspan", col_span));
        output.push_str(&span_attr("rowspan", cell.row_span));
        output.push_str(&format!(" style=\"{}\">", style));
        self.render_content(output, &cell.content);
        output.push_str(&format!("</{}>", tag));
    }

    fn render_content(&self, output: &mut String, content: &CellContent) {
        match content {
            CellContent::Empty => output.push_str("&nbsp;"),
            CellContent::Text(text) if text.trim().is_empty() => output.push_str("&nbsp;"),
            CellContent::Text(text) => output.push_str(&self.text(text)),
            CellContent::Items(items) => {
                output.push_str(
                    "<div style=\"display: flex; justify-content: space-around; padding: 0.5rem\">",
                );
                for item in items {
                    output.push_str(&format!("<span>{}</span>", self.text(item)));
                }
                output.push_str("</div>");
            }
        }
    }

    fn text(&self, text: &str) -> String {
        if self.options.escape_text {
            escape_html(text)
        } else {
            text.to_string()
        }
    }
}

/// Ordered CSS declarations; setting a property again replaces it in place.
#[derive(Debug, Default)]
struct Style {
    declarations: Vec<(&'static str, String)>,
}

impl Style {
    fn set(&mut self, property: &'static str, value: &str) {
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value.to_string(),
            None => self.declarations.push((property, value.to_string())),
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", property, value)?;
        }
        Ok(())
    }
}

fn base_style(theme: &Theme) -> Style {
    let mut style = Style::default();
    style.set("border", &format!("1px solid {}", theme.border_color));
    style.set("padding", "0.5rem");
    style.set("vertical-align", "top");
    style.set("color", &theme.text_color);
    style
}

fn cell_style(theme: &Theme, cell: &Cell) -> Style {
    let mut style = base_style(theme);

    match cell.variant {
        Variant::Plain => {}
        Variant::Header => {
            style.set("font-weight", "bold");
            style.set("background-color", &theme.header_background);
        }
        Variant::Title => {
            style.set("font-weight", "bold");
            style.set("letter-spacing", "0.025em");
            style.set("background-color", &theme.title_background);
        }
    }

    if cell.align != Alignment::Left {
        style.set("text-align", cell.align.as_css());
    }

    match cell.emphasis {
        Emphasis::None => {}
        Emphasis::Strong if cell.variant == Variant::Plain => style.set("font-weight", "600"),
        Emphasis::Strong => {}
        Emphasis::Placeholder => {
            style.set("font-style", "italic");
            style.set("color", &theme.muted_text_color);
        }
    }

    style
}

fn span_attr(name: &str, span: u32) -> String {
    if span > 1 {
        format!(" {}=\"{}\"", name, span)
    } else {
        String::new()
    }
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
