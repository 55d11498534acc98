//! Rendering options and configuration.

use super::Theme;

/// Options for rendering a document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Style tokens
    pub theme: Theme,

    /// Wrap HTML output in a complete page
    pub standalone: bool,

    /// Emit equal-width `<col>` elements
    pub equal_columns: bool,

    /// Render the document banner
    pub include_banner: bool,

    /// Escape special characters in cell text
    pub escape_text: bool,

    /// How Markdown output renders tables
    pub table_fallback: TableFallback,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable the standalone page shell.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Enable or disable equal column widths.
    pub fn with_equal_columns(mut self, equal: bool) -> Self {
        self.equal_columns = equal;
        self
    }

    /// Enable or disable the banner.
    pub fn with_banner(mut self, include: bool) -> Self {
        self.include_banner = include;
        self
    }

    /// Enable or disable text escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }

    /// Set the table fallback mode.
    pub fn with_table_fallback(mut self, fallback: TableFallback) -> Self {
        self.table_fallback = fallback;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            standalone: false,
            equal_columns: true,
            include_banner: true,
            escape_text: true,
            table_fallback: TableFallback::Markdown,
        }
    }
}

/// How Markdown output renders merged-cell tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFallback {
    /// Pipe tables with merged positions left blank
    #[default]
    Markdown,
    /// Embed the HTML table
    Html,
}
