//! Rendering module for converting documents to various output formats.

mod html;
mod json;
mod markdown;
mod options;
mod result;
mod text;
mod theme;
pub mod visitor;

pub use html::{escape_html, to_html, to_html_with_stats, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::{RenderOptions, TableFallback};
pub use result::RenderResult;
pub use text::to_text;
pub use theme::{Rgb, Theme};
pub use visitor::{CompositeVisitor, DefaultVisitor, DocumentVisitor, SkipSpacersVisitor, VisitorAction};
