//! Rendering result with statistics.

use crate::model::DocumentStats;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML, Markdown, etc.)
    pub content: String,

    /// Structural statistics of the rendered document
    pub stats: DocumentStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: DocumentStats) -> Self {
        Self { content, stats }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            stats: DocumentStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}
