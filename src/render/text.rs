//! Plain text rendering for grid documents.

use crate::error::Result;
use crate::model::Document;

use super::RenderOptions;

/// Convert a document to plain text.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let output = if options.include_banner {
        doc.plain_text()
    } else {
        doc.sections
            .iter()
            .map(|s| s.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    Ok(output.trim().to_string())
}
