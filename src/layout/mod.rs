//! Declarative grid layout and the validating build pass.
//!
//! Layouts are described with [`SectionSpec`], [`RowSpec`], and
//! [`CellSpec`] descriptors. Building composes every row, checks spans
//! against the document's column count, and produces an immutable
//! [`Document`](crate::model::Document). A build either fully succeeds or
//! returns the first error.

mod builder;
mod composer;
mod content;
mod spec;

pub use builder::{
    build_document, build_document_with_content, build_section, expand_rows, repeat_row,
    DocumentBuilder,
};
pub use composer::{compose_row, RowComposer};
pub use content::ContentMap;
pub use spec::{CellSpec, ContentSpec, DocumentSpec, RowSource, RowSpec, SectionSpec, TextSource};
