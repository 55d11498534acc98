//! Document model types for fixed-layout grid documents.
//!
//! This module defines the validated render tree produced by the layout
//! builder and consumed by the renderers. The model knows nothing about
//! any output medium.

mod cell;
mod document;
mod grid;
mod row;
mod section;

pub use cell::{Alignment, Cell, CellContent, Emphasis, Variant};
pub use document::{Document, DocumentStats, Slot};
pub use grid::{Placement, SpanTracker};
pub use row::{Row, RowKind};
pub use section::Section;
