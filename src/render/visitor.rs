//! Visitor pattern for customizing HTML rendering.
//!
//! The visitor pattern allows users to customize how sections, rows, and
//! cells are rendered without modifying the core rendering logic.
//!
//! # Example
//!
//! ```
//! use gridform::render::visitor::{DocumentVisitor, VisitorAction};
//! use gridform::model::Cell;
//!
//! struct RedactBlanks;
//!
//! impl DocumentVisitor for RedactBlanks {
//!     fn visit_cell(&mut self, cell: &Cell) -> VisitorAction {
//!         if cell.content.is_empty() {
//!             VisitorAction::Replace("<td>-</td>".to_string())
//!         } else {
//!             VisitorAction::Continue
//!         }
//!     }
//! }
//! ```

use crate::model::{Cell, Row, Section};

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the element with custom output.
    Replace(String),

    /// Skip this element entirely (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the element should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for visiting document elements during rendering.
///
/// All methods return `VisitorAction::Continue` by default. Skipping a
/// row or cell breaks the grid alignment of the output; the document
/// itself is never changed.
pub trait DocumentVisitor: Send + Sync {
    /// Called before rendering a section, title row included.
    fn visit_section(&mut self, index: usize, section: &Section) -> VisitorAction {
        let _ = (index, section);
        VisitorAction::Continue
    }

    /// Called before rendering a content row.
    fn visit_row(&mut self, row: &Row) -> VisitorAction {
        let _ = row;
        VisitorAction::Continue
    }

    /// Called before rendering a declared cell.
    fn visit_cell(&mut self, cell: &Cell) -> VisitorAction {
        let _ = cell;
        VisitorAction::Continue
    }
}

/// Visitor that renders everything with the defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentVisitor for DefaultVisitor {}

/// Visitor that drops spacer rows from the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipSpacersVisitor;

impl DocumentVisitor for SkipSpacersVisitor {
    fn visit_row(&mut self, row: &Row) -> VisitorAction {
        if row.is_spacer() {
            VisitorAction::Skip
        } else {
            VisitorAction::Continue
        }
    }
}

/// Runs several visitors in order; the first non-`Continue` action wins.
#[derive(Default)]
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn DocumentVisitor>>,
}

impl CompositeVisitor {
    /// Create an empty composite visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visitor and return self.
    pub fn with(mut self, visitor: impl DocumentVisitor + 'static) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }
}

impl DocumentVisitor for CompositeVisitor {
    fn visit_section(&mut self, index: usize, section: &Section) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visitor.visit_section(index, section);
            if !matches!(action, VisitorAction::Continue) {
                return action;
            }
        }
        VisitorAction::Continue
    }

    fn visit_row(&mut self, row: &Row) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visitor.visit_row(row);
            if !matches!(action, VisitorAction::Continue) {
                return action;
            }
        }
        VisitorAction::Continue
    }

    fn visit_cell(&mut self, cell: &Cell) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visitor.visit_cell(cell);
            if !matches!(action, VisitorAction::Continue) {
                return action;
            }
        }
        VisitorAction::Continue
    }
}
