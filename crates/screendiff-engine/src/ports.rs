//! Seams to the external markup parser and tree-diff engine.
//!
//! Neither is implemented here. Callers plug in whatever produces [`Node`]
//! trees and [`DiffOperation`] lists in the shared serde shape.

use screendiff_core::{DiffOperation, Node, Result};

/// Turns raw markup into a document tree.
pub trait MarkupParser {
    /// # Errors
    ///
    /// `ERR_PARSE` when the markup cannot be turned into a tree.
    fn parse(&self, markup: &str) -> Result<Node>;
}

/// Computes the operations that transform `current` into `preview`.
pub trait TreeDiffer {
    /// # Errors
    ///
    /// `ERR_DIFF_ENGINE` when the engine fails.
    fn diff(&self, current: &Node, preview: &Node) -> Result<Vec<DiffOperation>>;
}
