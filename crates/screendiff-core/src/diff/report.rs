//! Per-screen diff report: the rendered text artifact and its structured dump.
//!
//! The structured dump is the bare operation list in the diff engine's own
//! shape; the side labels only appear in the text header.

use super::model::DiffOperation;
use super::render::{render_text, IndentConfig};
use crate::errors::Result;

/// Operations between one screen's current and preview renders, labelled
/// with where each side came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffReport {
    pub current: String,
    pub preview: String,
    pub operations: Vec<DiffOperation>,
}

impl DiffReport {
    pub fn new(
        current: impl Into<String>,
        preview: impl Into<String>,
        operations: Vec<DiffOperation>,
    ) -> Self {
        Self {
            current: current.into(),
            preview: preview.into(),
            operations,
        }
    }

    pub fn has_changes(&self) -> bool {
        !self.operations.is_empty()
    }

    /// `---`/`+++` header naming both sides, then the rendered operations.
    pub fn render(&self, indent: IndentConfig) -> String {
        format!(
            "--- current: {}\n+++ preview: {}\n{}",
            self.current,
            self.preview,
            render_text(&self.operations, indent)
        )
    }

    /// YAML sequence of the operations.
    ///
    /// # Errors
    ///
    /// Returns `ERR_SERIALIZATION` if the operations cannot be encoded.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.operations)?)
    }

    /// Pretty JSON array of the operations.
    ///
    /// # Errors
    ///
    /// Returns `ERR_SERIALIZATION` if the operations cannot be encoded.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.operations)?)
    }

    /// # Errors
    ///
    /// Returns `ERR_SERIALIZATION` for malformed YAML, including nodes that
    /// break the element / character-data invariants.
    pub fn operations_from_yaml(yaml: &str) -> Result<Vec<DiffOperation>> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
