//! Diff operations as reported by the external tree-diff engine.
//!
//! The serde shape is the engine's own: an `action` tag plus camelCase
//! payload fields. Payload fields are optional so that an incomplete
//! operation still deserializes; the renderer skips it instead of failing.

use crate::model::{FormValue, Node};
use serde::{Deserialize, Serialize};

/// One structural difference between the current and preview trees.
///
/// `route` is the child-index path from the root to the affected node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DiffOperation {
    AddAttribute {
        #[serde(default)]
        route: Vec<usize>,
        name: Option<String>,
        value: Option<String>,
    },
    RemoveAttribute {
        #[serde(default)]
        route: Vec<usize>,
        name: Option<String>,
        value: Option<String>,
    },
    ModifyAttribute {
        #[serde(default)]
        route: Vec<usize>,
        name: Option<String>,
        old_value: Option<String>,
        new_value: Option<String>,
    },
    AddTextElement {
        #[serde(default)]
        route: Vec<usize>,
        value: Option<String>,
    },
    RemoveTextElement {
        #[serde(default)]
        route: Vec<usize>,
        value: Option<String>,
    },
    ModifyTextElement {
        #[serde(default)]
        route: Vec<usize>,
        old_value: Option<String>,
        new_value: Option<String>,
    },
    AddElement {
        #[serde(default)]
        route: Vec<usize>,
        element: Option<Node>,
    },
    RemoveElement {
        #[serde(default)]
        route: Vec<usize>,
        element: Option<Node>,
    },
    ReplaceElement {
        #[serde(default)]
        route: Vec<usize>,
        old_value: Option<Node>,
        new_value: Option<Node>,
    },
    RelocateGroup {
        #[serde(default)]
        route: Vec<usize>,
        group_length: Option<usize>,
        from: Option<usize>,
        to: Option<usize>,
    },
    ModifyValue {
        #[serde(default)]
        route: Vec<usize>,
        old_value: Option<FormValue>,
        new_value: Option<FormValue>,
    },
    ModifyChecked {
        #[serde(default)]
        route: Vec<usize>,
        old_value: Option<bool>,
        new_value: Option<bool>,
    },
    ModifySelected {
        #[serde(default)]
        route: Vec<usize>,
        old_value: Option<bool>,
        new_value: Option<bool>,
    },
    ModifyComment {
        #[serde(default)]
        route: Vec<usize>,
        old_value: Option<String>,
        new_value: Option<String>,
    },
}

impl DiffOperation {
    /// The engine's action name, e.g. `modifyAttribute`.
    pub fn kind(&self) -> &'static str {
        match self {
            DiffOperation::AddAttribute { .. } => "addAttribute",
            DiffOperation::RemoveAttribute { .. } => "removeAttribute",
            DiffOperation::ModifyAttribute { .. } => "modifyAttribute",
            DiffOperation::AddTextElement { .. } => "addTextElement",
            DiffOperation::RemoveTextElement { .. } => "removeTextElement",
            DiffOperation::ModifyTextElement { .. } => "modifyTextElement",
            DiffOperation::AddElement { .. } => "addElement",
            DiffOperation::RemoveElement { .. } => "removeElement",
            DiffOperation::ReplaceElement { .. } => "replaceElement",
            DiffOperation::RelocateGroup { .. } => "relocateGroup",
            DiffOperation::ModifyValue { .. } => "modifyValue",
            DiffOperation::ModifyChecked { .. } => "modifyChecked",
            DiffOperation::ModifySelected { .. } => "modifySelected",
            DiffOperation::ModifyComment { .. } => "modifyComment",
        }
    }

    pub fn route(&self) -> &[usize] {
        match self {
            DiffOperation::AddAttribute { route, .. }
            | DiffOperation::RemoveAttribute { route, .. }
            | DiffOperation::ModifyAttribute { route, .. }
            | DiffOperation::AddTextElement { route, .. }
            | DiffOperation::RemoveTextElement { route, .. }
            | DiffOperation::ModifyTextElement { route, .. }
            | DiffOperation::AddElement { route, .. }
            | DiffOperation::RemoveElement { route, .. }
            | DiffOperation::ReplaceElement { route, .. }
            | DiffOperation::RelocateGroup { route, .. }
            | DiffOperation::ModifyValue { route, .. }
            | DiffOperation::ModifyChecked { route, .. }
            | DiffOperation::ModifySelected { route, .. }
            | DiffOperation::ModifyComment { route, .. } => route,
        }
    }
}
