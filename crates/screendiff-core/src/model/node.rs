//! Parsed document tree.
//!
//! A [`Node`] is either an element or a piece of character data (text or
//! comment). Character data never has children or attributes; the enum
//! makes that invariant unrepresentable instead of merely documented.
//!
//! The serde shape mirrors the one produced by the external parser and tree
//! diff engine (`nodeName`, `attributes`, `childNodes`, `data`), so trees and
//! diff operations can be dumped and read back losslessly.

use crate::errors::ScreenDiffError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved node name for text nodes
pub const TEXT_NODE_NAME: &str = "#text";
/// Reserved node name for comment nodes
pub const COMMENT_NODE_NAME: &str = "#comment";

/// Attribute map; sorted iteration keeps serialization deterministic.
pub type Attributes = BTreeMap<String, String>;

/// A node in a parsed document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNode", into = "RawNode")]
pub enum Node {
    Element(ElementNode),
    Text(CharacterData),
    Comment(CharacterData),
}

/// An element with its attributes, children and captured form state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementNode {
    pub node_name: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
    pub checked: Option<bool>,
    pub selected: Option<bool>,
    pub value: Option<FormValue>,
}

/// Payload of a text or comment node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterData {
    pub data: String,
}

/// Live `value` of a form control at scrape time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    Number(f64),
}

impl FormValue {
    /// Interpret the value as a positive integer id, if it is one.
    pub fn as_id(&self) -> Option<u64> {
        match self {
            FormValue::Text(s) => s.trim().parse().ok(),
            FormValue::Number(n) if n.fract() == 0.0 && *n >= 0.0 => Some(*n as u64),
            FormValue::Number(_) => None,
        }
    }
}

impl std::fmt::Display for FormValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormValue::Text(s) => f.write_str(s),
            FormValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl Node {
    /// Build an element node with the given attributes and children.
    pub fn element<K, V>(
        node_name: impl Into<String>,
        attributes: impl IntoIterator<Item = (K, V)>,
        children: Vec<Node>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Node::Element(ElementNode {
            node_name: node_name.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            children,
            ..ElementNode::default()
        })
    }

    /// Build a text node.
    pub fn text(data: impl Into<String>) -> Self {
        Node::Text(CharacterData { data: data.into() })
    }

    /// Build a comment node.
    pub fn comment(data: impl Into<String>) -> Self {
        Node::Comment(CharacterData { data: data.into() })
    }

    /// Tag name for elements, `#text` / `#comment` for character data.
    pub fn node_name(&self) -> &str {
        match self {
            Node::Element(el) => &el.node_name,
            Node::Text(_) => TEXT_NODE_NAME,
            Node::Comment(_) => COMMENT_NODE_NAME,
        }
    }

    /// Children of an element; character data has none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(el) => &el.children,
            Node::Text(_) | Node::Comment(_) => &[],
        }
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementNode> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Character data payload of a text or comment node.
    pub fn data(&self) -> Option<&str> {
        match self {
            Node::Text(cd) | Node::Comment(cd) => Some(&cd.data),
            Node::Element(_) => None,
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Node::Comment(_))
    }

    /// True for text nodes that are empty or contain only whitespace.
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Node::Text(cd) if cd.data.trim().is_empty())
    }

    /// Value of the `class` attribute, if this is an element carrying one.
    pub fn class_name(&self) -> Option<&str> {
        self.as_element().and_then(|el| el.attr("class"))
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(Node::subtree_len).sum::<usize>()
    }
}

impl ElementNode {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }
}

/// Wire shape shared by element and character-data nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    node_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attributes: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    child_nodes: Option<Vec<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    checked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<FormValue>,
}

impl TryFrom<RawNode> for Node {
    type Error = ScreenDiffError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        let is_character_data =
            raw.node_name == TEXT_NODE_NAME || raw.node_name == COMMENT_NODE_NAME;
        if !is_character_data {
            return Ok(Node::Element(ElementNode {
                node_name: raw.node_name,
                attributes: raw.attributes.unwrap_or_default(),
                children: raw.child_nodes.unwrap_or_default(),
                checked: raw.checked,
                selected: raw.selected,
                value: raw.value,
            }));
        }

        if raw.child_nodes.as_ref().is_some_and(|c| !c.is_empty()) {
            return Err(ScreenDiffError::MalformedNode {
                node_name: raw.node_name,
                reason: "character data cannot have children".to_string(),
            });
        }
        let Some(data) = raw.data else {
            return Err(ScreenDiffError::MalformedNode {
                node_name: raw.node_name,
                reason: "missing `data`".to_string(),
            });
        };

        let cd = CharacterData { data };
        if raw.node_name == TEXT_NODE_NAME {
            Ok(Node::Text(cd))
        } else {
            Ok(Node::Comment(cd))
        }
    }
}

impl From<Node> for RawNode {
    fn from(node: Node) -> Self {
        match node {
            Node::Element(el) => RawNode {
                node_name: el.node_name,
                attributes: (!el.attributes.is_empty()).then_some(el.attributes),
                child_nodes: (!el.children.is_empty()).then_some(el.children),
                data: None,
                checked: el.checked,
                selected: el.selected,
                value: el.value,
            },
            Node::Text(cd) => RawNode::character_data(TEXT_NODE_NAME, cd.data),
            Node::Comment(cd) => RawNode::character_data(COMMENT_NODE_NAME, cd.data),
        }
    }
}

impl RawNode {
    fn character_data(node_name: &str, data: String) -> Self {
        RawNode {
            node_name: node_name.to_string(),
            attributes: None,
            child_nodes: None,
            data: Some(data),
            checked: None,
            selected: None,
            value: None,
        }
    }
}
