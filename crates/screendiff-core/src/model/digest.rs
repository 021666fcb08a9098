//! Content digest of a (normalized) tree.
//!
//! The digest is a SHA-256 over the node wire encoding, which carries node
//! kinds, child boundaries, character data and captured form state. Trees
//! whose encodings differ get different digests, so equal digests mean the
//! trees are equal.

use crate::errors::Result;
use crate::model::Node;
use sha2::{Digest, Sha256};

/// SHA-256 hex digest of `node`.
///
/// # Errors
///
/// Returns `ERR_SERIALIZATION` if the tree cannot be encoded.
pub fn tree_digest(node: &Node) -> Result<String> {
    let canonical = serde_json::to_vec(node)?;
    Ok(hex::encode(Sha256::digest(&canonical)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FormValue;

    fn sample(text: &str) -> Node {
        Node::element("DIV", [("class", "box")], vec![Node::text(text)])
    }

    fn div(children: Vec<Node>) -> Node {
        Node::element("DIV", Vec::<(String, String)>::new(), children)
    }

    #[test]
    fn test_digest_is_sha256_hex() {
        let digest = tree_digest(&sample("a")).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_equal_trees_share_digest() {
        assert_eq!(
            tree_digest(&sample("a")).unwrap(),
            tree_digest(&sample("a")).unwrap()
        );
        assert_ne!(
            tree_digest(&sample("a")).unwrap(),
            tree_digest(&sample("b")).unwrap()
        );
    }

    #[test]
    fn test_form_state_changes_digest() {
        let plain = Node::element("INPUT", [("type", "checkbox")], vec![]);
        let mut checked = plain.clone();
        if let Some(el) = checked.as_element_mut() {
            el.checked = Some(true);
        }
        assert_ne!(tree_digest(&plain).unwrap(), tree_digest(&checked).unwrap());

        let mut valued = plain.clone();
        if let Some(el) = valued.as_element_mut() {
            el.value = Some(FormValue::Text("a".to_string()));
        }
        assert_ne!(tree_digest(&checked).unwrap(), tree_digest(&valued).unwrap());
    }

    #[test]
    fn test_markup_lookalikes_get_distinct_digests() {
        let element = div(vec![Node::element(
            "BR",
            Vec::<(String, String)>::new(),
            vec![],
        )]);
        let text = div(vec![Node::text("<br>")]);
        assert_ne!(tree_digest(&element).unwrap(), tree_digest(&text).unwrap());

        let joined = div(vec![Node::text("a\nb")]);
        let split = div(vec![Node::text("a"), Node::text("b")]);
        assert_ne!(tree_digest(&joined).unwrap(), tree_digest(&split).unwrap());

        let quoted = Node::element("P", [("title", "x\"\nid=\"y")], vec![]);
        let two_attrs = Node::element("P", [("title", "x"), ("id", "y")], vec![]);
        assert_ne!(
            tree_digest(&quoted).unwrap(),
            tree_digest(&two_attrs).unwrap()
        );
    }
}
