pub mod digest;
pub mod node;

pub use digest::tree_digest;
pub use node::{
    Attributes, CharacterData, ElementNode, FormValue, Node, COMMENT_NODE_NAME, TEXT_NODE_NAME,
};
