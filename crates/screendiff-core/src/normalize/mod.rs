//! Normalization engine.
//!
//! Rewrites a parsed tree in place so that markup which only reflects when
//! or where a screen was rendered (timestamps, generated ids, environment
//! app ids, asset build stamps, whitespace, comments) collapses to stable
//! placeholder tokens. Two renders of an unchanged screen normalize to equal
//! trees.
//!
//! ## Entry point
//!
//! ```ignore
//! use screendiff_core::normalize::{normalize, NormalizationContext, Side};
//!
//! let ctx = NormalizationContext::new(Side::Preview, main_app_id, sub_app_id, true);
//! normalize(&mut tree, &ctx);
//! ```
//!
//! ## Guarantees
//!
//! - **Idempotence**: normalizing an already normalized tree changes nothing.
//! - **Erasure**: no comment and no whitespace-only text survives as a child.
//! - **Infallible**: rules skip silently when the attributes they key on are absent.

pub mod context;
mod patterns;
pub mod placeholders;
mod rules;
mod table;

pub use context::{NormalizationContext, Side};

use crate::model::Node;
use patterns::POSTED_AT;
use regex::Captures;
use tracing::debug;

/// Normalize `tree` in place for the environment described by `ctx`.
pub fn normalize(tree: &mut Node, ctx: &NormalizationContext) {
    let removed = visit(tree, ctx);
    debug!(
        side = ctx.side().as_str(),
        removed_nodes = removed,
        "tree normalized"
    );
}

/// Returns the number of nodes removed below `node`.
fn visit(node: &mut Node, ctx: &NormalizationContext) -> usize {
    match node {
        Node::Text(cd) | Node::Comment(cd) => {
            redact_timestamps(&mut cd.data);
            0
        }
        Node::Element(el) => {
            let before: usize = el.children.iter().map(Node::subtree_len).sum();
            el.children
                .retain(|child| !child.is_comment() && !child.is_blank_text());

            if let Some(rule) = rules::rule_for(&el.node_name) {
                rule(el, ctx);
            }

            let kept: usize = el.children.iter().map(Node::subtree_len).sum();
            let removed_here = before - kept;
            removed_here
                + el
                    .children
                    .iter_mut()
                    .map(|child| visit(child, ctx))
                    .sum::<usize>()
        }
    }
}

fn redact_timestamps(data: &mut String) {
    let redacted = POSTED_AT.replace_all(data, |caps: &Captures<'_>| {
        format!("{}{}", &caps[1], placeholders::DATE_AND_TIME)
    });
    if let std::borrow::Cow::Owned(replaced) = redacted {
        *data = replaced;
    }
}
