//! Text rendering of diff operations and node subtrees.
//!
//! Output is deterministic: identical inputs always produce byte-identical
//! text. Downstream truncation and alerting rely on that.

use super::model::DiffOperation;
use crate::model::Node;
use std::fmt::{self, Write as _};

const REMOVED: &str = "- ";
const ADDED: &str = "+ ";

/// Leading-whitespace configuration: the current offset and the step added
/// per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndentConfig {
    offset: usize,
    size: usize,
}

impl IndentConfig {
    pub const fn new(offset: usize, size: usize) -> Self {
        Self { offset, size }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Config for one nesting level down.
    pub fn deeper(&self) -> Self {
        Self::new(self.offset + self.size, self.size)
    }
}

/// Renders as `offset` spaces.
impl fmt::Display for IndentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.offset)
    }
}

/// Pretty-print `node` as markup, every line starting with `prefix`.
///
/// Elements open on their own line; each attribute gets a line one level
/// deeper followed by a closing `>` line. Children render one level deeper
/// and a closing tag follows only when there were children. Tag names are
/// lower-cased.
pub fn to_markup(node: &Node, prefix: &str, indent: IndentConfig) -> String {
    let mut out = String::new();
    write_markup(&mut out, node, prefix, indent);
    out
}

fn write_markup(out: &mut String, node: &Node, prefix: &str, indent: IndentConfig) {
    match node {
        Node::Text(cd) | Node::Comment(cd) => {
            let continuation = format!("\n{prefix}");
            let text = cd
                .data
                .replace("\r\n", "\n")
                .replace('\r', "\n")
                .replace('\n', &continuation);
            let _ = writeln!(out, "{prefix}{indent}{text}");
        }
        Node::Element(el) => {
            let tag = el.node_name.to_lowercase();
            let deeper = indent.deeper();
            let _ = write!(out, "{prefix}{indent}<{tag}");
            if el.attributes.is_empty() {
                out.push_str(">\n");
            } else {
                for (name, value) in &el.attributes {
                    let _ = write!(out, "\n{prefix}{deeper}{name}=\"{value}\"");
                }
                let _ = writeln!(out, "\n{prefix}{indent}>");
            }
            if !el.children.is_empty() {
                for child in &el.children {
                    write_markup(out, child, prefix, deeper);
                }
                let _ = writeln!(out, "{prefix}{indent}</{tag}>");
            }
        }
    }
}

/// Render `operations` as a unified-diff-style report.
///
/// Each operation contributes an `@@ <action> @@` header followed by its
/// `-`/`+` lines. Relocations and form-state or comment changes are reported
/// by their header alone. Operations missing the fields their kind needs
/// contribute nothing at all.
pub fn render_text(operations: &[DiffOperation], indent: IndentConfig) -> String {
    operations
        .iter()
        .filter_map(|op| render_operation(op, indent))
        .collect()
}

fn render_operation(op: &DiffOperation, indent: IndentConfig) -> Option<String> {
    let body = match op {
        DiffOperation::ModifyAttribute {
            name: Some(name),
            old_value: Some(old),
            new_value: Some(new),
            ..
        } => format!("{REMOVED}{name}=\"{old}\"\n{ADDED}{name}=\"{new}\"\n"),
        DiffOperation::AddAttribute {
            name: Some(name),
            value: Some(value),
            ..
        } => format!("{ADDED}{name}=\"{value}\"\n"),
        DiffOperation::RemoveAttribute {
            name: Some(name),
            value: Some(value),
            ..
        } => format!("{REMOVED}{name}=\"{value}\"\n"),
        DiffOperation::ModifyTextElement {
            old_value: Some(old),
            new_value: Some(new),
            ..
        } => replacement(old, new),
        DiffOperation::AddTextElement {
            value: Some(value), ..
        } => format!("{ADDED}{value}\n"),
        DiffOperation::RemoveTextElement {
            value: Some(value), ..
        } => format!("{REMOVED}{value}\n"),
        DiffOperation::ReplaceElement {
            old_value: Some(old),
            new_value: Some(new),
            ..
        } => to_markup(old, REMOVED, indent) + &to_markup(new, ADDED, indent),
        DiffOperation::AddElement {
            element: Some(element),
            ..
        } => to_markup(element, ADDED, indent),
        DiffOperation::RemoveElement {
            element: Some(element),
            ..
        } => to_markup(element, REMOVED, indent),
        // Header only, whatever the payload.
        DiffOperation::RelocateGroup { .. }
        | DiffOperation::ModifyValue { .. }
        | DiffOperation::ModifyChecked { .. }
        | DiffOperation::ModifySelected { .. }
        | DiffOperation::ModifyComment { .. } => String::new(),
        _ => return None,
    };
    Some(format!("@@ {} @@\n{}", op.kind(), body))
}

fn replacement(old: impl fmt::Display, new: impl fmt::Display) -> String {
    format!("{REMOVED}{old}\n{ADDED}{new}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_display_and_deeper() {
        let indent = IndentConfig::new(1, 2);
        assert_eq!(indent.to_string(), " ");
        assert_eq!(indent.deeper(), IndentConfig::new(3, 2));
        assert_eq!(indent.deeper().to_string(), "   ");
    }

    #[test]
    fn test_markup_without_attributes_closes_inline() {
        let node = Node::element("P", Vec::<(String, String)>::new(), vec![]);
        assert_eq!(to_markup(&node, "", IndentConfig::new(0, 2)), "<p>\n");
    }

    #[test]
    fn test_markup_layout() {
        let node = Node::element(
            "DIV",
            [("class", "box"), ("id", "main")],
            vec![Node::element("SPAN", Vec::<(String, String)>::new(), vec![Node::text("hi")])],
        );
        let expected = "\
+ <div
+   class=\"box\"
+   id=\"main\"
+ >
+   <span>
+     hi
+   </span>
+ </div>
";
        assert_eq!(to_markup(&node, "+ ", IndentConfig::new(0, 2)), expected);
    }

    #[test]
    fn test_text_line_breaks_reindent_to_prefix() {
        let node = Node::text("a\r\nb\rc\nd");
        assert_eq!(
            to_markup(&node, "- ", IndentConfig::new(2, 2)),
            "-   a\n- b\n- c\n- d\n"
        );
    }

    #[test]
    fn test_relocate_renders_header_only() {
        let op = DiffOperation::RelocateGroup {
            route: vec![0],
            group_length: Some(1),
            from: Some(0),
            to: Some(2),
        };
        assert_eq!(
            render_text(&[op], IndentConfig::default()),
            "@@ relocateGroup @@\n"
        );
    }

    #[test]
    fn test_form_state_kinds_render_header_only() {
        let ops = [
            DiffOperation::ModifyChecked {
                route: vec![],
                old_value: Some(false),
                new_value: Some(true),
            },
            DiffOperation::ModifyValue {
                route: vec![],
                old_value: Some(crate::model::FormValue::Number(3.0)),
                new_value: Some(crate::model::FormValue::Text("x".to_string())),
            },
        ];
        assert_eq!(
            render_text(&ops, IndentConfig::default()),
            "@@ modifyChecked @@\n@@ modifyValue @@\n"
        );
    }
}
