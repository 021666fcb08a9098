use screendiff_core::errors::{ExError, ExErrorKind};
use screendiff_core::{DiffOperation, EnvironmentConfig, Node, Result};
use screendiff_engine::{MarkupParser, TreeDiffer};
use screendiff_store::{ArtifactStore, FsArtifactStore};
use std::cell::Cell;
use std::collections::HashMap;

pub const DATE: &str = "20240105";

/// Reads trees serialized in the node wire shape instead of real markup
pub struct JsonParser;

impl MarkupParser for JsonParser {
    fn parse(&self, markup: &str) -> Result<Node> {
        serde_json::from_str(markup)
            .map_err(|e| ExError::new(ExErrorKind::Parse).with_message(e.to_string()))
    }
}

/// Replaces the whole root when the trees differ; counts its calls
#[derive(Default)]
pub struct RootDiffer {
    pub calls: Cell<usize>,
    pub always_empty: bool,
}

impl TreeDiffer for RootDiffer {
    fn diff(&self, current: &Node, preview: &Node) -> Result<Vec<DiffOperation>> {
        self.calls.set(self.calls.get() + 1);
        if self.always_empty || current == preview {
            return Ok(vec![]);
        }
        Ok(vec![DiffOperation::ReplaceElement {
            route: vec![],
            old_value: Some(current.clone()),
            new_value: Some(preview.clone()),
        }])
    }
}

#[allow(dead_code)]
pub fn config() -> EnvironmentConfig {
    let vars: HashMap<String, String> = [
        ("SCREENDIFF_CURRENT_MAIN_APP_ID", "101"),
        ("SCREENDIFF_CURRENT_SUB_APP_ID", "102"),
        ("SCREENDIFF_PREVIEW_MAIN_APP_ID", "201"),
        ("SCREENDIFF_PREVIEW_SUB_APP_ID", "202"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    EnvironmentConfig::from_vars(vars).unwrap()
}

/// A screen linking to its own main app, with one paragraph of text
#[allow(dead_code)]
pub fn screen(main_app_id: u64, record: u64, paragraph: &str) -> Node {
    let href = format!("/k/{main_app_id}/show#record={record}");
    Node::element(
        "BODY",
        Vec::<(String, String)>::new(),
        vec![
            Node::element("A", [("href", href.as_str())], vec![Node::text("Open")]),
            Node::element(
                "P",
                Vec::<(String, String)>::new(),
                vec![Node::text(paragraph)],
            ),
        ],
    )
}

#[allow(dead_code)]
pub fn put_capture(store: &FsArtifactStore, screen_name: &str, side: &str, tree: &Node) {
    let key = format!("html/{DATE}/{screen_name}-{side}.html");
    store
        .write_text(&key, &serde_json::to_string(tree).unwrap())
        .unwrap();
}
