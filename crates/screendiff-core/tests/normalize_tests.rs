#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{attr, ctx, el, sample_screen, CURRENT_MAIN, PREVIEW_MAIN};
use screendiff_core::{normalize, render_text, FormValue, IndentConfig, Node, Side};

fn normalized(mut tree: Node, side: Side) -> Node {
    normalize(&mut tree, &ctx(side));
    tree
}

fn assert_no_noise_children(node: &Node) {
    for child in node.children() {
        assert!(!child.is_comment(), "comment survived under {}", node.node_name());
        assert!(!child.is_blank_text(), "blank text survived under {}", node.node_name());
        assert_no_noise_children(child);
    }
}

#[test]
fn test_attachment_runtime_div_scenario() {
    let build = || el("DIV", &[("id", "1_2_html5")], vec![Node::text("x")]);
    let first = normalized(build(), Side::Current);
    let second = normalized(build(), Side::Current);

    assert_eq!(attr(&first, "id"), Some("${ATTACHMENT_ID}_html5"));
    assert_eq!(first, second);
    assert_eq!(render_text(&[], IndentConfig::new(0, 2)), "");
}

#[test]
fn test_space_link_scenario() {
    let tree = normalized(el("A", &[("href", "/k/#/space/42")], vec![]), Side::Current);
    assert_eq!(attr(&tree, "href"), Some("/k/#/space/${SPACE_ID}"));

    let other = normalized(el("A", &[("href", "/k/#/space/7")], vec![]), Side::Current);
    assert_eq!(tree, other);
}

#[test]
fn test_script_body_dropped_scenario() {
    let tree = normalized(
        el(
            "SCRIPT",
            &[("type", "text/javascript")],
            vec![Node::text("var csrf = 'a81f';"), Node::text("init();")],
        ),
        Side::Preview,
    );
    assert!(tree.children().is_empty());
    assert_eq!(attr(&tree, "type"), Some("text/javascript"));
}

#[test]
fn test_script_body_kept_when_not_ignored() {
    let mut tree = el("SCRIPT", &[], vec![Node::text("init();")]);
    let keep = screendiff_core::NormalizationContext::new(Side::Current, 1, 2, false);
    normalize(&mut tree, &keep);
    assert_eq!(tree.children(), &[Node::text("init();")]);
}

#[test]
fn test_hidden_app_placeholder_is_stable_across_environments() {
    let current = normalized(
        el("INPUT", &[("type", "hidden"), ("name", "app"), ("value", CURRENT_MAIN.to_string().as_str())], vec![]),
        Side::Current,
    );
    let preview = normalized(
        el("INPUT", &[("type", "hidden"), ("name", "app"), ("value", PREVIEW_MAIN.to_string().as_str())], vec![]),
        Side::Preview,
    );
    assert_eq!(attr(&current, "value"), Some("${APP_ID}"));
    assert_eq!(current, preview);
}

#[test]
fn test_hidden_app_of_other_environment_is_kept() {
    // The preview app id seen from the current side is a real difference.
    let tree = normalized(
        el("INPUT", &[("type", "hidden"), ("name", "app"), ("value", PREVIEW_MAIN.to_string().as_str())], vec![]),
        Side::Current,
    );
    assert_eq!(attr(&tree, "value"), Some(PREVIEW_MAIN.to_string().as_str()));
}

#[test]
fn test_captured_form_value_follows_attribute() {
    let mut input = el("INPUT", &[("type", "hidden"), ("name", "app")], vec![]);
    input.as_element_mut().unwrap().value = Some(FormValue::Number(CURRENT_MAIN as f64));
    let tree = normalized(input, Side::Current);
    assert_eq!(
        tree.as_element().unwrap().value,
        Some(FormValue::Text("${APP_ID}".to_string()))
    );
}

#[test]
fn test_app_links_keyed_by_own_app_ids() {
    let main = normalized(el("A", &[("href", "/k/101/")], vec![]), Side::Current);
    let sub = normalized(el("A", &[("href", "/k/102/")], vec![]), Side::Current);
    let foreign = normalized(el("A", &[("href", "/k/201/")], vec![]), Side::Current);
    assert_eq!(attr(&main, "href"), Some("/k/${MAIN_APP_ID}/"));
    assert_eq!(attr(&sub, "href"), Some("/k/${SUB_APP_ID}/"));
    assert_eq!(attr(&foreign, "href"), Some("/k/${APP_ID}/"));

    let preview_main = normalized(el("A", &[("href", "/k/201/")], vec![]), Side::Preview);
    assert_eq!(attr(&preview_main, "href"), Some("/k/${MAIN_APP_ID}/"));
}

#[test]
fn test_comments_and_blank_text_erased_at_every_level() {
    let tree = normalized(sample_screen(CURRENT_MAIN, "ok"), Side::Current);
    assert_no_noise_children(&tree);
}

#[test]
fn test_non_blank_text_is_kept() {
    let tree = normalized(el("P", &[], vec![Node::text("  a  "), Node::text("")]), Side::Current);
    assert_eq!(tree.children(), &[Node::text("  a  ")]);
}

#[test]
fn test_equivalent_screens_from_both_environments_normalize_equal() {
    let current = normalized(sample_screen(CURRENT_MAIN, "posted 4/1 10:30"), Side::Current);
    let preview = normalized(sample_screen(PREVIEW_MAIN, "posted 12/24 8:05"), Side::Preview);
    assert_eq!(current, preview);
}

#[test]
fn test_posted_timestamp_redacted_in_text() {
    let tree = normalized(el("SPAN", &[], vec![Node::text("4/1 10:30")]), Side::Current);
    assert_eq!(tree.children(), &[Node::text("${DATE_AND_TIME}")]);
}

#[test]
fn test_unmatched_attributes_untouched() {
    let original = el(
        "DIV",
        &[("class", "record-gaia"), ("id", "record-title"), ("style", "width: 10px;")],
        vec![],
    );
    let tree = normalized(original.clone(), Side::Current);
    assert_eq!(tree, original);
}

#[test]
fn test_lowercase_tags_are_not_dispatched() {
    let original = el("div", &[("id", "1_2_html5")], vec![]);
    let tree = normalized(original.clone(), Side::Current);
    assert_eq!(tree, original);
}

#[test]
fn test_header_service_subtree_removed() {
    let tree = normalized(
        el(
            "DIV",
            &[("class", "gaia-header-header-service")],
            vec![el("A", &[("href", "https://other.example/")], vec![Node::text("Mail")])],
        ),
        Side::Current,
    );
    assert!(tree.children().is_empty());
}

#[test]
fn test_list_item_rules() {
    let tree = normalized(
        el(
            "LI",
            &[("class", "gaia-argoui-appscrollinglist-item-outer-81"), ("id", "81")],
            vec![
                el("DIV", &[("class", "sc-satoz RHzku")], vec![]),
                el("A", &[("class", "gaia-argoui-appscrollinglist-item"), ("href", "/k/81/")], vec![]),
            ],
        ),
        Side::Current,
    );
    assert_eq!(attr(&tree, "class"), Some("gaia-argoui-appscrollinglist-item-outer-${APP_ID}"));
    assert_eq!(attr(&tree, "id"), Some("${APP_ID}"));
    assert_eq!(tree.children().len(), 1);
    assert_eq!(attr(&tree.children()[0], "href"), Some("${APP_ID_URL}"));
}

#[test]
fn test_span_user_icon_and_read_only_ids() {
    let icon = normalized(
        el(
            "SPAN",
            &[("class", "gaia-header-header-user-photo"), ("style", "background-image: url(\"/u/1.png\");")],
            vec![],
        ),
        Side::Current,
    );
    assert_eq!(attr(&icon, "style"), Some("background-image: url(${USER_ICON_URL});"));

    let read_only = normalized(
        el("SPAN", &[("class", "inputReadOnly-cybozu"), ("id", ":9a")], vec![]),
        Side::Current,
    );
    assert_eq!(attr(&read_only, "id"), Some("${INPUT_READ_ONLY_CYBOZU_ID}"));
}

#[test]
fn test_division_comment_post_class() {
    let tree = normalized(
        el(
            "DIV",
            &[("class", "ocean-ui-comments-commentbase ocean-ui-comments-post ocean-ui-comments-post-id-5512")],
            vec![],
        ),
        Side::Current,
    );
    assert_eq!(
        attr(&tree, "class"),
        Some("ocean-ui-comments-commentbase ocean-ui-comments-post ocean-ui-comments-post-id-${CONTENTS_ID}")
    );
}

#[test]
fn test_link_version_stamp() {
    let tree = normalized(
        el("LINK", &[("rel", "apple-touch-icon"), ("href", "/k/static/23.4.1_8812/icon.png")], vec![]),
        Side::Current,
    );
    assert_eq!(attr(&tree, "href"), Some("/k/static/${PRODUCT_VERSION}/icon.png"));

    let preload = el("LINK", &[("rel", "preload"), ("href", "/k/static/23.4.1_8812/a.js")], vec![]);
    assert_eq!(normalized(preload.clone(), Side::Current), preload);
}

#[test]
fn test_label_and_table_cell() {
    let label = normalized(el("LABEL", &[("for", ":3r")], vec![]), Side::Current);
    assert_eq!(attr(&label, "for"), Some("${LABEL_FOR_ID}"));

    let cell = normalized(
        el("TD", &[("class", "goog-date-picker-date goog-date-picker-other-month"), ("id", ":4c")], vec![]),
        Side::Current,
    );
    assert_eq!(attr(&cell, "id"), Some("${GOOG_DATE_PICKER_DATE}"));
}

#[test]
fn test_normalize_is_idempotent_on_sample() {
    let once = normalized(sample_screen(CURRENT_MAIN, "9/9 9:09"), Side::Current);
    let twice = normalized(once.clone(), Side::Current);
    assert_eq!(once, twice);
}
