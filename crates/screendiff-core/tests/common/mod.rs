use screendiff_core::{Node, NormalizationContext, Side};

pub const CURRENT_MAIN: u64 = 101;
pub const CURRENT_SUB: u64 = 102;
pub const PREVIEW_MAIN: u64 = 201;
pub const PREVIEW_SUB: u64 = 202;

/// Context for `side` with the fixture app ids and script bodies ignored
#[allow(dead_code)]
pub fn ctx(side: Side) -> NormalizationContext {
    match side {
        Side::Current => NormalizationContext::new(side, CURRENT_MAIN, CURRENT_SUB, true),
        Side::Preview => NormalizationContext::new(side, PREVIEW_MAIN, PREVIEW_SUB, true),
    }
}

/// Element shorthand for fixtures
#[allow(dead_code)]
pub fn el(tag: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Node {
    Node::element(tag, attrs.iter().copied(), children)
}

/// Attribute value of an element node, panicking on character data
#[allow(dead_code)]
pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    node.as_element().expect("element node").attr(name)
}

/// A small screen exercising most tag rules
#[allow(dead_code)]
pub fn sample_screen(main_app_id: u64, posted: &str) -> Node {
    let app_href = format!("/k/{main_app_id}/show#record=12");
    let app_value = main_app_id.to_string();
    el(
        "HTML",
        &[],
        vec![
            el(
                "HEAD",
                &[],
                vec![
                    el(
                        "LINK",
                        &[("rel", "stylesheet"), ("href", "/static/k/23.4.1_8812/desktop.css")],
                        vec![],
                    ),
                    el(
                        "SCRIPT",
                        &[("src", "https://static.cybozu.com/k/kintone_23.4.1_8812/app.js")],
                        vec![Node::text("window.__boot = 1;")],
                    ),
                ],
            ),
            Node::comment("rendered by node-7"),
            el(
                "BODY",
                &[],
                vec![
                    Node::text("\n    "),
                    el("A", &[("href", app_href.as_str())], vec![Node::text("Open record")]),
                    el("A", &[("href", "/k/#/space/42")], vec![Node::text("Space")]),
                    el(
                        "INPUT",
                        &[("type", "hidden"), ("name", "app"), ("value", app_value.as_str())],
                        vec![],
                    ),
                    el("DIV", &[("id", "5501_3_html5")], vec![Node::text("x")]),
                    el(
                        "SPAN",
                        &[("class", "ocean-space-thread-photo"), ("style", "background-image: url(/u/9.png);")],
                        vec![],
                    ),
                    el("P", &[], vec![Node::text(posted)]),
                ],
            ),
        ],
    )
}
