//! Per-tag rewrite functions and the dispatch table that selects them.

use super::context::NormalizationContext;
use super::patterns::{
    COMMENT_PERMALINK, COMMENT_TITLE_DATE, HREF_APP, HREF_PEOPLE, HREF_PORTAL, HREF_RECORD,
    HREF_SPACE, HREF_SPACE_THREAD, HTML5_RUNTIME_ID, LEADING_NUMBER, PRODUCT_VERSION,
    TEXTAREA_ID, FIELD_ID_PREFIX,
};
use super::placeholders as ph;
use super::table::{
    apply_class_rules, replace_in_attr, ANCHOR_RULES, DIVISION_RULES, INPUT_RULES,
    LIST_ITEM_RULES, SPAN_RULES, TABLE_CELL_RULES,
};
use crate::model::{ElementNode, FormValue};
use regex::NoExpand;

pub(crate) type TagRule = fn(&mut ElementNode, &NormalizationContext);

/// Tag name to rule. Tag names are matched exactly as the DOM reports them.
pub(crate) static TAG_RULES: &[(&str, TagRule)] = &[
    ("LINK", link),
    ("A", anchor),
    ("LI", list_item),
    ("TD", table_cell),
    ("IMG", image),
    ("SPAN", span),
    ("DIV", division),
    ("INPUT", input),
    ("LABEL", label),
    ("TEXTAREA", textarea),
    ("SCRIPT", script),
];

pub(crate) fn rule_for(tag: &str) -> Option<TagRule> {
    TAG_RULES
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, rule)| *rule)
}

const START_BUTTON_CLASS: &str = "sc-satoz RHzku";
const USER_PHOTO_IMG_CLASS: &str = "sc-bOhtcR fJzNiK__photo";
const VERSIONED_SCRIPT_PREFIX: &str = "https://static.cybozu.com/k/kintone_";

fn link(el: &mut ElementNode, _ctx: &NormalizationContext) {
    if matches!(el.attr("rel"), Some("apple-touch-icon" | "stylesheet")) {
        replace_in_attr(el, "href", &PRODUCT_VERSION, ph::PRODUCT_VERSION);
    }
}

fn anchor(el: &mut ElementNode, ctx: &NormalizationContext) {
    apply_class_rules(el, ANCHOR_RULES);

    if let Some(href) = el.attr("href") {
        if let Some(rewritten) = rewrite_href(href, ctx) {
            el.set_attr("href", rewritten);
        }
    }

    let is_comment_permalink = el.attr("href").is_some_and(|h| COMMENT_PERMALINK.is_match(h))
        && el.attr("title").is_some_and(|t| COMMENT_TITLE_DATE.is_match(t));
    if is_comment_permalink {
        el.set_attr("href", ph::THREAD_COMMENT_ID);
        el.set_attr("title", ph::DATE);
    }
}

/// Rewrite an in-product link target. The first matching form wins.
fn rewrite_href(href: &str, ctx: &NormalizationContext) -> Option<String> {
    if HREF_PORTAL.is_match(href) {
        return Some(ph::PORTAL_PATH.to_string());
    }
    if HREF_SPACE_THREAD.is_match(href) {
        return Some(
            HREF_SPACE_THREAD
                .replace(href, NoExpand(ph::SPACE_THREAD_PATH))
                .into_owned(),
        );
    }
    if HREF_SPACE.is_match(href) {
        return Some(HREF_SPACE.replace(href, NoExpand(ph::SPACE_PATH)).into_owned());
    }
    if let Some(caps) = HREF_APP.captures(href) {
        let app_path = match caps[1].parse::<u64>() {
            Ok(id) if id == ctx.main_app_id() => ph::MAIN_APP_PATH,
            Ok(id) if id == ctx.sub_app_id() => ph::SUB_APP_PATH,
            _ => ph::OTHER_APP_PATH,
        };
        let rewritten = HREF_APP.replace(href, NoExpand(app_path));
        return Some(
            HREF_RECORD
                .replace(&rewritten, NoExpand(ph::RECORD_QUERY))
                .into_owned(),
        );
    }
    if HREF_PEOPLE.is_match(href) {
        return Some(ph::PEOPLE_PATH.to_string());
    }
    None
}

fn list_item(el: &mut ElementNode, _ctx: &NormalizationContext) {
    apply_class_rules(el, LIST_ITEM_RULES);
    el.children
        .retain(|child| child.class_name() != Some(START_BUTTON_CLASS));
}

fn table_cell(el: &mut ElementNode, _ctx: &NormalizationContext) {
    apply_class_rules(el, TABLE_CELL_RULES);
}

fn image(el: &mut ElementNode, _ctx: &NormalizationContext) {
    let is_logo = el
        .attr("src")
        .is_some_and(|src| src.contains("logo") || src == ph::LOGO_IMG_URL);
    if is_logo {
        el.set_attr("src", ph::LOGO_IMG_URL);
    } else if el.attr("class") == Some(USER_PHOTO_IMG_CLASS)
        || (el.attr("width") == Some("16") && el.attr("height") == Some("16"))
    {
        el.set_attr("src", ph::USER_ICON_URL);
    }
}

fn span(el: &mut ElementNode, _ctx: &NormalizationContext) {
    apply_class_rules(el, SPAN_RULES);
}

fn division(el: &mut ElementNode, _ctx: &NormalizationContext) {
    apply_class_rules(el, DIVISION_RULES);
    html5_runtime_id(el);
    for (attr, placeholder) in [
        ("aria-activedescendant", ph::ARIA_ACTIVEDESCENDANT),
        ("aria-labelledby", ph::ARIA_LABELLEDBY),
    ] {
        if el.has_attr(attr) {
            el.set_attr(attr, placeholder);
        }
    }
}

/// Upload widgets tag their runtime element with `<field>_<n>_html5`.
fn html5_runtime_id(el: &mut ElementNode) {
    if el.attr("id").is_some_and(|id| HTML5_RUNTIME_ID.is_match(id)) {
        el.set_attr("id", ph::ATTACHMENT_HTML5_ID);
    }
}

fn input(el: &mut ElementNode, ctx: &NormalizationContext) {
    html5_runtime_id(el);
    apply_class_rules(el, INPUT_RULES);

    match el.attr("type") {
        Some("hidden") => redact_own_app_id(el, ctx),
        Some("radio" | "checkbox") => {
            if el.has_attr("name") {
                el.set_attr("name", ph::RADIO_CHECKBOX_NAME);
            }
            if el.has_attr("id") {
                el.set_attr("id", ph::RADIO_CHECKBOX_ID);
            }
        }
        _ => {}
    }
}

/// Hidden `app` inputs carry this environment's own app id, both as the
/// attribute and as the captured live value.
fn redact_own_app_id(el: &mut ElementNode, ctx: &NormalizationContext) {
    if el.attr("name") != Some("app") {
        return;
    }
    let owns = |raw: &str| raw.trim().parse::<u64>().is_ok_and(|id| ctx.owns_app(id));
    if el.attr("value").is_some_and(owns) {
        el.set_attr("value", ph::APP_ID);
    }
    if el
        .value
        .as_ref()
        .and_then(FormValue::as_id)
        .is_some_and(|id| ctx.owns_app(id))
    {
        el.value = Some(FormValue::Text(ph::APP_ID.to_string()));
    }
}

fn label(el: &mut ElementNode, _ctx: &NormalizationContext) {
    if el.has_attr("for") {
        el.set_attr("for", ph::LABEL_FOR_ID);
    }
}

fn textarea(el: &mut ElementNode, _ctx: &NormalizationContext) {
    if el.attr("id").is_some_and(|id| TEXTAREA_ID.is_match(id)) {
        replace_in_attr(el, "id", &LEADING_NUMBER, ph::TEXTAREA_ID);
    }
    if el.attr("name").is_some_and(|name| FIELD_ID_PREFIX.is_match(name)) {
        replace_in_attr(el, "name", &LEADING_NUMBER, ph::TEXTAREA_NAME);
    }
}

fn script(el: &mut ElementNode, ctx: &NormalizationContext) {
    if ctx.ignore_script_contents() {
        el.children.clear();
    }
    if el
        .attr("src")
        .is_some_and(|src| src.starts_with(VERSIONED_SCRIPT_PREFIX))
    {
        replace_in_attr(el, "src", &PRODUCT_VERSION, ph::PRODUCT_VERSION);
    }
}
