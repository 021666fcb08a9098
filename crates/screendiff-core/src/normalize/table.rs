//! Class-keyed rewrite tables.
//!
//! Each tag that keys rules off its `class` attribute owns one table. Exact
//! entries win over fallback (prefix / pattern) entries; among fallbacks the
//! first match wins. At most one entry applies per element.

use super::patterns::{
    BACKGROUND_IMAGE_URL, FIELD_ID_PREFIX, HTML5_CONTAINER_ID, READ_ONLY_INPUT_CLASS,
    UPLOAD_BUTTON_ID_PREFIX,
};
use super::placeholders as ph;
use crate::model::ElementNode;
use regex::{NoExpand, Regex};

/// Patterns the tables refer to, resolved lazily to their compiled regex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pattern {
    BackgroundImageUrl,
    FieldIdPrefix,
    Html5ContainerId,
    ReadOnlyInputClass,
    UploadButtonIdPrefix,
}

impl Pattern {
    fn regex(self) -> &'static Regex {
        match self {
            Pattern::BackgroundImageUrl => &BACKGROUND_IMAGE_URL,
            Pattern::FieldIdPrefix => &FIELD_ID_PREFIX,
            Pattern::Html5ContainerId => &HTML5_CONTAINER_ID,
            Pattern::ReadOnlyInputClass => &READ_ONLY_INPUT_CLASS,
            Pattern::UploadButtonIdPrefix => &UPLOAD_BUTTON_ID_PREFIX,
        }
    }
}

/// How an entry is selected by the element's `class` value.
pub(crate) enum ClassMatch {
    Exact(&'static str),
    Prefix(&'static str),
    Pattern(Pattern),
}

impl ClassMatch {
    fn is_exact(&self) -> bool {
        matches!(self, ClassMatch::Exact(_))
    }

    fn matches(&self, class: &str) -> bool {
        match self {
            ClassMatch::Exact(s) => class == *s,
            ClassMatch::Prefix(p) => class.starts_with(p),
            ClassMatch::Pattern(pattern) => pattern.regex().is_match(class),
        }
    }
}

/// One in-place edit applied to a matched element.
pub(crate) enum Rewrite {
    /// Overwrite (or insert) an attribute.
    Set(&'static str, &'static str),
    /// Overwrite an attribute only when it already exists.
    SetIfPresent(&'static str, &'static str),
    /// Replace the first match of a pattern inside an existing attribute.
    Replace(&'static str, Pattern, &'static str),
    /// Drop an attribute when it holds exactly this value.
    RemoveIfEquals(&'static str, &'static str),
    DropChildren,
    DropChildrenWithClass(&'static str),
    DropChildrenWithTag(&'static str),
}

impl Rewrite {
    pub(crate) fn apply(&self, el: &mut ElementNode) {
        match self {
            Rewrite::Set(attr, value) => el.set_attr(attr, *value),
            Rewrite::SetIfPresent(attr, value) => {
                if el.has_attr(attr) {
                    el.set_attr(attr, *value);
                }
            }
            Rewrite::Replace(attr, pattern, with) => replace_in_attr(el, attr, pattern.regex(), with),
            Rewrite::RemoveIfEquals(attr, value) => {
                if el.attr(attr) == Some(*value) {
                    el.attributes.remove(*attr);
                }
            }
            Rewrite::DropChildren => el.children.clear(),
            Rewrite::DropChildrenWithClass(class) => {
                el.children.retain(|child| child.class_name() != Some(*class))
            }
            Rewrite::DropChildrenWithTag(tag) => {
                el.children.retain(|child| child.node_name() != *tag)
            }
        }
    }
}

/// A table row: selector plus the edits it triggers.
pub(crate) struct ClassRule {
    pub(crate) matcher: ClassMatch,
    pub(crate) rewrites: &'static [Rewrite],
}

/// Replace the first match of `re` inside `attr`, leaving it untouched when
/// absent. The replacement is taken literally.
pub(crate) fn replace_in_attr(el: &mut ElementNode, attr: &str, re: &Regex, with: &str) {
    let Some(current) = el.attributes.get_mut(attr) else {
        return;
    };
    if let std::borrow::Cow::Owned(replaced) = re.replace(current, NoExpand(with)) {
        *current = replaced;
    }
}

/// Look up the entry for `el`'s class and apply its rewrites.
///
/// Returns whether an entry matched.
pub(crate) fn apply_class_rules(el: &mut ElementNode, table: &[ClassRule]) -> bool {
    let Some(class) = el.attr("class") else {
        return false;
    };
    let found = table
        .iter()
        .filter(|rule| rule.matcher.is_exact())
        .chain(table.iter().filter(|rule| !rule.matcher.is_exact()))
        .find(|rule| rule.matcher.matches(class));
    let Some(rule) = found else {
        return false;
    };
    for rewrite in rule.rewrites {
        rewrite.apply(el);
    }
    true
}

const fn exact(class: &'static str, rewrites: &'static [Rewrite]) -> ClassRule {
    ClassRule {
        matcher: ClassMatch::Exact(class),
        rewrites,
    }
}

const fn prefix(class: &'static str, rewrites: &'static [Rewrite]) -> ClassRule {
    ClassRule {
        matcher: ClassMatch::Prefix(class),
        rewrites,
    }
}

const USER_ICON_STYLE: &[Rewrite] = &[Rewrite::Replace(
    "style",
    Pattern::BackgroundImageUrl,
    ph::USER_ICON_BACKGROUND,
)];

pub(crate) static ANCHOR_RULES: &[ClassRule] = &[
    exact("gaia-header-img gaia-header-img-logo", &[Rewrite::Set("href", ph::PORTAL_URL)]),
    exact("gaia-argoui-space-spacelayout-title", &[Rewrite::Set("href", ph::SPACE_ID_URL)]),
    exact("gaia-argoui-app-titlebar-content", &[Rewrite::Set("href", ph::SPACE_ID_URL)]),
    exact(
        "gaia-argoui-app-breadcrumb-item gaia-argoui-app-breadcrumb-link",
        &[Rewrite::Set("href", ph::SPACE_ID_URL)],
    ),
    exact("gaia-argoui-appscrollinglist-item", &[Rewrite::Set("href", ph::APP_ID_URL)]),
    exact("gaia-argoui-panelscrollinglist-item", &[Rewrite::Set("href", ph::USER_ID_URL)]),
    exact("ocean-space-thread-update", &[Rewrite::Set("href", ph::USER_ID_URL)]),
    exact("ocean-space-thread-edit", &[Rewrite::Set("href", ph::COMMENT_ID_URL)]),
    exact(
        "gaia-argoui-app-menu-add gaia-argoui-app-menu",
        &[Rewrite::Set("href", ph::ADD_RECORD_URL)],
    ),
    exact(
        "gaia-argoui-app-menu-settings gaia-argoui-app-menu",
        &[Rewrite::Set("href", ph::APP_SETTING_URL)],
    ),
    exact("recordlist-show-gaia", &[Rewrite::Set("href", ph::SHOW_RECORD_DETAILS_URL)]),
    exact(
        "plupload-button-cybozu",
        &[Rewrite::Replace("id", Pattern::UploadButtonIdPrefix, ph::ATTACHMENT_UPLOADING_BUTTON_ID)],
    ),
    prefix(
        "goog-tab sidebar-tab-comments-gaia",
        &[Rewrite::Set("id", ph::SIDEBAR_TAB_COMMENTS_ID)],
    ),
    prefix(
        "goog-tab sidebar-tab-history-gaia",
        &[Rewrite::Set("id", ph::SIDEBAR_TAB_HISTORY_ID)],
    ),
];

pub(crate) static LIST_ITEM_RULES: &[ClassRule] = &[
    prefix(
        "gaia-argoui-appscrollinglist-item-outer",
        &[
            Rewrite::Set("class", ph::APP_LIST_ITEM_CLASS),
            Rewrite::Set("id", ph::APP_ID),
        ],
    ),
    prefix(
        "gaia-argoui-panelscrollinglist-item-outer-USER",
        &[
            Rewrite::Set("class", ph::USER_LIST_ITEM_CLASS),
            Rewrite::Set("id", ph::USER_ID),
        ],
    ),
];

pub(crate) static TABLE_CELL_RULES: &[ClassRule] = &[prefix(
    "goog-date-picker-date",
    &[Rewrite::Set("id", ph::DATE_PICKER_DATE_ID)],
)];

pub(crate) static SPAN_RULES: &[ClassRule] = &[
    exact("gaia-header-header-user-photo", USER_ICON_STYLE),
    exact("gaia-argoui-panelscrollinglist-icon", USER_ICON_STYLE),
    exact("ocean-space-thread-photo", USER_ICON_STYLE),
    exact("entity-list-item-USER-cybozu entity-user-cybozu", USER_ICON_STYLE),
    exact("gaia-argoui-select-label", &[Rewrite::Set("id", ph::APP_SELECT_LABEL_ID)]),
    exact(
        "gaia-argoui-forms-datepicker-select-label",
        &[Rewrite::Set("id", ph::DATEPICKER_SELECT_LABEL_ID)],
    ),
    exact("ocean-ui-dialog-title-text", &[Rewrite::Set("id", ph::DIALOG_TITLE_TEXT_ID)]),
    ClassRule {
        matcher: ClassMatch::Pattern(Pattern::ReadOnlyInputClass),
        rewrites: &[Rewrite::Set("id", ph::INPUT_READ_ONLY_ID)],
    },
];

pub(crate) static DIVISION_RULES: &[ClassRule] = &[
    exact("gaia-header-header-service", &[Rewrite::DropChildren]),
    exact(
        "sc-camqpD icpmLS__right",
        &[Rewrite::DropChildrenWithClass("sc-kbdlSk jWGHLY")],
    ),
    exact("gaia-header-toolbar-links", &[Rewrite::DropChildrenWithTag("BUTTON")]),
    exact("ocean-ui-comments-commentbase-usericon", USER_ICON_STYLE),
    exact(
        "plupload html5",
        &[Rewrite::Replace("id", Pattern::Html5ContainerId, ph::ATTACHMENT_CONTAINER_ID)],
    ),
    exact("editor-toolbar-cybozu", &[Rewrite::Set("id", ph::EDITOR_TOOLBAR_ID)]),
    exact(
        "editor-cybozu cybozu-editor-seamless editable",
        &[Rewrite::Set("id", ph::EDITOR_ID)],
    ),
    exact(
        "goog-inline-block goog-toolbar-menu-button-caption",
        &[Rewrite::SetIfPresent("id", ph::TOOLBAR_MENU_CAPTION_ID)],
    ),
    exact("ocean-ui-dialog-content", &[Rewrite::Set("id", ph::DIALOG_CONTENT_ID)]),
    exact(
        "gaia-argoui-app-pager",
        &[Rewrite::RemoveIfEquals("style", "position: relative;")],
    ),
    prefix(
        "ocean-ui-comments-commentbase ocean-ui-comments-post ocean-ui-comments-post-id-",
        &[Rewrite::Set("class", ph::COMMENT_POST_CLASS)],
    ),
    prefix(
        "input-file-",
        &[Rewrite::Replace("id", Pattern::FieldIdPrefix, ph::ATTACHMENT_ID)],
    ),
    prefix("goog-menuitem goog-option", &[Rewrite::Set("id", ph::MENU_OPTION_ID)]),
];

pub(crate) static INPUT_RULES: &[ClassRule] = &[
    exact("input-text-cybozu", &[Rewrite::Set("id", ph::INPUT_TEXT_ID)]),
    exact(
        "input-text-cybozu input-number-cybozu",
        &[Rewrite::Set("id", ph::INPUT_NUMBER_ID)],
    ),
    exact("input-time-text-cybozu", &[Rewrite::Set("id", ph::INPUT_TIME_TEXT_ID)]),
    exact(
        "input-text-cybozu input-link-cybozu",
        &[Rewrite::Set("id", ph::INPUT_LINK_ID)],
    ),
];
