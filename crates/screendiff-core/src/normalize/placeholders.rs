//! Placeholder tokens substituted for volatile values.
//!
//! Every token is a constant: it never embeds any part of the value it
//! replaces, so two renders that differ only in that value compare equal.

pub const DATE_AND_TIME: &str = "${DATE_AND_TIME}";
pub const PRODUCT_VERSION: &str = "${PRODUCT_VERSION}";

// Anchor targets
pub const PORTAL_URL: &str = "${PORTAL_URL}";
pub const SPACE_ID_URL: &str = "${SPACE_ID_URL}";
pub const APP_ID_URL: &str = "${APP_ID_URL}";
pub const USER_ID_URL: &str = "${USER_ID_URL}";
pub const COMMENT_ID_URL: &str = "${COMMENT_ID_URL}";
pub const ADD_RECORD_URL: &str = "${ADD_RECORD_URL}";
pub const APP_SETTING_URL: &str = "${APP_SETTING_URL}";
pub const SHOW_RECORD_DETAILS_URL: &str = "${SHOW_RECORD_DETAILS_URL}";
pub const THREAD_COMMENT_ID: &str = "${THREAD_COMMENT_ID}";
pub const DATE: &str = "${DATE}";
pub const PORTAL_PATH: &str = "/k";
pub const SPACE_THREAD_PATH: &str = "/k/#/space/${SPACE_ID}/thread/${MULTI_THREAD_ID}";
pub const SPACE_PATH: &str = "/k/#/space/${SPACE_ID}";
pub const MAIN_APP_PATH: &str = "/k/${MAIN_APP_ID}";
pub const SUB_APP_PATH: &str = "/k/${SUB_APP_ID}";
pub const OTHER_APP_PATH: &str = "/k/${APP_ID}";
pub const RECORD_QUERY: &str = "record=${RECORD_ID}";
pub const PEOPLE_PATH: &str = "/k/#/people/${LOGIN_NAME}";

// Ids and names
pub const APP_ID: &str = "${APP_ID}";
pub const USER_ID: &str = "${USER_ID}";
pub const APP_LIST_ITEM_CLASS: &str = "gaia-argoui-appscrollinglist-item-outer-${APP_ID}";
pub const USER_LIST_ITEM_CLASS: &str = "gaia-argoui-panelscrollinglist-item-outer-USER-${USER_ID}";
pub const COMMENT_POST_CLASS: &str =
    "ocean-ui-comments-commentbase ocean-ui-comments-post ocean-ui-comments-post-id-${CONTENTS_ID}";
pub const ATTACHMENT_ID: &str = "${ATTACHMENT_ID}";
pub const ATTACHMENT_HTML5_ID: &str = "${ATTACHMENT_ID}_html5";
pub const ATTACHMENT_CONTAINER_ID: &str = "${ATTACHMENT_CONTAINER_ID}-html5-container";
pub const ATTACHMENT_UPLOADING_BUTTON_ID: &str = "${ATTACHMENT_UPLOADING_BUTTON_ID}";
pub const SIDEBAR_TAB_COMMENTS_ID: &str = "${SIDEBAR_TAB_COMMENTS_ID}";
pub const SIDEBAR_TAB_HISTORY_ID: &str = "${SIDEBAR_TAB_HISTORY_ID}";
pub const DATE_PICKER_DATE_ID: &str = "${GOOG_DATE_PICKER_DATE}";
pub const APP_SELECT_LABEL_ID: &str = "${APP_SELECT_LABEL}";
pub const DATEPICKER_SELECT_LABEL_ID: &str = "${DATEPICKER_SELECT_LABEL_ID}";
pub const DIALOG_TITLE_TEXT_ID: &str = "${DIALOG_TITLE_TEXT}";
pub const DIALOG_CONTENT_ID: &str = "${DIALOG_CONTENT_ID}";
pub const INPUT_READ_ONLY_ID: &str = "${INPUT_READ_ONLY_CYBOZU_ID}";
pub const EDITOR_TOOLBAR_ID: &str = "${EDITOR_TOOLBAR_CYBOZU}";
pub const EDITOR_ID: &str = "${EDITOR_CYBOZU}";
pub const TOOLBAR_MENU_CAPTION_ID: &str = "${GOOG_INLINE_BLOCK_ID}";
pub const MENU_OPTION_ID: &str = "${GOOG_OPTION_SELECTED}";
pub const INPUT_TEXT_ID: &str = "${INPUT_TEXT_CYBOZU_ID}";
pub const INPUT_NUMBER_ID: &str = "${INPUT_NUMBER_CYBOZU_ID}";
pub const INPUT_TIME_TEXT_ID: &str = "${INPUT_TIME_TEXT_CYBOZU_ID}";
pub const INPUT_LINK_ID: &str = "${INPUT_LINK_CYBOZU}";
pub const RADIO_CHECKBOX_NAME: &str = "${RADIO_CHECKBOX_NAME}";
pub const RADIO_CHECKBOX_ID: &str = "${RADIO_CHECKBOX_ID}";
pub const LABEL_FOR_ID: &str = "${LABEL_FOR_ID}";
pub const TEXTAREA_ID: &str = "${TEXTAREA_ID}";
pub const TEXTAREA_NAME: &str = "${TEXTAREA_NAME}";
pub const ARIA_ACTIVEDESCENDANT: &str = "${ARIA_ACTIVEDESCENDANT}";
pub const ARIA_LABELLEDBY: &str = "${ARIA_LABELLEDBY}";

// Images
pub const LOGO_IMG_URL: &str = "${LOGO_IMG_URL}";
pub const USER_ICON_URL: &str = "${USER_ICON_URL}";
pub const USER_ICON_BACKGROUND: &str = "background-image: url(${USER_ICON_URL})";
