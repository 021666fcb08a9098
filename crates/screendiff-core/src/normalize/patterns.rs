//! Patterns recognising volatile values inside attributes and text.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! re {
    ($pat:expr) => {
        LazyLock::new(|| Regex::new($pat).unwrap())
    };
}

/// Product build stamp embedded in asset URLs, e.g. `23.4.1_12345`.
pub(crate) static PRODUCT_VERSION: LazyLock<Regex> = re!(r"[1-9][0-9]*\.[0-9]*\.[0-9]*_[0-9]+");

/// `M/D hh:mm` posting timestamps inside text.
///
/// Group 1 is the preceding character, if any. A digit or `/` there means
/// the month is part of a longer date (`2024/12/31 23:59`), which is not a
/// posting timestamp.
pub(crate) static POSTED_AT: LazyLock<Regex> = re!(
    r"(^|[^/0-9])(?:1[0-2]|[1-9])/(?:3[01]|[12][0-9]|[1-9])\s+(?:2[0-3]|[01]?[0-9]):[0-5][0-9]\b"
);

/// `YYYY/M/D h:m` timestamps used as comment permalink titles.
pub(crate) static COMMENT_TITLE_DATE: LazyLock<Regex> = re!(
    r"[1-9][0-9]{3}/(?:1[0-2]|0?[1-9])/(?:3[01]|[12][0-9]|0?[1-9])\s+(?:2[0-4]|1[0-9]|0?[0-9]):[0-5]?[0-9]"
);

/// Absolute permalink to a comment in a space thread.
pub(crate) static COMMENT_PERMALINK: LazyLock<Regex> = re!(
    r"https://[A-Za-z0-9][A-Za-z0-9-]{1,30}[A-Za-z0-9]\.cybozu\.com/k/#/space/[0-9]+/thread/[0-9]+/[0-9]+"
);

/// `background-image: url(...)` declarations carrying per-user icon URLs.
pub(crate) static BACKGROUND_IMAGE_URL: LazyLock<Regex> = re!(r"background-image:\s*url\(.+\)");

// Anchor targets, tried in order.
pub(crate) static HREF_PORTAL: LazyLock<Regex> = re!(r"/k/?$");
pub(crate) static HREF_SPACE_THREAD: LazyLock<Regex> =
    re!(r"^/k/#/space/[1-9][0-9]*/thread/[1-9][0-9]*");
pub(crate) static HREF_SPACE: LazyLock<Regex> = re!(r"^/k/#/space/[1-9][0-9]*");
pub(crate) static HREF_APP: LazyLock<Regex> = re!(r"^/k/([1-9][0-9]*)");
pub(crate) static HREF_RECORD: LazyLock<Regex> = re!(r"record=[0-9]+");
pub(crate) static HREF_PEOPLE: LazyLock<Regex> = re!(r"^/k/#/people/user/.+$");

/// `<field id>_<n>` prefixes of generated widget ids.
pub(crate) static FIELD_ID_PREFIX: LazyLock<Regex> = re!(r"^[1-9][0-9]*_[0-9]+");
/// Same as [`FIELD_ID_PREFIX`] but allowing an empty suffix, as upload buttons do.
pub(crate) static UPLOAD_BUTTON_ID_PREFIX: LazyLock<Regex> = re!(r"^[1-9][0-9]*_[0-9]*");
pub(crate) static HTML5_RUNTIME_ID: LazyLock<Regex> = re!(r"^.+_html5$");
pub(crate) static HTML5_CONTAINER_ID: LazyLock<Regex> = re!(r"^.+-html5-container$");
pub(crate) static TEXTAREA_ID: LazyLock<Regex> = re!(r"^[1-9][0-9]*_[0-9]+-textarea");
pub(crate) static LEADING_NUMBER: LazyLock<Regex> = re!(r"^[1-9][0-9]*");
pub(crate) static READ_ONLY_INPUT_CLASS: LazyLock<Regex> = re!(r"^[Ii]nputReadOnly");
