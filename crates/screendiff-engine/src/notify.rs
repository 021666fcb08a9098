//! Plain-text notification summarizing a detection run.
//!
//! Only the message is composed here; delivering it is up to the caller.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// Per-screen excerpt limit, in characters.
const DIFF_TEXT_LEN_MAX: usize = 200;
/// Once the details exceed this many characters the rest is elided.
const WHOLE_DIFF_TEXTS_LEN_MAX: usize = 1_000;

/// `--- <label>` / `+++ <label>` header at the top of a report.
static REPORT_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^---[a-zA-Z0-9\-_/.: \t]+\n\+\+\+[a-zA-Z0-9\-_/.: \t]+\n").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub subject: String,
    pub body: String,
}

/// Compose the notification for `entries`, given as `(screen, report text)`
/// in display order. `archive_url` is where the full reports can be read.
pub fn compose_notification(entries: &[(&str, &str)], archive_url: &str) -> NotificationMessage {
    if entries.is_empty() {
        return NotificationMessage {
            subject: "screendiff notification: no diffs on screens".to_string(),
            body: "There is no diff on screens.".to_string(),
        };
    }

    let width = entries.len().to_string().len();
    let mut header = format!("Diff of DOM are detected in {} screens:\n", entries.len());
    for (idx, (screen, _)) in entries.iter().enumerate() {
        header.push_str(&format!("  {:>width$}. {}\n", idx + 1, screen));
    }
    header.push_str("\nDetails:\n");

    let mut details = String::new();
    for (idx, (screen, report)) in entries.iter().enumerate() {
        let text = REPORT_HEADER.replace(report, NoExpand(""));
        match truncate_chars(&text, DIFF_TEXT_LEN_MAX) {
            Some(head) => details.push_str(&format!("@ {}. {}\n{} ...\n\n", idx + 1, screen, head)),
            None => details.push_str(&format!("@ {}. {}\n{}\n\n", idx + 1, screen, text)),
        }

        if details.chars().count() > WHOLE_DIFF_TEXTS_LEN_MAX {
            details.push_str(&format!(
                "and more...\n\nPlease see {} if you would like more information on diffs of screens.\n",
                archive_url
            ));
            break;
        }
    }

    NotificationMessage {
        subject: format!(
            "screendiff notification: some diffs on {} screens",
            entries.len()
        ),
        body: header + &details,
    }
}

/// First `max` characters of `text`, or `None` if it is not longer than that.
fn truncate_chars(text: &str, max: usize) -> Option<&str> {
    text.char_indices().nth(max).map(|(end, _)| &text[..end])
}
