//! Raw markup cleanup applied before parsing.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// First single-line comment, then the IE conditional-comment wrappers.
static COMMENT_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"<!--.+-->").unwrap(),
        Regex::new(r"<!--\[if gt IE [0-9]+\]><!-->").unwrap(),
        Regex::new(r"<!--<!\[endif\]-->").unwrap(),
    ]
});

/// Remove the first match of each comment pattern, in order.
///
/// Only the first occurrence of each is dropped; comments that survive are
/// parsed as comment nodes and removed later by normalization.
pub fn strip_comments(markup: &str) -> String {
    COMMENT_PATTERNS
        .iter()
        .fold(markup.to_string(), |acc, re| {
            re.replacen(&acc, 1, NoExpand("")).into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_first_comment_only() {
        let out = strip_comments("<p><!-- a --></p><!-- b -->\n<!-- c -->");
        // greedy within a line
        assert_eq!(out, "<p>\n<!-- c -->");
    }

    #[test]
    fn test_removes_ie_conditional_wrappers() {
        let markup = "<!--[if gt IE 8]><!-->\n<html class=\"x\">\n<!--<![endif]-->\n</html>";
        assert_eq!(strip_comments(markup), "\n<html class=\"x\">\n\n</html>");
    }

    #[test]
    fn test_multiline_comment_is_left_alone() {
        let markup = "<div><!--\nnote\n--></div>";
        assert_eq!(strip_comments(markup), markup);
    }

    #[test]
    fn test_dollar_signs_survive() {
        assert_eq!(strip_comments("<a>$1 ${X}</a>"), "<a>$1 ${X}</a>");
    }
}
