//! Artifact key layout
//!
//! ```text
//! html/<date>/<screen>-current.html
//! html/<date>/<screen>-preview.html
//! diff/<date>/<screen>.diff
//! diff/<date>/<screen>.diff.yaml
//! ```

use crate::errors::{invalid_date, invalid_screen, Result};
use screendiff_core::Side;

/// One screen's artifacts for one capture date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenKey {
    date: String,
    screen: String,
}

impl ScreenKey {
    /// # Errors
    ///
    /// Returns `ERR_INVALID_INPUT` unless `date` is eight ASCII digits and
    /// `screen` is a non-empty single path segment.
    pub fn new(date: &str, screen: &str) -> Result<Self> {
        if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_date(date));
        }
        let bad_segment = screen.is_empty()
            || screen == "."
            || screen == ".."
            || screen.contains(['/', '\\', '\0']);
        if bad_segment {
            return Err(invalid_screen(screen));
        }
        Ok(Self {
            date: date.to_string(),
            screen: screen.to_string(),
        })
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn screen(&self) -> &str {
        &self.screen
    }

    /// Raw markup captured from `side`
    pub fn html(&self, side: Side) -> String {
        format!("html/{}/{}-{}.html", self.date, self.screen, side)
    }

    /// Rendered text report
    pub fn diff(&self) -> String {
        format!("diff/{}/{}.diff", self.date, self.screen)
    }

    /// Structured dump of the report
    pub fn diff_yaml(&self) -> String {
        format!("diff/{}/{}.diff.yaml", self.date, self.screen)
    }
}
