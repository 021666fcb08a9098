use serde::{Deserialize, Serialize};

/// Which deployment environment a tree was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Current,
    Preview,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Current => "current",
            Side::Preview => "preview",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-tree normalization settings.
///
/// Built once before traversal and only ever borrowed immutably by the
/// rules. The app ids are the ones owned by this tree's own environment;
/// links and form values pointing at them are the ones that get redacted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationContext {
    side: Side,
    main_app_id: u64,
    sub_app_id: u64,
    ignore_script_contents: bool,
}

impl NormalizationContext {
    pub fn new(side: Side, main_app_id: u64, sub_app_id: u64, ignore_script_contents: bool) -> Self {
        Self {
            side,
            main_app_id,
            sub_app_id,
            ignore_script_contents,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn main_app_id(&self) -> u64 {
        self.main_app_id
    }

    pub fn sub_app_id(&self) -> u64 {
        self.sub_app_id
    }

    pub fn ignore_script_contents(&self) -> bool {
        self.ignore_script_contents
    }

    /// True when `id` is either of this environment's own apps.
    pub fn owns_app(&self, id: u64) -> bool {
        id == self.main_app_id || id == self.sub_app_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Current.to_string(), "current");
        assert_eq!(Side::Preview.as_str(), "preview");
    }

    #[test]
    fn test_owns_app() {
        let ctx = NormalizationContext::new(Side::Preview, 10, 11, true);
        assert!(ctx.owns_app(10));
        assert!(ctx.owns_app(11));
        assert!(!ctx.owns_app(12));
    }
}
