//! screendiff engine - detection orchestration
//!
//! Coordinates the artifact store, the external markup parser and tree
//! differ, and the normalization core into a per-screen detection run.
//! Also composes the plain-text notification summarizing a run.

pub mod commands;
pub mod notify;
pub mod ports;
pub mod prefilter;

pub use commands::detect::{
    date_in_jst, detect_screen_diffs, today_in_jst, DetectionSummary, ScreenOutcome, ScreenResult,
};
pub use notify::{compose_notification, NotificationMessage};
pub use ports::{MarkupParser, TreeDiffer};
pub use prefilter::strip_comments;
