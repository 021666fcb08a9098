//! Diff operations, their text rendering and the per-screen report.
//!
//! The operations themselves come from an external tree-diff engine; this
//! module only models and renders them.
//!
//! ```ignore
//! use screendiff_core::diff::{DiffReport, IndentConfig};
//!
//! let report = DiffReport::new(current_key, preview_key, operations);
//! let text = report.render(IndentConfig::new(0, 2));
//! let yaml = report.to_yaml()?;
//! ```

pub mod model;
pub mod render;
pub mod report;

pub use model::DiffOperation;
pub use render::{render_text, to_markup, IndentConfig};
pub use report::DiffReport;
