//! screendiff core - normalization and diff rendering kernel
//!
//! This crate provides the pieces that turn two independently rendered
//! screens into a readable regression report:
//! - Node model for parsed documents (elements, text, comments)
//! - Normalization engine that strips render-time and environment noise
//! - Diff operation model as produced by an external tree-diff engine
//! - Text renderer and structured (YAML/JSON) report dumps
//! - Environment configuration, error facility and logging facility
//!
//! Everything here is synchronous and performs no I/O apart from reading
//! configuration from the process environment.

pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod normalize;

// Re-export commonly used types
pub use config::EnvironmentConfig;
pub use diff::{render_text, to_markup, DiffOperation, DiffReport, IndentConfig};
pub use errors::{ExError, ExErrorKind, Result, ScreenDiffError};
pub use model::{tree_digest, CharacterData, ElementNode, FormValue, Node};
pub use normalize::{normalize, NormalizationContext, Side};
