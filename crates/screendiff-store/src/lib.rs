//! screendiff store - artifact layout and persistence
//!
//! Raw screen captures and rendered diffs live under slash-separated keys
//! (`html/<date>/<screen>-<side>.html`, `diff/<date>/<screen>.diff`). The
//! [`ArtifactStore`] trait is the seam to whatever holds them; the
//! filesystem implementation maps keys onto a root directory.

pub mod artifacts;
pub mod errors;

pub use artifacts::fs_store::{ArtifactStore, FsArtifactStore};
pub use artifacts::keys::ScreenKey;
pub use errors::Result;
