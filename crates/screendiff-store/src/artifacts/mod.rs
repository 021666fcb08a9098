//! Artifact keys and their filesystem persistence

pub mod atomic;
pub mod fs_store;
pub mod keys;
