//! Core types shared across screendiff facilities
//!
//! This crate provides foundational types used by the error, logging and
//! pipeline layers:
//!
//! - **Correlation types**: RunId for one detection run over many screens
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RunId;
