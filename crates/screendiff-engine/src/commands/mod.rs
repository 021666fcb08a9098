//! Command orchestration layer.
//!
//! Commands own lifecycle logging (`log_op_start!` / `log_op_end!` /
//! `log_op_error!`); the store and core crates only emit `debug!` details.

pub mod detect;
