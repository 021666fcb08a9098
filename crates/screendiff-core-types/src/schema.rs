//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Screen identifiers
pub const FIELD_SCREEN: &str = "screen";
pub const FIELD_SIDE: &str = "side";
pub const FIELD_DATE: &str = "date";

// Collection sizes
pub const FIELD_OPS_LEN: &str = "ops_len";
pub const FIELD_REMOVED_NODES: &str = "removed_nodes";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
