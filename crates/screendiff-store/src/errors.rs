//! Error helpers for screendiff-store
//!
//! Builds structured `ExError`s for the store's failure modes

use screendiff_core::errors::{ExError, ExErrorKind, ScreenDiffError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Artifact missing under `key`
pub fn not_found(key: &str) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op("read_text")
        .with_key(key)
        .with_message("artifact not found")
}

/// Key that cannot be mapped onto the store
pub fn invalid_key(key: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("resolve_key")
        .with_key(key)
        .with_message(reason.to_string())
}

/// Capture date that is not `YYYYMMDD`
pub fn invalid_date(date: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("screen_key")
        .with_message(format!("date must be YYYYMMDD, got {:?}", date))
}

/// Screen name unusable as a single key segment
pub fn invalid_screen(screen: &str) -> ExError {
    ScreenDiffError::InvalidScreenName {
        screen: screen.to_string(),
    }
    .into()
}

/// Create an IO error
pub fn io_error(operation: &str, key: &str, err: std::io::Error) -> ExError {
    let kind = if err.kind() == std::io::ErrorKind::NotFound {
        ExErrorKind::NotFound
    } else {
        ExErrorKind::Io
    };
    ExError::new(kind)
        .with_op(operation.to_string())
        .with_key(key)
        .with_message(err.to_string())
}
