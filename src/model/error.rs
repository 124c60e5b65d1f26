//! Error types for the pinhole application.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary's command dispatch
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse/validation failures
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing subscriber setup failures
//!   - [`StorageError`] - key-value store read/write failures
//!   - [`ProfileError`] - profile CRUD failures (unknown id, empty name, storage)
//!   - [`TuiError`](crate::view::TuiError) - terminal failures
//!
//! # Error Recovery Strategy
//!
//! Storage errors are **non-fatal** inside the TUI: a failed load or save is logged
//! and the in-memory profile list stays as it was. The one-shot CLI commands
//! surface them as a non-zero exit instead.
//!
//! Numeric edge cases (zero ISO, zero aperture) are not errors at all; they flow
//! through the exposure model as non-finite values.

use crate::model::ProfileId;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// The key-value store failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A profile operation failed.
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),

    /// A film format name given on the command line is not in the catalog.
    #[error("Unknown film format: {0}")]
    UnknownFilmFormat(String),

    /// A lighting condition name given on the command line is not in the catalog.
    #[error("Unknown lighting condition: {0}")]
    UnknownCondition(String),

    /// Writing command output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a [`KeyValueStore`](crate::storage::KeyValueStore).
///
/// # Recovery Patterns
///
/// - **Io**: Log and keep in-memory state; the next save retries the write
/// - **CorruptStore**: The backing file is not a JSON object; nothing is read from it
/// - **CorruptValue**: One key holds text that does not deserialize; the key is ignored
/// - **Serialize**: Practically unreachable for plain data, kept for `?` ergonomics
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("Failed to access store at {path}: {source}")]
    Io {
        /// Path of the backing file.
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a valid store document.
    #[error("Store file {path} is corrupt: {reason}")]
    CorruptStore {
        /// Path of the backing file.
        path: PathBuf,
        /// Parser error message.
        reason: String,
    },

    /// A stored value could not be decoded.
    #[error("Value under key '{key}' is corrupt: {reason}")]
    CorruptValue {
        /// Key whose value failed to decode.
        key: String,
        /// Decoder error message.
        reason: String,
    },

    /// A value could not be encoded for storage.
    #[error("Failed to encode value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised by profile create/update/delete operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// No stored profile has this id.
    #[error("No profile with id {0}")]
    NotFound(ProfileId),

    /// Profiles must have a visible name.
    #[error("Profile name cannot be empty")]
    EmptyName,

    /// The underlying store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_io_error_mentions_path() {
        let err = StorageError::Io {
            path: PathBuf::from("/tmp/store.json"),
            source: std::io::Error::other("disk full"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/store.json"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn profile_error_wraps_storage_transparently() {
        let inner = StorageError::CorruptValue {
            key: "pinhole.profiles".to_string(),
            reason: "expected array".to_string(),
        };
        let expected = inner.to_string();
        let err: ProfileError = inner.into();
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn not_found_mentions_id() {
        let err = ProfileError::NotFound(ProfileId::new("123").unwrap());
        assert!(err.to_string().contains("123"));
    }

    #[test]
    fn app_error_from_storage() {
        let err: AppError = StorageError::CorruptStore {
            path: PathBuf::from("x"),
            reason: "bad".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
