//! Storage-specific error types for filesystem operations.
//!
//! This module provides error types that wrap io and JSON errors and convert
//! them to the storage-agnostic error types defined in `paperfolio_core`.

use std::io::ErrorKind;

use paperfolio_core::errors::{Error, StoreError};
use thiserror::Error;

/// Storage-specific errors that wrap io and serde_json types.
///
/// These errors are internal to the storage layer and are converted to
/// `paperfolio_core::Error` before being returned to callers. Each variant
/// carries the path of the file involved so failures point at a concrete
/// record on disk.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Failed to serialize record for {path}: {source}")]
    Serialize {
        path: String,
        source: serde_json::Error,
    },
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Read { path, source } if source.kind() == ErrorKind::NotFound => {
                Error::Store(StoreError::NotFound(path))
            }
            StorageError::Read { path, source } => {
                Error::Store(StoreError::ReadFailed(format!("{}: {}", path, source)))
            }
            StorageError::Write { path, source } => {
                Error::Store(StoreError::WriteFailed(format!("{}: {}", path, source)))
            }
            StorageError::Parse { path, source } => {
                Error::Store(StoreError::ParseFailed(format!("{}: {}", path, source)))
            }
            StorageError::Serialize { path, source } => {
                Error::Store(StoreError::WriteFailed(format!("{}: {}", path, source)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error(kind: ErrorKind) -> std::io::Error {
        std::io::Error::new(kind, "boom")
    }

    #[test]
    fn test_read_not_found_maps_to_store_not_found() {
        let err = StorageError::Read {
            path: "data/portfolio-user123.json".to_string(),
            source: io_error(ErrorKind::NotFound),
        };

        match Error::from(err) {
            Error::Store(StoreError::NotFound(path)) => {
                assert_eq!(path, "data/portfolio-user123.json");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_read_failure_maps_to_read_failed() {
        let err = StorageError::Read {
            path: "data/seed.json".to_string(),
            source: io_error(ErrorKind::PermissionDenied),
        };

        match Error::from(err) {
            Error::Store(StoreError::ReadFailed(msg)) => {
                assert!(msg.contains("data/seed.json"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_write_failure_maps_to_write_failed() {
        let err = StorageError::Write {
            path: "data/seed.json".to_string(),
            source: io_error(ErrorKind::PermissionDenied),
        };

        assert!(matches!(
            Error::from(err),
            Error::Store(StoreError::WriteFailed(_))
        ));
    }

    #[test]
    fn test_parse_failure_maps_to_parse_failed() {
        let source = serde_json::from_str::<u64>("not json").unwrap_err();
        let err = StorageError::Parse {
            path: "data/seed.json".to_string(),
            source,
        };

        assert!(matches!(
            Error::from(err),
            Error::Store(StoreError::ParseFailed(_))
        ));
    }
}
