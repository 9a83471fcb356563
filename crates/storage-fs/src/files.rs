//! JSON document helpers shared by the repositories.
//!
//! Every record this crate stores is a single JSON file. These helpers keep
//! the read, write, and existence checks in one place so the repositories
//! only deal with paths and types.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StorageError;

/// Returns true when a document exists at `path`.
pub(crate) fn exists(path: &Path) -> bool {
    path.exists()
}

/// Reads and deserializes the JSON document at `path`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let contents = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| StorageError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Serializes `value` and writes it to `path`, creating parent directories
/// as needed.
///
/// The document is written to a sibling temp file and renamed into place,
/// so an interrupted write never leaves a truncated record behind.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| StorageError::Serialize {
        path: path.display().to_string(),
        source,
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::Write {
            path: path.display().to_string(),
            source,
        })?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, json).map_err(|source| StorageError::Write {
        path: tmp.display().to_string(),
        source,
    })?;

    fs::rename(&tmp, path).map_err(|source| StorageError::Write {
        path: path.display().to_string(),
        source,
    })
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
