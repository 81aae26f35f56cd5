//! Persisted prospect document storage.
//!
//! # Responsibility
//! - Own the JSON document codec for the prospect file.
//! - Surface typed read/write errors for the store to absorb.
//!
//! # Invariants
//! - The backing file always holds one complete JSON array of prospects.
//! - Callers above this layer decide how failures degrade; nothing here
//!   falls back silently.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;

pub use file::{load_prospects, save_prospects};

pub type StorageResult<T> = Result<T, StorageError>;

/// Error reading or writing the persisted prospect document.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "prospect file I/O failed: {err}"),
            Self::Serde(err) => write!(f, "prospect document is not a valid record array: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}
