// src/error.rs

//! Unified error handling for JSON file persistence.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Boxed cause returned by caller-supplied construction hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Unified storage error type.
///
/// Every variant carries the path of the file the operation was acting
/// on. `NotFound` is a read-side condition only: a missing parent
/// directory on write surfaces as `Io`.
#[derive(Error, Debug)]
pub enum StorageError {
    /// File does not exist
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// I/O operation failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Value could not be encoded to JSON
    #[error("JSON encode error for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File content is not valid JSON, or does not fit the target shape
    #[error("JSON decode error in {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Default-construction hook failed while materializing a missing value
    #[error("construction error for {}: {source}", .path.display())]
    Construction {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl StorageError {
    /// Create a not-found error for `path`.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an encode error for `path`.
    pub fn encode(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Encode {
            path: path.into(),
            source,
        }
    }

    /// Create a decode error for `path`.
    pub fn decode(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// Create a construction error for `path`.
    pub fn construction(path: impl Into<PathBuf>, source: BoxError) -> Self {
        Self::Construction {
            path: path.into(),
            source,
        }
    }

    /// Stable kind label used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            StorageError::NotFound { .. } => "NotFound",
            StorageError::Io { .. } => "Io",
            StorageError::Encode { .. } => "Encode",
            StorageError::Decode { .. } => "Decode",
            StorageError::Construction { .. } => "Construction",
        }
    }

    /// Path of the file the failing operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            StorageError::NotFound { path }
            | StorageError::Io { path, .. }
            | StorageError::Encode { path, .. }
            | StorageError::Decode { path, .. }
            | StorageError::Construction { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_are_distinct() {
        let errors = [
            StorageError::not_found("a.json"),
            StorageError::io("a.json", std::io::Error::other("disk")),
            StorageError::construction("a.json", "no baseline".into()),
        ];

        let kinds: Vec<_> = errors.iter().map(|e| e.kind_name()).collect();
        assert_eq!(kinds, ["NotFound", "Io", "Construction"]);
    }

    #[test]
    fn test_path_accessor() {
        let err = StorageError::not_found("data/prefs.json");
        assert_eq!(err.path(), Path::new("data/prefs.json"));
        assert!(err.to_string().contains("data/prefs.json"));
    }
}
