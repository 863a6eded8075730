//! Error types for vendor-core

use std::path::PathBuf;

/// Result type for vendor-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reconciling checksum manifests
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Explicitly named package directory does not exist
    #[error("Package directory not found: {path}")]
    PackageNotFound { path: PathBuf },

    /// Package directory has no checksum manifest
    #[error("Checksum manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// Manifest is not valid JSON or does not have the expected shape
    #[error("Failed to parse checksum manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// A listed file exists but could not be hashed
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rewriting the manifest failed
    #[error("Failed to write checksum manifest at {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: vendor_fs::Error,
    },

    // Transparent wrappers for underlying errors
    /// Filesystem error from vendor-fs
    #[error(transparent)]
    Fs(#[from] vendor_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
