//! The `.cargo-checksum.json` document
//!
//! The manifest is held as a raw JSON object so that fields other than
//! `files` survive a rewrite untouched and keys keep their original order.

use serde_json::{Map, Value};
use vendor_fs::{NormalizedPath, io};

use crate::{Error, Result};

const FILES_KEY: &str = "files";

/// One `files` entry: a relative path and the digest recorded for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path relative to the package directory, always `/`-separated
    pub path: String,
    /// Recorded digest, or `None` when the value is not a JSON string
    pub recorded: Option<String>,
    display: String,
}

impl ManifestEntry {
    /// Whether the recorded digest equals `digest`.
    pub fn matches(&self, digest: &str) -> bool {
        self.recorded.as_deref() == Some(digest)
    }

    /// The recorded value as shown to users, including non-string values.
    pub fn recorded_display(&self) -> &str {
        &self.display
    }
}

/// A parsed checksum manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecksumManifest {
    document: Map<String, Value>,
}

impl ChecksumManifest {
    /// Parse manifest JSON.
    ///
    /// `path` is only used for error messages. Invalid UTF-8 is a parse
    /// error like any other. A missing `files` key is an empty file list; a
    /// `files` value that is not an object is rejected.
    pub fn parse(content: impl AsRef<[u8]>, path: &NormalizedPath) -> Result<Self> {
        let parse_error = |message: String| Error::ManifestParse {
            path: path.to_native(),
            message,
        };

        let value: Value =
            serde_json::from_slice(content.as_ref()).map_err(|e| parse_error(e.to_string()))?;
        let Value::Object(document) = value else {
            return Err(parse_error("expected a JSON object".into()));
        };

        match document.get(FILES_KEY) {
            None | Some(Value::Object(_)) => Ok(Self { document }),
            Some(_) => Err(parse_error(format!("`{FILES_KEY}` must be a JSON object"))),
        }
    }

    /// Read and parse the manifest at `path`.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let content = io::read_bytes(path).map_err(|e| match e.io_kind() {
            Some(std::io::ErrorKind::NotFound) => Error::ManifestNotFound {
                path: path.to_native(),
            },
            _ => Error::Fs(e),
        })?;
        Self::parse(&content, path)
    }

    /// Entries of the `files` mapping in document order.
    pub fn entries(&self) -> Vec<ManifestEntry> {
        self.files()
            .map(|files| {
                files
                    .iter()
                    .map(|(path, value)| ManifestEntry {
                        path: path.clone(),
                        recorded: value.as_str().map(str::to_string),
                        display: match value {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        },
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Replace the digest of an existing entry.
    ///
    /// Returns `false` without inserting anything when `path` is not listed.
    pub fn set_digest(&mut self, path: &str, digest: impl Into<String>) -> bool {
        match self.document.get_mut(FILES_KEY) {
            Some(Value::Object(files)) => match files.get_mut(path) {
                Some(slot) => {
                    *slot = Value::String(digest.into());
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Number of listed files.
    pub fn len(&self) -> usize {
        self.files().map_or(0, Map::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize without whitespace, the form Cargo itself writes.
    pub fn to_compact_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.document)?)
    }

    /// Atomically replace the manifest at `path`.
    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        let content = self.to_compact_string()?;
        io::write_atomic(path, content.as_bytes()).map_err(|source| Error::ManifestWrite {
            path: path.to_native(),
            source,
        })
    }

    fn files(&self) -> Option<&Map<String, Value>> {
        self.document.get(FILES_KEY)?.as_object()
    }
}
