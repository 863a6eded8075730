//! Package directory paths and manifest key resolution

use std::path::{Path, PathBuf};

/// A directory path as shown to users and used for I/O.
///
/// On Windows backslashes are rewritten to `/` so output matches the
/// `/`-separated keys Cargo writes into manifests. Elsewhere the path is kept
/// verbatim, since `\` is an ordinary filename character there.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy();
        let inner = if cfg!(windows) {
            raw.replace('\\', "/")
        } else {
            raw.into_owned()
        };
        Self { inner }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Path of a child entry, such as the manifest file.
    pub fn join(&self, name: &str) -> Self {
        Self::new(self.resolve(name))
    }

    /// Resolve a manifest key against this directory.
    ///
    /// The key is passed to [`Path::join`] unchanged: `/` separates
    /// components on every platform and a Unix `\` stays part of the name.
    pub fn resolve(&self, key: &str) -> PathBuf {
        self.to_native().join(key)
    }

    /// Last path component.
    pub fn file_name(&self) -> Option<&str> {
        Path::new(&self.inner).file_name()?.to_str()
    }

    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}
