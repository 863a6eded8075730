//! Reconciliation settings and scope selection

use vendor_fs::{NormalizedPath, VendorPath};

/// What to do when a listed file exists but cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadPolicy {
    /// Warn, leave the entry untouched and continue with the next file
    #[default]
    Tolerant,
    /// Abort the package with [`crate::Error::FileRead`]
    Strict,
}

/// Settings shared by every package in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Manifest file name inside each package directory.
    /// Defaults to `.cargo-checksum.json`.
    pub manifest_name: String,
    /// Handling of unreadable files. Defaults to [`ReadPolicy::Tolerant`].
    pub read_policy: ReadPolicy,
    /// Report drift without rewriting any manifest.
    pub dry_run: bool,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            manifest_name: VendorPath::ChecksumManifest.as_str().to_string(),
            read_policy: ReadPolicy::default(),
            dry_run: false,
        }
    }
}

impl ReconcileOptions {
    pub fn with_manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = name.into();
        self
    }

    pub fn with_read_policy(mut self, policy: ReadPolicy) -> Self {
        self.read_policy = policy;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Which directories a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// One explicitly named package directory; every problem is fatal
    Package(NormalizedPath),
    /// Every immediate subdirectory of a root; problems are per package
    Tree(NormalizedPath),
}

impl Scope {
    /// Whole-tree scope over `vendor` in the current directory.
    pub fn default_tree() -> Self {
        Self::Tree(NormalizedPath::new(VendorPath::VendorRoot.as_str()))
    }

    pub fn path(&self) -> &NormalizedPath {
        match self {
            Self::Package(path) | Self::Tree(path) => path,
        }
    }
}
