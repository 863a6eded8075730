//! Well-known vendor tree paths.

/// Default locations used when scanning a vendored source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorPath {
    /// The `vendor` directory produced by `cargo vendor`
    VendorRoot,
    /// The per-package `.cargo-checksum.json` manifest
    ChecksumManifest,
}

impl VendorPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VendorRoot => "vendor",
            Self::ChecksumManifest => ".cargo-checksum.json",
        }
    }
}

impl std::fmt::Display for VendorPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
