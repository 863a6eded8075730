//! Shared test utilities for the vendor checksum workspace.
//!
//! Dev-dependency only. [`TestVendor`] lays out a temporary working
//! directory with a `vendor/` tree of packages and checksum manifests.
//! Digests here are computed with `sha2` directly, independent of the code
//! under test.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use sha2::{Digest, Sha256};
use tempfile::TempDir;

/// Manifest file name used by every fixture.
pub const MANIFEST: &str = ".cargo-checksum.json";

/// Lowercase hex SHA-256 of `content`.
pub fn sha256_hex(content: &[u8]) -> String {
    format!("{:x}", Sha256::digest(content))
}

/// A temporary working directory containing a `vendor/` tree.
///
/// # Example
///
/// ```rust,no_run
/// use vendor_test_utils::TestVendor;
///
/// let vendor = TestVendor::new();
/// vendor.add_file("serde", "src/lib.rs", "pub fn x() {}");
/// vendor.write_consistent_manifest("serde", &["src/lib.rs"]);
/// ```
pub struct TestVendor {
    temp_dir: TempDir,
}

impl Default for TestVendor {
    fn default() -> Self {
        Self::new()
    }
}

impl TestVendor {
    /// Create a working directory with an empty `vendor/` inside.
    pub fn new() -> Self {
        let vendor = Self::without_vendor_dir();
        fs::create_dir_all(vendor.vendor_dir()).unwrap();
        vendor
    }

    /// Create a working directory with no `vendor/` at all.
    pub fn without_vendor_dir() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// The working directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn vendor_dir(&self) -> PathBuf {
        self.root().join("vendor")
    }

    pub fn package_dir(&self, package: &str) -> PathBuf {
        self.vendor_dir().join(package)
    }

    pub fn manifest_path(&self, package: &str) -> PathBuf {
        self.package_dir(package).join(MANIFEST)
    }

    /// Write `content` to `package/relative`, creating directories.
    pub fn add_file(&self, package: &str, relative: &str, content: &str) {
        let path = self.package_dir(package).join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Write the manifest verbatim.
    pub fn write_manifest(&self, package: &str, json: &str) {
        fs::create_dir_all(self.package_dir(package)).unwrap();
        fs::write(self.manifest_path(package), json).unwrap();
    }

    /// Write a manifest whose digests match the listed files on disk.
    ///
    /// Includes a `package` field, as `cargo vendor` does.
    pub fn write_consistent_manifest(&self, package: &str, files: &[&str]) {
        let mut map = serde_json::Map::new();
        for file in files {
            let content = fs::read(self.package_dir(package).join(file)).unwrap();
            map.insert(file.to_string(), Value::String(sha256_hex(&content)));
        }
        self.write_files_map(package, map);
    }

    /// Write a manifest whose digests are all stale.
    pub fn write_stale_manifest(&self, package: &str, files: &[&str]) {
        let stale = "0".repeat(64);
        let map = files
            .iter()
            .map(|f| (f.to_string(), Value::String(stale.clone())))
            .collect();
        self.write_files_map(package, map);
    }

    fn write_files_map(&self, package: &str, files: serde_json::Map<String, Value>) {
        let mut document = serde_json::Map::new();
        document.insert("files".into(), Value::Object(files));
        document.insert("package".into(), Value::String(sha256_hex(package.as_bytes())));
        self.write_manifest(package, &serde_json::to_string(&document).unwrap());
    }

    /// Raw manifest bytes.
    pub fn manifest_bytes(&self, package: &str) -> Vec<u8> {
        fs::read(self.manifest_path(package)).unwrap()
    }

    /// Parsed manifest.
    pub fn manifest_json(&self, package: &str) -> Value {
        serde_json::from_slice(&self.manifest_bytes(package)).unwrap()
    }

    /// Recorded digest for `file` in `package`'s manifest.
    pub fn recorded_digest(&self, package: &str, file: &str) -> Option<String> {
        self.manifest_json(package)["files"][file]
            .as_str()
            .map(str::to_string)
    }

    /// Modification time of the manifest.
    pub fn manifest_mtime(&self, package: &str) -> std::time::SystemTime {
        fs::metadata(self.manifest_path(package))
            .unwrap()
            .modified()
            .unwrap()
    }
}
