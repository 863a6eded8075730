//! SHA-256 checksum utilities
//!
//! Digests are plain lowercase hex with no algorithm prefix, which is the
//! encoding Cargo records in `.cargo-checksum.json`.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::path::Path;

/// Compute the SHA-256 checksum of an in-memory buffer.
pub fn compute_bytes_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Compute the SHA-256 checksum of a file's contents.
///
/// The file is streamed through the hasher rather than read into memory.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn compute_file_checksum(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_checksum_is_bare_lowercase_hex() {
        let checksum = compute_bytes_checksum(b"hello world");
        assert_eq!(checksum.len(), 64);
        assert!(checksum.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn bytes_checksum_known_value() {
        assert_eq!(
            compute_bytes_checksum(b"hello world"),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn empty_input_known_value() {
        assert_eq!(
            compute_bytes_checksum(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn file_checksum_matches_bytes_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.txt");
        std::fs::write(&path, "hello world").unwrap();

        let file_cs = compute_file_checksum(&path).unwrap();
        assert_eq!(file_cs, compute_bytes_checksum(b"hello world"));
    }

    #[test]
    fn file_checksum_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = compute_file_checksum(&dir.path().join("nope.rs"));
        assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::NotFound);
    }
}
