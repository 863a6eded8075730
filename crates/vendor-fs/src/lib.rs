//! Filesystem layer for vendored checksum reconciliation
//!
//! Provides normalized paths, streaming SHA-256 file digests and atomic
//! manifest writes. Nothing in here knows about manifest contents.

pub mod checksum;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use checksum::{compute_bytes_checksum, compute_file_checksum};
pub use constants::VendorPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
