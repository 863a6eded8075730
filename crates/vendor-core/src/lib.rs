//! Checksum manifest reconciliation for vendored packages
//!
//! Recomputes the SHA-256 digest of every file listed in a package's
//! `.cargo-checksum.json` and rewrites the manifest when any recorded digest
//! has drifted from the file on disk.
//!
//! # Architecture
//!
//! ```text
//!                vendor-cli
//!                    |
//!               vendor-core
//!     reconcile_tree   reconcile_single
//!              \           /
//!            reconcile_package
//!                    |
//!                vendor-fs
//! ```
//!
//! Both scopes share [`reconcile_package`]; they differ only in how an
//! [`Outcome`] is turned into success or failure.
//!
//! # Example
//!
//! ```no_run
//! use vendor_core::{NullReporter, ReconcileOptions, Scope, reconcile};
//!
//! let options = ReconcileOptions::default();
//! let summary = reconcile(&Scope::default_tree(), &options, &mut NullReporter)?;
//! println!("{} package(s) updated", summary.updated_count());
//! # Ok::<(), vendor_core::Error>(())
//! ```

pub mod error;
pub mod manifest;
pub mod options;
pub mod reconcile;
pub mod reporter;

pub use error::{Error, Result};
pub use manifest::{ChecksumManifest, ManifestEntry};
pub use options::{ReadPolicy, ReconcileOptions, Scope};
pub use reconcile::{
    DigestChange, Outcome, OutcomeKind, PackageReport, PackageResult, SkipReason, Summary,
    reconcile, reconcile_package, reconcile_single, reconcile_tree,
};
pub use reporter::{NullReporter, RecordingReporter, ReportEvent, Reporter};
