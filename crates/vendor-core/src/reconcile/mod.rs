//! Checksum reconciliation
//!
//! [`reconcile_package`] does the work for one directory. [`reconcile_tree`]
//! and [`reconcile_single`] wrap it with whole-tree tolerance and
//! single-directory strictness respectively.

mod outcome;
mod package;
mod tree;

pub use outcome::{
    DigestChange, Outcome, OutcomeKind, PackageReport, PackageResult, SkipReason, Summary,
};
pub use package::reconcile_package;
pub use tree::{reconcile_single, reconcile_tree};

use crate::{ReconcileOptions, Reporter, Result, Scope};

/// Reconcile everything `scope` covers.
pub fn reconcile(
    scope: &Scope,
    options: &ReconcileOptions,
    reporter: &mut dyn Reporter,
) -> Result<Summary> {
    tracing::debug!(path = %scope.path(), "Reconciling");
    match scope {
        Scope::Package(dir) => reconcile_single(dir, options, reporter),
        Scope::Tree(root) => reconcile_tree(root, options, reporter),
    }
}

/// Display name of a package directory.
pub(crate) fn package_name(dir: &vendor_fs::NormalizedPath) -> String {
    dir.file_name()
        .map(str::to_string)
        .unwrap_or_else(|| dir.as_str().to_string())
}
