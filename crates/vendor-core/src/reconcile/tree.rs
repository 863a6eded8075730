//! Whole-tree and single-directory entry points

use vendor_fs::{NormalizedPath, io};

use super::{Outcome, Summary, package_name, reconcile_package};
use crate::{Error, ReconcileOptions, Reporter, Result};

/// Reconcile every immediate subdirectory of `root`.
///
/// A missing root is not an error: the returned summary has
/// `root_found == false`. Skipped and failed packages are recorded in the
/// summary and never stop the scan.
pub fn reconcile_tree(
    root: &NormalizedPath,
    options: &ReconcileOptions,
    reporter: &mut dyn Reporter,
) -> Result<Summary> {
    if !root.is_dir() {
        tracing::info!(root = %root, "No vendor directory found");
        return Ok(Summary::missing_root(root.clone()));
    }

    let packages = io::list_subdirectories(root)?;
    tracing::debug!(root = %root, count = packages.len(), "Scanning vendor tree");

    let mut summary = Summary::new(root.clone());
    for dir in packages {
        let outcome = reconcile_package(&dir, options, reporter);
        if let Outcome::Fatal(error) = &outcome {
            tracing::error!(package = %dir, %error, "Package reconciliation failed");
        }
        summary.push(package_name(&dir), outcome);
    }

    Ok(summary)
}

/// Reconcile one explicitly named package directory.
///
/// Unlike [`reconcile_tree`], a missing directory, a missing or malformed
/// manifest, and any fatal package error are returned as `Err`.
pub fn reconcile_single(
    dir: &NormalizedPath,
    options: &ReconcileOptions,
    reporter: &mut dyn Reporter,
) -> Result<Summary> {
    if !dir.is_dir() {
        return Err(Error::PackageNotFound {
            path: dir.to_native(),
        });
    }

    match reconcile_package(dir, options, reporter) {
        Outcome::Skipped(reason) => Err(reason.into_error()),
        Outcome::Fatal(error) => Err(error),
        outcome => {
            let mut summary = Summary::new(dir.clone());
            summary.push(package_name(dir), outcome);
            Ok(summary)
        }
    }
}
