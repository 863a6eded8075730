//! Single package reconciliation

use vendor_fs::{NormalizedPath, compute_file_checksum};

use super::{DigestChange, Outcome, PackageReport, SkipReason, package_name};
use crate::{ChecksumManifest, Error, ReadPolicy, ReconcileOptions, Reporter, Result};

/// Bring one package's manifest in line with the files on disk.
///
/// Every listed file that exists is hashed in manifest order. Mismatches are
/// reported, then written back in one atomic rewrite. A manifest that
/// already matches is not touched, so repeated runs are free of writes.
///
/// Never panics or returns early on a bad package: problems are expressed as
/// [`Outcome::Skipped`] or [`Outcome::Fatal`] and the caller decides whether
/// they end the run.
pub fn reconcile_package(
    dir: &NormalizedPath,
    options: &ReconcileOptions,
    reporter: &mut dyn Reporter,
) -> Outcome {
    let package = package_name(dir);
    let _span = tracing::debug_span!("reconcile_package", package = %package).entered();

    let outcome = match reconcile_files(&package, dir, options, reporter) {
        Ok(outcome) => outcome,
        Err(error) => Outcome::Fatal(error),
    };
    reporter.package_finished(&package, &outcome);
    outcome
}

fn reconcile_files(
    package: &str,
    dir: &NormalizedPath,
    options: &ReconcileOptions,
    reporter: &mut dyn Reporter,
) -> Result<Outcome> {
    let manifest_path = dir.join(&options.manifest_name);
    if !manifest_path.is_file() {
        tracing::debug!(path = %manifest_path, "No checksum manifest");
        return Ok(Outcome::Skipped(SkipReason::NoManifest {
            path: manifest_path.to_native(),
        }));
    }

    let mut manifest = match ChecksumManifest::load(&manifest_path) {
        Ok(manifest) => manifest,
        Err(Error::ManifestParse { path, message }) => {
            tracing::warn!(path = %path.display(), %message, "Malformed checksum manifest");
            return Ok(Outcome::Skipped(SkipReason::Malformed { path, message }));
        }
        Err(Error::ManifestNotFound { path }) => {
            return Ok(Outcome::Skipped(SkipReason::NoManifest { path }));
        }
        Err(e) => return Err(e),
    };
    tracing::debug!(files = manifest.len(), "Loaded checksum manifest");

    let mut report = PackageReport::new(package);

    for entry in manifest.entries() {
        let file_path = dir.resolve(&entry.path);
        if !file_path.exists() {
            tracing::warn!(file = %entry.path, "File listed in checksums but not found");
            reporter.file_missing(package, &entry.path);
            report.missing.push(entry.path);
            continue;
        }

        let actual = match compute_file_checksum(&file_path) {
            Ok(digest) => digest,
            Err(source) => match options.read_policy {
                ReadPolicy::Strict => {
                    return Err(Error::FileRead {
                        path: file_path,
                        source,
                    });
                }
                ReadPolicy::Tolerant => {
                    tracing::warn!(file = %entry.path, error = %source, "Skipping unreadable file");
                    reporter.file_unreadable(package, &entry.path, &source);
                    report.unreadable.push(entry.path);
                    continue;
                }
            },
        };
        tracing::debug!(file = %entry.path, digest = %actual, "Hashed");

        if entry.matches(&actual) {
            continue;
        }

        let change = DigestChange {
            old: entry.recorded_display().to_string(),
            new: actual,
            path: entry.path,
        };
        reporter.file_updated(package, &change, options.dry_run);
        manifest.set_digest(&change.path, change.new.clone());
        report.changes.push(change);
    }

    if report.changes.is_empty() {
        return Ok(Outcome::Unchanged(report));
    }

    if options.dry_run {
        tracing::info!(changes = report.changes.len(), "[dry-run] Would rewrite {}", manifest_path);
    } else {
        manifest.save(&manifest_path)?;
        report.written = true;
        tracing::debug!(path = %manifest_path, "Rewrote checksum manifest");
    }

    Ok(Outcome::Updated(report))
}
