//! Whole-tree and single-package fix commands

use std::path::Path;

use colored::Colorize;
use vendor_core::{ReconcileOptions, Summary, reconcile_single, reconcile_tree};
use vendor_fs::NormalizedPath;

use super::reporter::ConsoleReporter;
use crate::error::Result;

/// Run the whole-tree fix
///
/// `root` is resolved against `cwd` when relative. Always succeeds once the
/// root has been listed, whatever happened to individual packages.
pub fn run_fix_all(cwd: &Path, root: &Path, options: &ReconcileOptions) -> Result<Summary> {
    let root = NormalizedPath::new(cwd.join(root));
    let mut reporter = ConsoleReporter::whole_tree();

    let summary = reconcile_tree(&root, options, &mut reporter)?;

    if !summary.root_found {
        println!("No vendor directory found at {}.", root);
        return Ok(summary);
    }

    print_tree_summary(&summary, options.dry_run);
    Ok(summary)
}

/// Run the single-package fix
///
/// Missing directories, missing or malformed manifests and strict read
/// failures are returned as errors.
pub fn run_fix_package(cwd: &Path, dir: &Path, options: &ReconcileOptions) -> Result<Summary> {
    let dir = NormalizedPath::new(cwd.join(dir));
    let mut reporter = ConsoleReporter::single_package();

    let summary = reconcile_single(&dir, options, &mut reporter)?;
    let manifest = dir.join(&options.manifest_name);

    if !summary.has_changes() {
        println!("{} No checksum mismatches found.", "OK".green().bold());
    } else if options.dry_run {
        println!("{} Would update checksums in {}", "[dry-run]".cyan(), manifest);
    } else {
        println!("{} Updated checksums in {}", "=>".blue().bold(), manifest);
    }
    Ok(summary)
}

fn print_tree_summary(summary: &Summary, dry_run: bool) {
    for line in tree_summary_lines(summary, dry_run) {
        println!("{line}");
    }
}

fn tree_summary_lines(summary: &Summary, dry_run: bool) -> Vec<String> {
    let verb = if dry_run { "Would update" } else { "Updated" };
    let mut lines = Vec::new();

    if summary.has_changes() {
        lines.push(format!(
            "{} {} {} checksum(s) in {} package(s).",
            "=>".blue().bold(),
            verb,
            summary.changed_entries(),
            summary.updated_count()
        ));
    } else {
        lines.push(format!(
            "{} All checksums verified. No changes needed.",
            "OK".green().bold()
        ));
    }

    if summary.skipped_count() > 0 {
        lines.push(format!("   {} package(s) skipped", summary.skipped_count()));
    }
    if summary.failed_count() > 0 {
        lines.push(format!(
            "   {} package(s) {}",
            summary.failed_count(),
            "failed".red().bold()
        ));
        for (package, error) in summary.failures() {
            lines.push(format!("     {package}: {error}"));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use vendor_core::{Error, ReadPolicy};
    use vendor_test_utils::{TestVendor, sha256_hex};

    use crate::error::CliError;

    #[test]
    fn fix_all_updates_stale_packages() {
        let vendor = TestVendor::new();
        vendor.add_file("criterion", "src/lib.rs", "pub mod bench;");
        vendor.write_stale_manifest("criterion", &["src/lib.rs"]);

        let summary =
            run_fix_all(vendor.root(), Path::new("vendor"), &ReconcileOptions::default()).unwrap();

        assert_eq!(summary.updated_count(), 1);
        assert_eq!(
            vendor.recorded_digest("criterion", "src/lib.rs"),
            Some(sha256_hex(b"pub mod bench;"))
        );
    }

    #[test]
    fn fix_all_reports_write_failure_and_updates_sibling() {
        colored::control::set_override(false);
        let vendor = TestVendor::new();
        for name in ["blocked", "ok"] {
            vendor.add_file(name, "a.txt", "x");
            vendor.write_stale_manifest(name, &["a.txt"]);
        }
        let temp_name = format!(".{}.{}.tmp", vendor_test_utils::MANIFEST, std::process::id());
        std::fs::create_dir_all(vendor.package_dir("blocked").join(temp_name)).unwrap();

        let summary =
            run_fix_all(vendor.root(), Path::new("vendor"), &ReconcileOptions::default()).unwrap();

        assert_eq!(summary.failed_count(), 1);
        assert_eq!(vendor.recorded_digest("ok", "a.txt"), Some(sha256_hex(b"x")));
        let lines = tree_summary_lines(&summary, false);
        assert_eq!(lines[0], "=> Updated 1 checksum(s) in 1 package(s).");
        assert_eq!(lines[1], "   1 package(s) failed");
        assert!(
            lines[2].starts_with("     blocked: Failed to write checksum manifest"),
            "{lines:?}"
        );
    }

    #[test]
    fn fix_all_missing_root_is_ok() {
        let vendor = TestVendor::without_vendor_dir();

        let summary =
            run_fix_all(vendor.root(), Path::new("vendor"), &ReconcileOptions::default()).unwrap();

        assert!(!summary.root_found);
    }

    #[test]
    fn fix_package_missing_manifest_errors() {
        let vendor = TestVendor::new();
        vendor.add_file("p", "a.txt", "x");

        let result = run_fix_package(
            vendor.root(),
            &PathBuf::from("vendor/p"),
            &ReconcileOptions::default(),
        );

        assert!(matches!(
            result,
            Err(CliError::Core(Error::ManifestNotFound { .. }))
        ));
    }

    #[test]
    fn fix_package_accepts_absolute_dir() {
        let vendor = TestVendor::new();
        vendor.add_file("p", "a.txt", "x");
        vendor.write_consistent_manifest("p", &["a.txt"]);
        let options = ReconcileOptions::default().with_read_policy(ReadPolicy::Strict);

        let summary = run_fix_package(Path::new("/"), &vendor.package_dir("p"), &options).unwrap();

        assert!(!summary.has_changes());
    }
}
