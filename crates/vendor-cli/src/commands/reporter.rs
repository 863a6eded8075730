//! Console rendering of reconciliation progress

use colored::Colorize;
use vendor_core::{DigestChange, Outcome, Reporter, SkipReason};

/// Prints progress lines to stdout as reconciliation happens.
///
/// In whole-tree mode skip and failure notices are printed per package. In
/// single-directory mode those become the command's error instead.
#[derive(Debug)]
pub struct ConsoleReporter {
    whole_tree: bool,
}

impl ConsoleReporter {
    pub fn whole_tree() -> Self {
        Self { whole_tree: true }
    }

    pub fn single_package() -> Self {
        Self { whole_tree: false }
    }

    /// The line printed when `package` finishes, if any.
    pub fn package_line(&self, package: &str, outcome: &Outcome) -> Option<String> {
        match outcome {
            Outcome::Updated(report) if report.written => Some(format!(
                "{} {}: updated {} checksum(s)",
                "OK".green().bold(),
                package,
                report.changes.len()
            )),
            Outcome::Updated(report) => Some(format!(
                "{} {}: {} checksum(s) would be updated",
                "[dry-run]".cyan(),
                package,
                report.changes.len()
            )),
            Outcome::Unchanged(_) => {
                tracing::debug!(package, "No checksum mismatches");
                None
            }
            Outcome::Skipped(SkipReason::NoManifest { .. }) => {
                tracing::debug!(package, "Skipped, no manifest");
                None
            }
            Outcome::Skipped(reason @ SkipReason::Malformed { .. }) if self.whole_tree => {
                Some(format!("{} {}: {}", "SKIP".yellow().bold(), package, reason))
            }
            Outcome::Fatal(error) if self.whole_tree => {
                Some(format!("{} {}: {}", "FAIL".red().bold(), package, error))
            }
            Outcome::Skipped(_) | Outcome::Fatal(_) => None,
        }
    }
}

impl Reporter for ConsoleReporter {
    fn file_updated(&mut self, package: &str, change: &DigestChange, dry_run: bool) {
        let label = if dry_run { "WOULD UPDATE" } else { "UPDATE" };
        println!(
            "{} {}/{}: {} -> {}",
            label.yellow().bold(),
            package,
            change.path,
            change.old.dimmed(),
            change.new
        );
    }

    fn file_missing(&mut self, package: &str, path: &str) {
        println!(
            "{} {}/{} listed in checksums but not found",
            "WARN".yellow().bold(),
            package,
            path
        );
    }

    fn file_unreadable(&mut self, package: &str, path: &str, error: &std::io::Error) {
        println!(
            "{} {}/{} could not be read: {}",
            "WARN".yellow().bold(),
            package,
            path,
            error
        );
    }

    fn package_finished(&mut self, package: &str, outcome: &Outcome) {
        if let Some(line) = self.package_line(package, outcome) {
            println!("{line}");
        }
    }
}
