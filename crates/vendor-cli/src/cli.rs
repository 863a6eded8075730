//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use vendor_core::{ReadPolicy, ReconcileOptions};
use vendor_fs::VendorPath;

/// Repair `.cargo-checksum.json` manifests in vendored crates
///
/// Recomputes the SHA-256 of every listed file and rewrites manifests whose
/// recorded checksums have drifted. Running it again is a no-op.
#[derive(Parser, Debug)]
#[command(name = "vendor-fix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub reconcile: ReconcileArgs,

    /// The command to run (defaults to `all`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Settings shared by both modes
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ReconcileArgs {
    /// Report mismatches without rewriting any manifest
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Treat an unreadable listed file as a package error instead of skipping it
    #[arg(long, global = true)]
    pub strict: bool,

    /// Manifest file name inside each package directory
    #[arg(long, global = true, default_value_t = VendorPath::ChecksumManifest.as_str().to_string())]
    pub manifest_name: String,
}

impl ReconcileArgs {
    pub fn to_options(&self) -> ReconcileOptions {
        let policy = if self.strict {
            ReadPolicy::Strict
        } else {
            ReadPolicy::Tolerant
        };
        ReconcileOptions::default()
            .with_manifest_name(self.manifest_name.clone())
            .with_read_policy(policy)
            .with_dry_run(self.dry_run)
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fix every package under the vendor directory
    ///
    /// Packages without a manifest, or with an unparsable one, are skipped.
    /// A missing vendor directory is not an error.
    All {
        /// Vendor directory, relative to the current directory
        #[arg(long, default_value = VendorPath::VendorRoot.as_str())]
        root: PathBuf,
    },

    /// Fix a single package directory
    ///
    /// Fails if the directory or its manifest is missing or unreadable.
    ///
    /// Examples:
    ///   vendor-fix package vendor/criterion
    ///   vendor-fix package vendor/serde --dry-run
    Package {
        /// Path to the package directory
        dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["vendor-fix"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.reconcile.dry_run);
        assert_eq!(cli.reconcile.manifest_name, ".cargo-checksum.json");
    }

    #[test]
    fn all_defaults_to_vendor_root() {
        let cli = Cli::try_parse_from(["vendor-fix", "all"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::All {
                root: PathBuf::from("vendor")
            })
        );
    }

    #[test]
    fn package_requires_dir() {
        let err = Cli::try_parse_from(["vendor-fix", "package"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["vendor-fix", "package", "vendor/x", "--strict", "--dry-run"])
                .unwrap();
        let options = cli.reconcile.to_options();
        assert_eq!(options.read_policy, ReadPolicy::Strict);
        assert!(options.dry_run);
    }
}
