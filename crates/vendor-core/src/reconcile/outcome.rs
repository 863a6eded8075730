//! Result types for package and run reconciliation

use std::path::PathBuf;

use vendor_fs::NormalizedPath;

use crate::Error;

/// A recorded digest replaced by the freshly computed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestChange {
    /// Path relative to the package directory
    pub path: String,
    /// Previously recorded value
    pub old: String,
    /// SHA-256 of the file as it is on disk now
    pub new: String,
}

/// Per-file findings for one package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageReport {
    /// Package directory name
    pub package: String,
    /// Entries whose digest changed, in manifest order
    pub changes: Vec<DigestChange>,
    /// Listed files that do not exist
    pub missing: Vec<String>,
    /// Listed files that exist but could not be read
    pub unreadable: Vec<String>,
    /// Whether the manifest was rewritten on disk
    pub written: bool,
}

impl PackageReport {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }
}

/// Why a package was not reconciled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No manifest file in the package directory
    NoManifest { path: PathBuf },
    /// Manifest exists but could not be parsed
    Malformed { path: PathBuf, message: String },
}

impl SkipReason {
    /// The error this skip becomes when the package was named explicitly.
    pub fn into_error(self) -> Error {
        match self {
            Self::NoManifest { path } => Error::ManifestNotFound { path },
            Self::Malformed { path, message } => Error::ManifestParse { path, message },
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoManifest { path } => write!(f, "no manifest at {}", path.display()),
            Self::Malformed { path, message } => {
                write!(f, "malformed manifest at {}: {}", path.display(), message)
            }
        }
    }
}

/// Result of reconciling one package directory.
#[derive(Debug)]
pub enum Outcome {
    /// At least one digest changed (written unless dry-run)
    Updated(PackageReport),
    /// Every existing file already matched its recorded digest
    Unchanged(PackageReport),
    /// The package was not examined
    Skipped(SkipReason),
    /// Reconciliation failed; the manifest was not rewritten
    Fatal(Error),
}

/// Discriminant of [`Outcome`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Updated,
    Unchanged,
    Skipped,
    Fatal,
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::Updated(_) => OutcomeKind::Updated,
            Self::Unchanged(_) => OutcomeKind::Unchanged,
            Self::Skipped(_) => OutcomeKind::Skipped,
            Self::Fatal(_) => OutcomeKind::Fatal,
        }
    }

    /// The per-file report, for outcomes that examined files.
    pub fn report(&self) -> Option<&PackageReport> {
        match self {
            Self::Updated(report) | Self::Unchanged(report) => Some(report),
            Self::Skipped(_) | Self::Fatal(_) => None,
        }
    }
}

/// One package's entry in a [`Summary`].
#[derive(Debug)]
pub struct PackageResult {
    pub package: String,
    pub outcome: Outcome,
}

/// Result of a whole run.
#[derive(Debug)]
pub struct Summary {
    /// Scanned root, or the package directory in single-directory mode
    pub root: NormalizedPath,
    /// `false` when a whole-tree root did not exist
    pub root_found: bool,
    /// Packages in processing order
    pub packages: Vec<PackageResult>,
}

impl Summary {
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            root,
            root_found: true,
            packages: Vec::new(),
        }
    }

    /// Summary for a whole-tree run whose root does not exist.
    pub fn missing_root(root: NormalizedPath) -> Self {
        Self {
            root,
            root_found: false,
            packages: Vec::new(),
        }
    }

    pub fn push(&mut self, package: impl Into<String>, outcome: Outcome) {
        self.packages.push(PackageResult {
            package: package.into(),
            outcome,
        });
    }

    fn count(&self, kind: OutcomeKind) -> usize {
        self.packages
            .iter()
            .filter(|p| p.outcome.kind() == kind)
            .count()
    }

    pub fn updated_count(&self) -> usize {
        self.count(OutcomeKind::Updated)
    }

    pub fn unchanged_count(&self) -> usize {
        self.count(OutcomeKind::Unchanged)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(OutcomeKind::Skipped)
    }

    pub fn failed_count(&self) -> usize {
        self.count(OutcomeKind::Fatal)
    }

    /// Total digest changes across all packages.
    pub fn changed_entries(&self) -> usize {
        self.packages
            .iter()
            .filter_map(|p| p.outcome.report())
            .map(|r| r.changes.len())
            .sum()
    }

    pub fn has_changes(&self) -> bool {
        self.updated_count() > 0
    }

    /// Packages that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.packages.iter().filter_map(|p| match &p.outcome {
            Outcome::Fatal(error) => Some((p.package.as_str(), error)),
            _ => None,
        })
    }

    /// Look up a package's outcome by directory name.
    pub fn outcome(&self, package: &str) -> Option<&Outcome> {
        self.packages
            .iter()
            .find(|p| p.package == package)
            .map(|p| &p.outcome)
    }
}
