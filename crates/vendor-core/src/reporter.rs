//! Progress reporting seam
//!
//! The reconciler never prints. It calls a [`Reporter`] as things happen so
//! that update lines reach the console before the manifest is written.

use crate::reconcile::{DigestChange, Outcome, OutcomeKind};

/// Receives progress events during reconciliation.
///
/// All methods default to doing nothing.
pub trait Reporter {
    /// A digest mismatch was found. Called before the manifest is written.
    fn file_updated(&mut self, _package: &str, _change: &DigestChange, _dry_run: bool) {}

    /// A listed file does not exist on disk.
    fn file_missing(&mut self, _package: &str, _path: &str) {}

    /// A listed file exists but could not be read (tolerant policy only).
    fn file_unreadable(&mut self, _package: &str, _path: &str, _error: &std::io::Error) {}

    /// A package finished with the given outcome.
    fn package_finished(&mut self, _package: &str, _outcome: &Outcome) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// A single event captured by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Updated {
        package: String,
        change: DigestChange,
        dry_run: bool,
    },
    Missing {
        package: String,
        path: String,
    },
    Unreadable {
        package: String,
        path: String,
    },
    Finished {
        package: String,
        kind: OutcomeKind,
    },
}

/// Collects events in memory, in the order they were reported.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub events: Vec<ReportEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes reported for `package`, in order.
    pub fn updates_for(&self, package: &str) -> Vec<&DigestChange> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ReportEvent::Updated {
                    package: p, change, ..
                } if p == package => Some(change),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn file_updated(&mut self, package: &str, change: &DigestChange, dry_run: bool) {
        self.events.push(ReportEvent::Updated {
            package: package.to_string(),
            change: change.clone(),
            dry_run,
        });
    }

    fn file_missing(&mut self, package: &str, path: &str) {
        self.events.push(ReportEvent::Missing {
            package: package.to_string(),
            path: path.to_string(),
        });
    }

    fn file_unreadable(&mut self, package: &str, path: &str, _error: &std::io::Error) {
        self.events.push(ReportEvent::Unreadable {
            package: package.to_string(),
            path: path.to_string(),
        });
    }

    fn package_finished(&mut self, package: &str, outcome: &Outcome) {
        self.events.push(ReportEvent::Finished {
            package: package.to_string(),
            kind: outcome.kind(),
        });
    }
}
