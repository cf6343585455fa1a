//! Run totals.
use std::path::PathBuf;

use tracing::info;

use super::filter::EntryDecision;

/// Entries skipped by the filter, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    pub not_regular: usize,
    pub excluded_dir: usize,
    pub extension_not_allowed: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.not_regular + self.excluded_dir + self.extension_not_allowed
    }
}

/// Totals accumulated across every root of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub visited: usize,
    pub skipped: SkipCounts,
    /// Candidates whose header was scanned.
    pub checked: usize,
    /// Files without a header, in traversal order.
    pub missing: Vec<PathBuf>,
}

impl CheckReport {
    /// Count a visited entry under its filter decision.
    pub fn record(&mut self, decision: EntryDecision) {
        self.visited += 1;
        match decision {
            EntryDecision::Candidate => self.checked += 1,
            EntryDecision::NotRegular => self.skipped.not_regular += 1,
            EntryDecision::ExcludedDir => self.skipped.excluded_dir += 1,
            EntryDecision::ExtensionNotAllowed => self.skipped.extension_not_allowed += 1,
        }
    }

    pub fn record_missing(&mut self, path: PathBuf) {
        self.missing.push(path);
    }

    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn log_summary(&self) {
        info!(
            target: "copyright_check::report",
            visited = self.visited,
            checked = self.checked,
            skipped = self.skipped.total(),
            excluded_dir = self.skipped.excluded_dir,
            missing = self.missing.len(),
            "Copyright check finished"
        );
    }
}
