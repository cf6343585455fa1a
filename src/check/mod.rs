//! Copyright header check: walk roots, filter entries, scan candidate headers.
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use crate::lib::{
    errors::CheckError,
    fs::walk_entries,
    telemetry::{self, RootSpan},
};

pub mod filter;
pub mod pattern;
pub mod report;
pub mod scanner;
pub mod settings;

pub use filter::{classify, EntryDecision};
pub use pattern::HeaderPattern;
pub use report::{CheckReport, SkipCounts};
pub use scanner::{scan_file, scan_lines, HeaderStatus, MAX_LINE_BYTES};
pub use settings::{
    CheckSettings, FailureMode, RawCheckSettings, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS,
    DEFAULT_MAX_LINES, DEFAULT_PATTERNS, ENV_PREFIX,
};

/// Runs the header check over a list of roots with fixed settings.
#[derive(Debug, Clone)]
pub struct Checker {
    settings: CheckSettings,
}

impl Checker {
    pub fn new(settings: CheckSettings) -> Self {
        telemetry::log_settings(&settings);
        Self { settings }
    }

    /// Check every root in order.
    ///
    /// Traversal and I/O errors abort at once. A missing header aborts at once in
    /// fail-fast mode; in keep-going mode all of them are returned together after
    /// the last root.
    pub fn run(&self, roots: &[PathBuf]) -> Result<CheckReport, CheckError> {
        if roots.is_empty() {
            return Err(CheckError::NoDirectories);
        }

        let mut report = CheckReport::default();
        for root in roots {
            self.check_root(root, &mut report)?;
        }
        report.log_summary();

        if report.is_clean() {
            Ok(report)
        } else {
            Err(CheckError::HeadersMissing {
                paths: report.missing,
            })
        }
    }

    fn check_root(&self, root: &Path, report: &mut CheckReport) -> Result<(), CheckError> {
        let span = RootSpan::start(root);
        let checked_before = report.checked;
        let missing_before = report.missing.len();

        let result = {
            let _entered = span.enter();
            self.walk_root(root, report)
        };

        span.finish(
            report.checked - checked_before,
            report.missing.len() - missing_before,
        );
        result
    }

    fn walk_root(&self, root: &Path, report: &mut CheckReport) -> Result<(), CheckError> {
        for entry in walk_entries(root) {
            let entry = entry?;
            let path = entry.path();
            let decision = classify(&self.settings, path, entry.file_type());
            report.record(decision);
            if decision != EntryDecision::Candidate {
                trace!(
                    target: "copyright_check::walk",
                    path = %path.display(),
                    reason = decision.as_str(),
                    "Skipped entry"
                );
                continue;
            }

            match scan_file(path, &self.settings.header, self.settings.max_lines)? {
                HeaderStatus::Present { line } => {
                    debug!(
                        target: "copyright_check::walk",
                        path = %path.display(),
                        line = line,
                        "Header found"
                    );
                }
                HeaderStatus::Missing { examined } => {
                    info!(
                        target: "copyright_check::walk",
                        path = %path.display(),
                        examined = examined,
                        "Header missing"
                    );
                    if self.settings.mode == FailureMode::FailFast {
                        return Err(CheckError::HeaderMissing {
                            path: path.to_path_buf(),
                        });
                    }
                    report.record_missing(path.to_path_buf());
                }
            }
        }
        Ok(())
    }
}
