//! CLI argument definitions and `CheckProfile` construction.
use std::path::PathBuf;

use clap::Parser;

use super::{resolve_profile, CheckProfile};
use crate::{check::RawCheckSettings, lib::errors::CheckError};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Fail when source files lack a copyright header in their first lines",
    long_about = None,
    after_help = "Flags replace the matching COPYRIGHT_CHECK_* environment variable; lists in the environment are comma separated."
)]
pub struct CheckArgs {
    /// Directories to walk (a regular file is checked directly).
    #[arg(value_name = "DIR")]
    pub dirs: Vec<PathBuf>,
    /// Extension to check, e.g. `go` or `.go`. Repeat to allow several.
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,
    /// Directory name whose subtree is skipped. Repeat to exclude several.
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,
    /// Header regular expression; several are joined with OR.
    #[arg(long = "pattern", value_name = "REGEX")]
    pub patterns: Vec<String>,
    /// Number of leading lines searched for the header.
    #[arg(long, value_name = "N")]
    pub max_lines: Option<usize>,
    /// Report every file without a header instead of stopping at the first.
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,
}

impl CheckArgs {
    /// Flag values as the topmost settings layer. Absent flags stay `None`.
    pub fn overrides(&self) -> RawCheckSettings {
        fn non_empty(values: &[String]) -> Option<Vec<String>> {
            (!values.is_empty()).then(|| values.to_vec())
        }

        RawCheckSettings {
            extensions: non_empty(&self.extensions),
            exclude_dirs: non_empty(&self.exclude_dirs),
            patterns: non_empty(&self.patterns),
            max_lines: self.max_lines,
            keep_going: self.keep_going.then_some(true),
        }
    }

    /// Validate roots, then layer environment and flags into a `CheckProfile`.
    pub fn into_profile(self) -> Result<CheckProfile, CheckError> {
        if self.dirs.is_empty() {
            return Err(CheckError::NoDirectories);
        }
        let overrides = self.overrides();
        resolve_profile(self.dirs, RawCheckSettings::from_env()?, overrides)
    }
}
