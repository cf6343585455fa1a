use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors raised while assembling `CheckSettings` from defaults, environment and flags.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The environment layer could not be built or deserialized.
    #[error("Failed to read settings from the environment: {source}")]
    Environment {
        #[source]
        source: ConfigLoaderError,
    },
    /// A list setting ended up with no entries.
    #[error("Setting `{field}` must not be empty")]
    EmptyList { field: &'static str },
    /// A single value failed validation.
    #[error("Setting `{field}` has invalid value `{value}`: {message}")]
    InvalidValue {
        field: &'static str,
        value: String,
        message: String,
    },
    /// A header sub-pattern is not a valid regular expression.
    #[error("Header pattern `{pattern}` does not compile: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl SettingsError {
    pub fn from_environment_error(source: ConfigLoaderError) -> Self {
        Self::Environment { source }
    }
}

/// Failures that end a check run with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("No directories specified.")]
    NoDirectories,
    /// The walk below `root` could not continue.
    #[error("{source}")]
    Traversal {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// First missing header in fail-fast mode.
    #[error("Missing copyright in {path}?")]
    HeaderMissing { path: PathBuf },
    /// Every missing header collected in keep-going mode, in traversal order.
    #[error("{} file(s) missing copyright", .paths.len())]
    HeadersMissing { paths: Vec<PathBuf> },
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl CheckError {
    /// Lines written to stderr for this failure.
    pub fn diagnostic_lines(&self) -> Vec<String> {
        match self {
            CheckError::HeadersMissing { paths } => paths
                .iter()
                .map(|path| format!("Missing copyright in {}?", path.display()))
                .chain(std::iter::once(self.to_string()))
                .collect(),
            other => vec![other.to_string()],
        }
    }
}
