//! Layered check settings: built-in defaults, then environment, then CLI flags.
use std::collections::BTreeSet;

use config::{Config, Environment};
use serde::Deserialize;
use tracing::debug;

use super::pattern::HeaderPattern;
use crate::lib::{errors::SettingsError, paths::normalize_extension};

pub const DEFAULT_EXTENSIONS: &[&str] = &[".c", ".go"];
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["vendor"];
pub const DEFAULT_PATTERNS: &[&str] = &["Copyright"];
pub const DEFAULT_MAX_LINES: usize = 5;

/// Prefix of the environment variables read by `RawCheckSettings::from_env`.
pub const ENV_PREFIX: &str = "COPYRIGHT_CHECK";
const LIST_SEPARATOR: char = ',';

/// What to do after the first file without a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    #[default]
    FailFast,
    KeepGoing,
}

impl FailureMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FailureMode::FailFast => "fail-fast",
            FailureMode::KeepGoing => "keep-going",
        }
    }
}

/// Validated, immutable settings for one run.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    /// Allowed extensions, each with its leading dot.
    pub extensions: BTreeSet<String>,
    pub excluded_dirs: BTreeSet<String>,
    pub header: HeaderPattern,
    /// Number of leading lines examined per file.
    pub max_lines: usize,
    pub mode: FailureMode,
}

/// Unvalidated settings as read from one layer. `None` leaves the lower layer in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCheckSettings {
    pub extensions: Option<Vec<String>>,
    pub exclude_dirs: Option<Vec<String>>,
    pub patterns: Option<Vec<String>>,
    pub max_lines: Option<usize>,
    pub keep_going: Option<bool>,
}

/// Environment values kept as strings; lists are comma separated.
///
/// Values are never type-guessed, so `2020` stays a pattern and `true` a directory name.
#[derive(Debug, Default, Deserialize)]
struct EnvCheckSettings {
    extensions: Option<String>,
    exclude_dirs: Option<String>,
    patterns: Option<String>,
    max_lines: Option<usize>,
    keep_going: Option<bool>,
}

impl EnvCheckSettings {
    fn into_raw(self) -> RawCheckSettings {
        fn split(value: String) -> Vec<String> {
            value.split(LIST_SEPARATOR).map(str::to_string).collect()
        }

        RawCheckSettings {
            extensions: self.extensions.map(split),
            exclude_dirs: self.exclude_dirs.map(split),
            patterns: self.patterns.map(split),
            max_lines: self.max_lines,
            keep_going: self.keep_going,
        }
    }
}

impl RawCheckSettings {
    /// Read `COPYRIGHT_CHECK_*` variables from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(environment: Environment) -> Result<Self, SettingsError> {
        let document = Config::builder()
            .add_source(environment.try_parsing(false))
            .build()
            .map_err(SettingsError::from_environment_error)?;
        let env: EnvCheckSettings = document
            .try_deserialize()
            .map_err(SettingsError::from_environment_error)?;
        let raw = env.into_raw();

        debug!(
            target: "copyright_check::settings",
            overrides = ?raw,
            "Read environment overrides"
        );
        Ok(raw)
    }

    /// Layer `upper` on top of `self`; every field set in `upper` wins.
    pub fn overlay(self, upper: RawCheckSettings) -> Self {
        Self {
            extensions: upper.extensions.or(self.extensions),
            exclude_dirs: upper.exclude_dirs.or(self.exclude_dirs),
            patterns: upper.patterns.or(self.patterns),
            max_lines: upper.max_lines.or(self.max_lines),
            keep_going: upper.keep_going.or(self.keep_going),
        }
    }
}

impl CheckSettings {
    /// Fill unset fields with the defaults and validate the result.
    pub fn from_raw(raw: RawCheckSettings) -> Result<Self, SettingsError> {
        let extensions = parse_extensions(raw.extensions)?;
        let excluded_dirs = parse_excluded_dirs(raw.exclude_dirs)?;
        let header = match raw.patterns {
            Some(patterns) => HeaderPattern::compile(&patterns)?,
            None => HeaderPattern::compile(DEFAULT_PATTERNS)?,
        };
        let max_lines = parse_max_lines(raw.max_lines)?;
        let mode = if raw.keep_going.unwrap_or(false) {
            FailureMode::KeepGoing
        } else {
            FailureMode::FailFast
        };

        Ok(Self {
            extensions,
            excluded_dirs,
            header,
            max_lines,
            mode,
        })
    }

    /// Whether `extension` (with its leading dot) is in the allow-list.
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }
}

fn parse_extensions(raw: Option<Vec<String>>) -> Result<BTreeSet<String>, SettingsError> {
    let Some(values) = raw else {
        return Ok(DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect());
    };
    if values.is_empty() {
        return Err(SettingsError::EmptyList {
            field: "extensions",
        });
    }

    values
        .into_iter()
        .map(|value| {
            normalize_extension(&value).ok_or_else(|| SettingsError::InvalidValue {
                field: "extensions",
                value,
                message: "use a bare extension such as `go` or `.go`".into(),
            })
        })
        .collect()
}

fn parse_excluded_dirs(raw: Option<Vec<String>>) -> Result<BTreeSet<String>, SettingsError> {
    let Some(values) = raw else {
        return Ok(DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect());
    };

    values
        .into_iter()
        .map(|value| {
            let name = value.trim();
            let is_single_component = !name.is_empty()
                && name != "."
                && name != ".."
                && !name.contains(|c: char| matches!(c, '/' | '\\'));
            if !is_single_component {
                return Err(SettingsError::InvalidValue {
                    field: "exclude_dirs",
                    value: value.clone(),
                    message: "use a single directory name such as `vendor`".into(),
                });
            }
            Ok(name.to_string())
        })
        .collect()
}

fn parse_max_lines(raw: Option<usize>) -> Result<usize, SettingsError> {
    match raw {
        None => Ok(DEFAULT_MAX_LINES),
        Some(0) => Err(SettingsError::InvalidValue {
            field: "max_lines",
            value: "0".into(),
            message: "at least one line must be examined".into(),
        }),
        Some(lines) => Ok(lines),
    }
}
