//! Compiled header pattern.

use regex::bytes::Regex;

use crate::lib::errors::SettingsError;

/// One regular expression made of every header sub-pattern joined with `|`.
///
/// Lines are matched as raw bytes, so files that are not valid UTF-8 still scan.
#[derive(Debug, Clone)]
pub struct HeaderPattern {
    regex: Regex,
}

impl HeaderPattern {
    /// Compile the alternation of `patterns`.
    ///
    /// Each sub-pattern is validated on its own first so that the error names the
    /// offending entry rather than the joined expression.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self, SettingsError> {
        if patterns.is_empty() {
            return Err(SettingsError::EmptyList { field: "patterns" });
        }

        let mut alternatives = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: "patterns",
                    value: String::new(),
                    message: "an empty pattern matches every line".into(),
                });
            }
            Regex::new(pattern).map_err(|source| SettingsError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            alternatives.push(format!("(?:{pattern})"));
        }

        let joined = alternatives.join("|");
        let regex = Regex::new(&joined).map_err(|source| SettingsError::InvalidPattern {
            pattern: joined.clone(),
            source,
        })?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, line: &[u8]) -> bool {
        self.regex.is_match(line)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
