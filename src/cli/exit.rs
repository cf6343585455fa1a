//! Process exit reporting.
use std::process::ExitCode;

use anyhow::Error;

use crate::lib::errors::CheckError;

/// A failed run: the stderr lines to print and the exit status to return.
#[derive(Debug)]
pub struct RunExit {
    lines: Vec<String>,
    exit_code: ExitCode,
}

impl RunExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            lines: vec![format!("{err:?}")],
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn from_check_error(err: CheckError) -> Self {
        Self {
            lines: err.diagnostic_lines(),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn report(self) -> ExitCode {
        for line in &self.lines {
            eprintln!("{line}");
        }
        self.exit_code
    }
}
