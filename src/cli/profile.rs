//! CheckProfile and settings resolution.
use std::path::PathBuf;

use crate::{
    check::{CheckSettings, RawCheckSettings},
    lib::errors::CheckError,
};

/// Everything one run needs: the roots in argument order and validated settings.
#[derive(Debug, Clone)]
pub struct CheckProfile {
    pub roots: Vec<PathBuf>,
    pub settings: CheckSettings,
}

/// Resolve settings in the order: defaults → environment → flags.
///
/// `roots` are taken as given; `CheckArgs::into_profile` rejects an empty list.
pub fn resolve_profile(
    roots: Vec<PathBuf>,
    environment: RawCheckSettings,
    flags: RawCheckSettings,
) -> Result<CheckProfile, CheckError> {
    let settings = CheckSettings::from_raw(environment.overlay(flags))?;
    Ok(CheckProfile { roots, settings })
}
