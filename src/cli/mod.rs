//! CLI entrypoint module structure.
use crate::{
    check::{CheckReport, Checker},
    lib::errors::CheckError,
};

pub mod args;
pub mod exit;
pub mod profile;

pub use args::CheckArgs;
pub use exit::RunExit;
pub use profile::{resolve_profile, CheckProfile};

/// Run the check described by `profile`.
pub fn execute(profile: CheckProfile) -> Result<CheckReport, CheckError> {
    let checker = Checker::new(profile.settings);
    checker.run(&profile.roots)
}
