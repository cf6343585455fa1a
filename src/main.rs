//! Entry point for copyright-check.
use std::process::ExitCode;

use clap::Parser;
use copyright_check::{
    cli::{execute, CheckArgs, RunExit},
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), RunExit> {
    telemetry::init_tracing().map_err(RunExit::from_error)?;
    let args = CheckArgs::parse();
    let profile = args.into_profile().map_err(RunExit::from_check_error)?;
    execute(profile).map_err(RunExit::from_check_error)?;
    Ok(())
}
