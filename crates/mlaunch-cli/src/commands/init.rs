use std::path::Path;
use std::process::ExitCode;

use miette::Result;

use mlaunch_ops::ops_init::{init, InitOutcome};
use mlaunch_util::progress::{status, status_info};

pub fn exec(cwd: &Path) -> Result<ExitCode> {
    let outcome = init(cwd)?;
    match &outcome {
        InitOutcome::Created(path) => status("Created", &path.display().to_string()),
        InitOutcome::AlreadyExists(path) => status_info("Exists", &path.display().to_string()),
    }
    println!("{}", outcome.message());
    Ok(ExitCode::SUCCESS)
}
