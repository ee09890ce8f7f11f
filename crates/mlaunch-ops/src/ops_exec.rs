//! Operation: run an external build tool with the resolved settings exported.

use std::path::Path;

use mlaunch_core::settings::Settings;
use mlaunch_util::errors::{LaunchError, LaunchResult};
use mlaunch_util::process::CommandBuilder;

use crate::with_settings_env;

/// Run `program args...` in `cwd` with inherited stdio and return its exit code.
///
/// A child killed by a signal is reported as exit code 1.
pub fn exec(settings: &Settings, cwd: &Path, program: &str, args: &[String]) -> LaunchResult<i32> {
    if program.is_empty() {
        return Err(LaunchError::Generic {
            message: "No program given to exec".to_string(),
        }
        .into());
    }

    let cmd = CommandBuilder::new(program).args(args).cwd(cwd);
    let status = with_settings_env(cmd, settings).status()?;
    Ok(status.code().unwrap_or(1))
}
