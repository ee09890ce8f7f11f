//! Decides whether a CLI invocation needs `launch.json` to exist.

use std::path::Path;

use mlaunch_util::errors::{LaunchError, LaunchResult};

use crate::launch_file::launch_file_path;
use crate::LAUNCH_FILE;

/// Actions that run without a launch file.
pub const BYPASS_ACTIONS: &[&str] = &["init", "help", "--version", "-v"];

/// Whether the action named by `args` (arguments after the program name)
/// requires a launch file. An empty argument list never does.
pub fn launch_file_required<S: AsRef<str>>(args: &[S]) -> bool {
    match args.first() {
        None => false,
        Some(action) => !BYPASS_ACTIONS.contains(&action.as_ref()),
    }
}

/// Check the launch file requirement for `args` in `dir`.
///
/// Returns `Ok(false)` for bypass actions, `Ok(true)` when the action needs
/// the file and it exists, and a [`LaunchError::LaunchFile`] otherwise.
pub fn check_launch_file<S: AsRef<str>>(args: &[S], dir: &Path) -> LaunchResult<bool> {
    if !launch_file_required(args) {
        return Ok(false);
    }

    let path = launch_file_path(dir);
    if path.is_file() {
        Ok(true)
    } else {
        Err(LaunchError::LaunchFile {
            message: format!("Could not find {LAUNCH_FILE} in {}", dir.display()),
        }
        .into())
    }
}
