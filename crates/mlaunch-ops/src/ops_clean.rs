//! Operation: remove the Meteor build output directory.

use std::path::{Path, PathBuf};

use mlaunch_core::settings::Settings;
use mlaunch_util::errors::{LaunchError, LaunchResult};
use mlaunch_util::fs::remove_dir_if_exists;

/// Remove the tree at `METEOR_OUTPUT_ABSOLUTE`.
///
/// Refuses to delete `cwd` itself or any of its ancestors, which is what an
/// output directory of `.` or `..` would otherwise do.
pub fn clean(settings: &Settings, cwd: &Path) -> LaunchResult<CleanResult> {
    let output = settings.paths().meteor_output_absolute.clone();

    if cwd.starts_with(&output) {
        return Err(LaunchError::Generic {
            message: format!(
                "Refusing to clean {}: it contains the current directory",
                output.display()
            ),
        }
        .into());
    }

    if remove_dir_if_exists(&output).map_err(LaunchError::Io)? {
        Ok(CleanResult::Cleaned(output))
    } else {
        Ok(CleanResult::NothingToClean(output))
    }
}

/// Result of a clean operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanResult {
    Cleaned(PathBuf),
    NothingToClean(PathBuf),
}
