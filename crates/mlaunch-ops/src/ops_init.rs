//! Operation: create a default `launch.json`.

use std::path::{Path, PathBuf};

use mlaunch_core::launch_file::{default_template, launch_file_path};
use mlaunch_core::LAUNCH_FILE;
use mlaunch_util::errors::{LaunchError, LaunchResult};
use mlaunch_util::fs::write_if_absent;

/// Write the default launch file into `dir` unless one is already there.
///
/// Calling this twice is safe: the second call leaves the file untouched and
/// reports [`InitOutcome::AlreadyExists`].
pub fn init(dir: &Path) -> LaunchResult<InitOutcome> {
    let path = launch_file_path(dir);
    let created = write_if_absent(&path, &default_template()).map_err(|e| {
        LaunchError::LaunchFile {
            message: format!("Failed to write {}: {e}", path.display()),
        }
    })?;

    if created {
        tracing::debug!("Wrote default {} to {}", LAUNCH_FILE, path.display());
        Ok(InitOutcome::Created(path))
    } else {
        Ok(InitOutcome::AlreadyExists(path))
    }
}

/// Result of an init operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

impl InitOutcome {
    /// User-facing summary line.
    pub fn message(&self) -> String {
        match self {
            InitOutcome::Created(_) => {
                format!("{LAUNCH_FILE} created. Open it and fill out the vars")
            }
            InitOutcome::AlreadyExists(_) => format!("{LAUNCH_FILE} already exists"),
        }
    }
}
