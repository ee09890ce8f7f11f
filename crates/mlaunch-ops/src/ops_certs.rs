//! Operation: import signing certificates through fastlane.

use std::path::Path;

use mlaunch_core::settings::Settings;
use mlaunch_util::errors::{LaunchError, LaunchResult};
use mlaunch_util::process::CommandBuilder;

use crate::with_settings_env;

/// Value reported by a successful import.
pub const IMPORTED: &str = "imported";

/// Runs `<program> import_certs` with the resolved settings in its environment.
#[derive(Debug, Clone)]
pub struct CertificateImporter {
    program: String,
}

impl Default for CertificateImporter {
    fn default() -> Self {
        Self::new("fastlane")
    }
}

impl CertificateImporter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run the import once in `cwd`. No retries.
    pub fn import(&self, settings: &Settings, cwd: &Path) -> LaunchResult<&'static str> {
        let cmd = CommandBuilder::new(&self.program)
            .arg("import_certs")
            .cwd(cwd);
        let status = with_settings_env(cmd, settings).status()?;

        if status.success() {
            Ok(IMPORTED)
        } else {
            Err(LaunchError::Process {
                message: match status.code() {
                    Some(code) => format!("{} import_certs exited with code {code}", self.program),
                    None => format!("{} import_certs was terminated by a signal", self.program),
                },
            }
            .into())
        }
    }
}
