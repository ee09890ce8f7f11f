//! Operation: ask the Meteor CLI which mobile platforms a project has.

use std::path::Path;

use mlaunch_util::process::CommandBuilder;

/// Platforms `mlaunch platforms` reports on.
pub const MOBILE_PLATFORMS: &[&str] = &["ios", "android"];

/// Runs `<program> list-platforms` and reads one platform per output line.
#[derive(Debug, Clone)]
pub struct PlatformProbe {
    program: String,
}

impl Default for PlatformProbe {
    fn default() -> Self {
        Self::new("meteor")
    }
}

impl PlatformProbe {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Platforms listed by the tool when run in `project_dir`.
    ///
    /// `None` when the tool cannot be spawned or exits unsuccessfully.
    pub fn list(&self, project_dir: &Path) -> Option<Vec<String>> {
        let output = match CommandBuilder::new(&self.program)
            .arg("list-platforms")
            .cwd(project_dir)
            .exec()
        {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("{} list-platforms failed to start: {e}", self.program);
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!(
                "{} list-platforms exited with {}",
                self.program,
                output.status
            );
            return None;
        }

        Some(
            String::from_utf8_lossy(&output.stdout)
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Whether `platform` is installed in `project_dir`.
    pub fn has_platform(&self, project_dir: &Path, platform: &str) -> bool {
        self.list(project_dir)
            .is_some_and(|platforms| platforms.iter().any(|p| p == platform))
    }
}
