use std::process::ExitCode;

use miette::Result;

use mlaunch_ops::ops_platform::{PlatformProbe, MOBILE_PLATFORMS};
use mlaunch_util::progress::{spinner, status_warn};

use super::Session;

pub fn exec(session: &Session) -> Result<ExitCode> {
    let project_dir = &session.settings.paths().meteor_input_dir;

    let pb = spinner("Asking meteor for installed platforms...");
    let listed = PlatformProbe::default().list(project_dir);
    pb.finish_and_clear();

    let Some(listed) = listed else {
        status_warn(
            "Warning",
            &format!("could not list platforms in {}", project_dir.display()),
        );
        return Ok(ExitCode::FAILURE);
    };

    for platform in MOBILE_PLATFORMS {
        let mark = if listed.iter().any(|p| p == platform) {
            "installed"
        } else {
            "missing"
        };
        println!("  {platform:<8} {mark}");
    }
    Ok(ExitCode::SUCCESS)
}
