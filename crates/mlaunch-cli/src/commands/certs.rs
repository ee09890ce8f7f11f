use std::process::ExitCode;

use miette::Result;

use mlaunch_ops::ops_certs::CertificateImporter;
use mlaunch_util::progress::status;

use super::Session;

pub fn exec(session: &Session) -> Result<ExitCode> {
    status("Importing", "signing certificates with fastlane");
    let result = CertificateImporter::default().import(&session.settings, &session.ctx.cwd)?;
    println!("{result}");
    Ok(ExitCode::SUCCESS)
}
