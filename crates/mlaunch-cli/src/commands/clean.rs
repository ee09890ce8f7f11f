use std::process::ExitCode;

use miette::Result;

use mlaunch_ops::ops_clean::{clean, CleanResult};

use super::Session;

pub fn exec(session: &Session) -> Result<ExitCode> {
    match clean(&session.settings, &session.ctx.cwd)? {
        CleanResult::Cleaned(path) => println!("Cleaned {}", path.display()),
        CleanResult::NothingToClean(path) => {
            println!("Nothing to clean ({} does not exist)", path.display())
        }
    }
    Ok(ExitCode::SUCCESS)
}
