use std::process::ExitCode;

use miette::Result;

use super::Session;

pub fn exec(session: &Session, command: &[String]) -> Result<ExitCode> {
    let Some((program, args)) = command.split_first() else {
        return Ok(ExitCode::FAILURE);
    };
    let code = mlaunch_ops::ops_exec::exec(&session.settings, &session.ctx.cwd, program, args)?;
    tracing::debug!("{program} exited with code {code}");
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
