//! Command dispatch and handler modules.

mod certs;
mod clean;
mod env;
mod exec;
mod init;
mod platforms;

use std::collections::BTreeMap;
use std::process::ExitCode;

use miette::Result;

use mlaunch_core::gate::check_launch_file;
use mlaunch_core::launch_file;
use mlaunch_core::settings::{resolve, ResolveContext, Settings};

use crate::cli::{self, Cli, Command};

/// Launch file contents and resolved settings for one invocation.
pub struct Session {
    pub ctx: ResolveContext,
    pub launch_file: BTreeMap<String, String>,
    pub settings: Settings,
}

impl Session {
    fn load() -> Result<Self> {
        let ctx = ResolveContext::from_process()?;
        let launch_file = launch_file::load(&ctx.cwd);
        let env: BTreeMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        let settings = resolve(&launch_file, &env, &ctx);
        Ok(Self {
            ctx,
            launch_file,
            settings,
        })
    }
}

/// Route a parsed CLI invocation to the appropriate command handler.
///
/// The parsed action decides whether `launch.json` must exist before any
/// handler runs; global flags such as `--verbose` never count as the action.
pub fn dispatch(cli: Cli) -> Result<ExitCode> {
    let cwd = std::env::current_dir().map_err(mlaunch_util::errors::LaunchError::Io)?;
    let action: Vec<&str> = cli.command.iter().map(Command::action).collect();
    check_launch_file(&action, &cwd)?;

    let Some(command) = cli.command else {
        cli::print_help();
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Command::Init => init::exec(&cwd),
        Command::Env { reveal, all, json } => env::exec(&Session::load()?, reveal, all, json),
        Command::Clean => clean::exec(&Session::load()?),
        Command::ImportCerts => certs::exec(&Session::load()?),
        Command::Platforms => platforms::exec(&Session::load()?),
        Command::Exec { command } => exec::exec(&Session::load()?, &command),
    }
}
