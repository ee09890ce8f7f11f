pub mod ops_certs;
pub mod ops_clean;
pub mod ops_exec;
pub mod ops_init;
pub mod ops_platform;

use mlaunch_core::settings::Settings;
use mlaunch_util::process::CommandBuilder;

/// Export every resolved setting as an environment variable of `cmd`.
pub fn with_settings_env(cmd: CommandBuilder, settings: &Settings) -> CommandBuilder {
    cmd.envs(settings.iter())
}
