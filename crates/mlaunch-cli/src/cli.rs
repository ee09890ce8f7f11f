//! CLI argument definitions for mlaunch.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{ArgAction, CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mlaunch",
    version,
    disable_version_flag = true,
    about = "Prepare launch.json settings for Meteor iOS/Android builds",
    long_about = "mlaunch merges launch.json with your environment, derives the output paths \
                  that Xcode, fastlane and Gradle expect, and hands them to those tools."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a launch.json in the current directory
    Init,

    /// Print the resolved settings
    Env {
        /// Show secret values unmasked
        #[arg(long)]
        reveal: bool,
        /// Include every environment variable, not just launch.json and derived keys
        #[arg(long)]
        all: bool,
        /// Print as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// Remove the Meteor build output directory
    Clean,

    /// Import signing certificates with fastlane
    ImportCerts,

    /// Show which mobile platforms the Meteor project has
    Platforms,

    /// Run a build tool with the resolved settings in its environment
    Exec {
        /// Program and arguments, e.g. `mlaunch exec -- fastlane ios beta`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

impl Command {
    /// Action name as typed on the command line.
    pub fn action(&self) -> &'static str {
        match self {
            Command::Init => "init",
            Command::Env { .. } => "env",
            Command::Clean => "clean",
            Command::ImportCerts => "import-certs",
            Command::Platforms => "platforms",
            Command::Exec { .. } => "exec",
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

pub fn print_help() {
    let _ = Cli::command().print_help();
}
