use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all mlaunch operations.
#[derive(Debug, Error, Diagnostic)]
pub enum LaunchError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The launch file is missing or could not be written.
    #[error("Launch file error: {message}")]
    #[diagnostic(help("Run `mlaunch init` to create a launch.json in this directory"))]
    LaunchFile { message: String },

    /// An external tool (fastlane, meteor, ...) failed or could not be spawned.
    #[error("Process error: {message}")]
    #[diagnostic(help("Make sure the tool is installed and on your PATH"))]
    Process { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type LaunchResult<T> = miette::Result<T>;
