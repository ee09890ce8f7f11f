//! Core types for mlaunch.
//!
//! This crate loads `launch.json`, merges it with the process environment,
//! and derives the output paths that iOS/Android build tools consume. It
//! also decides which CLI actions need a launch file at all.
//!
//! Everything here is synchronous and free of subprocess I/O.

/// Name of the launch file, looked up in the invocation directory.
pub const LAUNCH_FILE: &str = "launch.json";

pub mod gate;
pub mod keys;
pub mod launch_file;
pub mod paths;
pub mod settings;
