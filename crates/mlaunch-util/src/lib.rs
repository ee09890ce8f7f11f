//! Shared utilities for mlaunch.
//!
//! This crate provides cross-cutting concerns used by the other mlaunch
//! crates: the error type, filesystem helpers, process spawning, and
//! terminal status output.

pub mod errors;
pub mod fs;
pub mod process;
pub mod progress;
