//! Binary-side functionality
//!
//! This module contains what the `mtex` binary needs around the generator:
//! - CLI parsing and validation
//! - The user settings file
//! - Running a generation and reporting errors

pub mod cli;
pub mod config_file;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use cli::{CliArgs, OracleKind, Settings};
pub use config_file::ConfigFile;
pub use runner::{generate, run_app};
