//! Command implementations.

pub mod config;
pub mod run;

use std::path::PathBuf;

use portable_core::ValidatorSettings;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Config file in effect
    pub config_path: PathBuf,

    /// Threshold and reset policy after flags were applied
    pub settings: ValidatorSettings,

    /// Output format
    pub output_format: OutputFormat,

    /// Whether to print the per-character trace
    pub trace: bool,

    /// Verbose output
    pub verbose: bool,
}
