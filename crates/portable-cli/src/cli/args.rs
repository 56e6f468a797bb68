//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use portable_core::ResetPolicy;

use crate::output::OutputFormat;

/// Portable configuration generator
///
/// Asks for the application identifier in reverse DNS order
/// (e.g. "org.example.App") and counts its dots until there are
/// more than the threshold.
#[derive(Parser, Debug)]
#[command(name = "portable-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path (default: platform config dir)
    #[arg(long, env = "PORTABLE_CONFIG", global = true)]
    pub config: Option<String>,

    /// Stop once more than this many dots were seen
    #[arg(short, long, global = true)]
    pub threshold: Option<usize>,

    /// Dot counter reset policy (cumulative, per-attempt)
    #[arg(short, long, global = true)]
    pub reset: Option<ResetPolicy>,

    /// Hide the per-character scan trace
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format of the final report
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for an application ID (default)
    Run,

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (threshold, reset, trace, output_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
