//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use std::io::IsTerminal;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Config;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, so its terminal state decides their colors.
    let ansi = !cli.no_color && std::io::stderr().is_terminal();
    crate::logging::init(cli.verbose, ansi);

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    // Load configuration
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;

    // Flags override the config file
    let mut settings = config.settings();
    if let Some(threshold) = cli.threshold {
        settings.threshold = threshold;
    }
    if let Some(reset) = cli.reset {
        settings.reset = reset;
    }

    let ctx = commands::Context {
        config_path,
        settings,
        output_format: cli.output.or(config.output_format).unwrap_or_default(),
        trace: config.trace && !cli.quiet,
        verbose: cli.verbose,
    };

    tracing::debug!(?ctx, "resolved context");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::execute(&ctx),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}
