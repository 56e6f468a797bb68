//! Output formatting for the final report.

use std::io::Write;
use std::str::FromStr;

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use portable_core::Outcome;
use serde::{Deserialize, Serialize};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Write the final report for a finished prompt loop.
pub fn write_report<W: Write>(
    out: &mut W,
    outcome: &Outcome,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, outcome)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, outcome)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.serialize(outcome)?;
            writer.flush()?;
        }
        OutputFormat::Pretty => {
            writeln!(
                out,
                "{} {}",
                "Calculated dot count:".bold(),
                outcome.dots.to_string().cyan().bold()
            )?;

            if verbose {
                writeln!(
                    out,
                    "{}",
                    format!(
                        "Accepted '{}' after {} attempt(s), {} dot(s) scanned ({} counter, threshold {})",
                        outcome.accepted,
                        outcome.attempts,
                        outcome.total_dots,
                        outcome.reset,
                        outcome.threshold
                    )
                    .dimmed()
                )?;
            }
        }
    }

    Ok(())
}
