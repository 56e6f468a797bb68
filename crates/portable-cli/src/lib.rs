//! # portable-cli
//!
//! Interactive front end for the Portable configuration generator.
//!
//! ## Features
//!
//! - **Prompt loop**: asks for a reverse-DNS application ID until it has enough dots
//! - **Scan trace**: echoes input and traces every character, `--quiet` hides the trace
//! - **Reset policies**: count dots across attempts or judge each attempt alone
//! - **Multiple output formats**: Pretty, JSON, CSV, YAML for the final report
//! - **User configuration**: TOML file with `config show/set/path`

pub mod cli;
pub mod config;
pub mod console;
pub mod logging;
pub mod output;

pub use cli::run;
