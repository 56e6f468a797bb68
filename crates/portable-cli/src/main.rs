//! portable-config - Application ID prompt
//!
//! Asks for a reverse-DNS application identifier and counts its dots.

use anyhow::Result;

fn main() -> Result<()> {
    portable_cli::run()
}
