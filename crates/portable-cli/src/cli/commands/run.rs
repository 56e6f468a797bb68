//! `portable-config run` - Prompt for an application ID.

use std::io::{self, BufRead, Write};

use anyhow::{Context as _, Result};
use portable_core::{Controller, Outcome, TokenReader};

use super::Context;
use crate::console::{self, Console};
use crate::output::{self, OutputFormat};

pub fn execute(ctx: &Context) -> Result<()> {
    let stdin = io::stdin();
    let mut input = TokenReader::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Structured reports own stdout, the conversation moves to stderr.
    let outcome = if ctx.output_format == OutputFormat::Pretty {
        session(ctx, &mut input, &mut out)?
    } else {
        let stderr = io::stderr();
        session(ctx, &mut input, &mut stderr.lock())?
    };

    output::write_report(&mut out, &outcome, ctx.output_format, ctx.verbose)?;
    out.flush()?;

    Ok(())
}

/// Print the banner and run the prompt loop against `input`, writing the
/// conversation to `out`.
pub fn session<R: BufRead, W: Write>(
    ctx: &Context,
    input: &mut TokenReader<R>,
    out: &mut W,
) -> Result<Outcome> {
    console::banner(out)?;

    let mut controller = Controller::new(ctx.settings);
    let outcome = {
        let mut transcript = Console::new(&mut *out, ctx.trace);
        controller
            .run(input, &mut transcript)
            .map_err(|e| {
                if e.is_input_error() {
                    tracing::debug!(error = %e, "stopped prompting");
                }
                e
            })
            .context("no application ID was accepted")?
    };

    writeln!(out)?;
    Ok(outcome)
}
