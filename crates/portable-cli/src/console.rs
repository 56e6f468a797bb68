//! Console rendering of the prompt loop.

use std::io::{self, Write};

use colored::Colorize;
use portable_core::{Event, Transcript};

/// Print the welcome banner and the documentation notice.
pub fn banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Welcome to {} configuration generator.",
        "Portable".bold()
    )?;
    writeln!(
        out,
        "{}",
        "Please read the documentation first before packaging.".yellow()
    )?;
    writeln!(out)
}

/// Writes loop events as human-readable lines.
pub struct Console<W> {
    out: W,
    trace: bool,
}

impl<W: Write> Console<W> {
    /// `trace` controls the per-character lines; everything else is always shown.
    pub const fn new(out: W, trace: bool) -> Self {
        Self { out, trace }
    }
}

impl<W: Write> Transcript for Console<W> {
    fn record(&mut self, event: Event<'_>) -> portable_core::Result<()> {
        match event {
            Event::Prompt => {
                write!(
                    self.out,
                    "{} ",
                    "Enter the desired application identifier in reverse DNS order:".bold()
                )?;
                self.out.flush()?;
            }
            Event::Echo(token) => writeln!(self.out, "Got user input: {}", token.cyan())?,
            Event::Length(len) => writeln!(self.out, "Length of app ID: {len}")?,
            Event::Character { ch, .. } if self.trace => {
                writeln!(self.out, "  current character: {ch}")?;
            }
            Event::Character { .. } => {}
            Event::DotDetected { index } => writeln!(
                self.out,
                "  {} (position {index})",
                "Detected dot presence".green()
            )?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(trace: bool, events: &[Event<'_>]) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let mut console = Console::new(&mut out, trace);
        for event in events {
            console.record(*event).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prompt_has_no_newline() {
        let text = render(true, &[Event::Prompt]);
        assert!(text.ends_with("order: "));
    }

    #[test]
    fn trace_lines() {
        let events = [
            Event::Echo("a.b"),
            Event::Length(3),
            Event::Character { index: 0, ch: 'a' },
            Event::Character { index: 1, ch: '.' },
            Event::DotDetected { index: 1 },
            Event::Character { index: 2, ch: 'b' },
        ];
        assert_eq!(
            render(true, &events),
            "Got user input: a.b\n\
             Length of app ID: 3\n  \
             current character: a\n  \
             current character: .\n  \
             Detected dot presence (position 1)\n  \
             current character: b\n"
        );
        assert_eq!(
            render(false, &events),
            "Got user input: a.b\nLength of app ID: 3\n  Detected dot presence (position 1)\n"
        );
    }

    #[test]
    fn banner_mentions_documentation() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        banner(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Portable configuration generator"));
        assert!(text.contains("documentation"));
    }
}
