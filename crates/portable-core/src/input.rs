//! Whitespace-delimited token reading.

use std::collections::VecDeque;
use std::io::{BufRead, ErrorKind};

use tracing::trace;

use crate::error::{PortableError, Result};

/// Reads whitespace-delimited tokens from a buffered reader.
///
/// Leading whitespace (including blank lines) is skipped and several tokens
/// on one line are handed out one per call. Lines are read into a growable
/// buffer, so there is no upper bound on token length.
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    line: String,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: VecDeque::new(),
        }
    }

    /// Return the next token.
    ///
    /// Fails with [`PortableError::InputExhausted`] once the stream ends and
    /// no token is left, and with [`PortableError::MalformedInput`] when a
    /// line is not valid UTF-8.
    pub fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                trace!(len = token.len(), "token ready");
                return Ok(token);
            }

            self.line.clear();
            let read = match self.reader.read_line(&mut self.line) {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    return Err(PortableError::MalformedInput)
                }
                Err(e) => return Err(e.into()),
            };

            if read == 0 {
                return Err(PortableError::InputExhausted);
            }

            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
    }
}
