//! Observability seam for the prompt loop.

use tracing::{debug, trace};

use crate::error::Result;

/// A single step of the prompt loop, in the order it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// The user is about to be asked for an identifier.
    Prompt,
    /// A token was read and is echoed back.
    Echo(&'a str),
    /// Number of characters in the token just read.
    Length(usize),
    /// The scanner visited a character.
    Character {
        /// Zero-based character position in the token.
        index: usize,
        /// The character itself.
        ch: char,
    },
    /// The scanner found a dot.
    DotDetected {
        /// Zero-based character position of the dot.
        index: usize,
    },
}

/// Receives loop events as they happen.
///
/// The console implementation prints them; tests record them.
pub trait Transcript {
    /// Handle one event. An error aborts the loop.
    fn record(&mut self, event: Event<'_>) -> Result<()>;
}

impl<T: Transcript + ?Sized> Transcript for &mut T {
    fn record(&mut self, event: Event<'_>) -> Result<()> {
        (**self).record(event)
    }
}

/// Emit an event to the tracing subscriber before handing it to a transcript.
pub(crate) fn emit<T: Transcript + ?Sized>(sink: &mut T, event: Event<'_>) -> Result<()> {
    match event {
        Event::Character { index, ch } => trace!(index, %ch, "scanned character"),
        Event::DotDetected { index } => debug!(index, "detected dot"),
        Event::Echo(token) => debug!(token, "got user input"),
        Event::Length(len) => trace!(len, "token length"),
        Event::Prompt => trace!("prompting"),
    }
    sink.record(event)
}

/// Owned copy of an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedEvent {
    /// See [`Event::Prompt`].
    Prompt,
    /// See [`Event::Echo`].
    Echo(String),
    /// See [`Event::Length`].
    Length(usize),
    /// See [`Event::Character`].
    Character { index: usize, ch: char },
    /// See [`Event::DotDetected`].
    DotDetected { index: usize },
}

impl From<Event<'_>> for RecordedEvent {
    fn from(event: Event<'_>) -> Self {
        match event {
            Event::Prompt => Self::Prompt,
            Event::Echo(token) => Self::Echo(token.to_owned()),
            Event::Length(len) => Self::Length(len),
            Event::Character { index, ch } => Self::Character { index, ch },
            Event::DotDetected { index } => Self::DotDetected { index },
        }
    }
}

/// In-memory transcript that keeps every event.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    /// Every event received, oldest first.
    pub events: Vec<RecordedEvent>,
}

impl Recorder {
    /// How many times the user was prompted.
    #[must_use]
    pub fn prompts(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RecordedEvent::Prompt))
            .count()
    }

    /// How many dot detections were reported.
    #[must_use]
    pub fn dots_detected(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RecordedEvent::DotDetected { .. }))
            .count()
    }

    /// Tokens echoed back, in order.
    #[must_use]
    pub fn echoed(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::Echo(token) => Some(token.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Transcript for Recorder {
    fn record(&mut self, event: Event<'_>) -> Result<()> {
        self.events.push(event.into());
        Ok(())
    }
}
