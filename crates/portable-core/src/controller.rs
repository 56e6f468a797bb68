//! The prompt loop and its dot counter.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PortableError, Result};
use crate::input::TokenReader;
use crate::scan::{scan_token, ScanReport};
use crate::transcript::{emit, Event, Transcript};

/// Dots must exceed this many before the loop ends.
pub const DEFAULT_THRESHOLD: usize = 2;

/// What happens to the dot counter between attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResetPolicy {
    /// Dots add up across every attempt.
    #[default]
    Cumulative,
    /// Each attempt is judged on its own dots.
    PerAttempt,
}

impl FromStr for ResetPolicy {
    type Err = PortableError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cumulative" | "total" => Ok(Self::Cumulative),
            "per-attempt" | "per_attempt" | "attempt" => Ok(Self::PerAttempt),
            _ => Err(PortableError::InvalidSetting(format!(
                "unknown reset policy '{s}' (expected cumulative or per-attempt)"
            ))),
        }
    }
}

impl fmt::Display for ResetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cumulative => write!(f, "cumulative"),
            Self::PerAttempt => write!(f, "per-attempt"),
        }
    }
}

/// Loop settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorSettings {
    /// The loop ends once the counter is strictly greater than this.
    pub threshold: usize,
    /// Counter reset policy.
    pub reset: ResetPolicy,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            reset: ResetPolicy::default(),
        }
    }
}

/// Loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Waiting for another identifier.
    Prompting,
    /// The counter exceeded the threshold. Terminal.
    Done,
}

/// Summary of a finished loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Final counter value.
    pub dots: usize,
    /// Tokens scanned.
    pub attempts: usize,
    /// Dots scanned across every attempt, regardless of policy.
    pub total_dots: usize,
    /// Threshold that was exceeded.
    pub threshold: usize,
    /// Policy the counter followed.
    pub reset: ResetPolicy,
    /// The token that ended the loop.
    pub accepted: String,
}

/// Owns the dot counter and drives the read, scan, decide cycle.
#[derive(Debug, Clone)]
pub struct Controller {
    settings: ValidatorSettings,
    state: State,
    dots: usize,
    total_dots: usize,
    attempts: usize,
    last_token: String,
}

impl Controller {
    /// Create a controller in the [`State::Prompting`] state.
    #[must_use]
    pub fn new(settings: ValidatorSettings) -> Self {
        Self {
            settings,
            state: State::Prompting,
            dots: 0,
            total_dots: 0,
            attempts: 0,
            last_token: String::new(),
        }
    }

    /// Current loop state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Current counter value.
    #[must_use]
    pub const fn dots(&self) -> usize {
        self.dots
    }

    /// Fold one scan result into the counter and decide the next state.
    ///
    /// Once [`State::Done`] is reached further reports are ignored.
    pub fn observe(&mut self, report: ScanReport) -> State {
        if self.state == State::Done {
            return self.state;
        }

        self.attempts += 1;
        self.total_dots = self.total_dots.saturating_add(report.dots);
        self.dots = match self.settings.reset {
            ResetPolicy::Cumulative => self.dots.saturating_add(report.dots),
            ResetPolicy::PerAttempt => report.dots,
        };

        if self.dots > self.settings.threshold {
            self.state = State::Done;
        }

        debug!(
            attempt = self.attempts,
            found = report.dots,
            counter = self.dots,
            threshold = self.settings.threshold,
            state = ?self.state,
            "attempt scanned"
        );

        self.state
    }

    /// Echo, measure and scan one token, then update the counter.
    pub fn step<T: Transcript + ?Sized>(&mut self, token: &str, sink: &mut T) -> Result<State> {
        emit(sink, Event::Echo(token))?;
        emit(sink, Event::Length(token.chars().count()))?;
        let report = scan_token(token, sink)?;
        self.last_token.clear();
        self.last_token.push_str(token);
        Ok(self.observe(report))
    }

    /// Prompt until the counter exceeds the threshold.
    ///
    /// Any input failure ends the loop with an error; there is no retry.
    pub fn run<R, T>(&mut self, input: &mut TokenReader<R>, sink: &mut T) -> Result<Outcome>
    where
        R: BufRead,
        T: Transcript + ?Sized,
    {
        while self.state == State::Prompting {
            emit(sink, Event::Prompt)?;
            let token = input.next_token()?;
            self.step(&token, sink)?;
        }

        info!(dots = self.dots, attempts = self.attempts, "application ID accepted");
        Ok(self.outcome())
    }

    /// Snapshot of the counters.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        Outcome {
            dots: self.dots,
            attempts: self.attempts,
            total_dots: self.total_dots,
            threshold: self.settings.threshold,
            reset: self.settings.reset,
            accepted: self.last_token.clone(),
        }
    }
}
