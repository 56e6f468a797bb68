//! Core prompt loop for the Portable configuration generator.
//!
//! This crate asks for a reverse-DNS application identifier and counts the
//! `.` characters in what the user types, repeating until enough dots have
//! been seen:
//!
//! - **Input**: [`TokenReader`] pulls whitespace-delimited tokens from any [`std::io::BufRead`]
//! - **Scanning**: [`scan_token`] walks a token character by character
//! - **Control**: [`Controller`] owns the dot counter and the two-state loop
//! - **Observability**: every step is reported through the [`Transcript`] trait
//!
//! # Example
//!
//! ```rust
//! use portable_core::{Controller, Recorder, TokenReader, ValidatorSettings};
//!
//! let mut input = TokenReader::new("com.example.app\n".as_bytes());
//! let mut controller = Controller::new(ValidatorSettings::default());
//! let outcome = controller.run(&mut input, &mut Recorder::default()).unwrap();
//! assert_eq!(outcome.dots, 3);
//! ```

mod controller;
mod error;
mod input;
mod scan;
mod transcript;

pub use controller::{Controller, Outcome, ResetPolicy, State, ValidatorSettings, DEFAULT_THRESHOLD};
pub use error::{PortableError, Result};
pub use input::TokenReader;
pub use scan::{count_dots, scan_token, ScanReport, DOT};
pub use transcript::{Event, RecordedEvent, Recorder, Transcript};
