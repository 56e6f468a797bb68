//! Character scanning.

use crate::error::Result;
use crate::transcript::{emit, Event, Transcript};

/// The separator being counted.
pub const DOT: char = '.';

/// What a single scan of one token found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Characters actually visited.
    pub length: usize,
    /// Dots among them.
    pub dots: usize,
}

/// Count dots in a token without reporting anything.
#[must_use]
pub fn count_dots(token: &str) -> usize {
    token.chars().filter(|&c| c == DOT).count()
}

/// Visit every character of `token` in order, reporting each one and every
/// dot to `sink`.
pub fn scan_token<T: Transcript + ?Sized>(token: &str, sink: &mut T) -> Result<ScanReport> {
    let mut report = ScanReport::default();

    for (index, ch) in token.chars().enumerate() {
        report.length += 1;
        emit(sink, Event::Character { index, ch })?;

        if ch == DOT {
            report.dots += 1;
            emit(sink, Event::DotDetected { index })?;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::{RecordedEvent, Recorder};

    fn scan(token: &str) -> (ScanReport, Recorder) {
        let mut recorder = Recorder::default();
        let report = scan_token(token, &mut recorder).unwrap();
        (report, recorder)
    }

    #[test]
    fn two_dots() {
        let (report, recorder) = scan("com.example");
        assert_eq!(report, ScanReport { length: 11, dots: 2 });
        assert_eq!(recorder.dots_detected(), 2);
    }

    #[test]
    fn three_dots() {
        let (report, _) = scan("com.example.app");
        assert_eq!(report.dots, 3);
        assert_eq!(report.length, 15);
    }

    #[test]
    fn no_dots() {
        let (report, recorder) = scan("appid");
        assert_eq!(report.dots, 0);
        assert_eq!(recorder.dots_detected(), 0);
        assert_eq!(recorder.events.len(), 5);
    }

    #[test]
    fn empty_token_visits_nothing() {
        let (report, recorder) = scan("");
        assert_eq!(report, ScanReport::default());
        assert!(recorder.events.is_empty());
    }

    #[test]
    fn trace_is_in_order() {
        let (_, recorder) = scan("a.b");
        assert_eq!(
            recorder.events,
            vec![
                RecordedEvent::Character { index: 0, ch: 'a' },
                RecordedEvent::Character { index: 1, ch: '.' },
                RecordedEvent::DotDetected { index: 1 },
                RecordedEvent::Character { index: 2, ch: 'b' },
            ]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let (report, _) = scan("de.müller.app");
        assert_eq!(report.length, 13);
        assert_eq!(report.dots, 2);
    }

    #[test]
    fn long_token() {
        let token = format!("{}.{}", "x".repeat(300), "y".repeat(300));
        let (report, _) = scan(&token);
        assert_eq!(report.length, 601);
        assert_eq!(report.dots, 1);
        assert_eq!(count_dots(&token), 1);
    }

    #[test]
    fn count_dots_matches_scan() {
        for token in ["", "a", "..", "org.kde.Kate", "...."] {
            assert_eq!(count_dots(token), scan(token).0.dots);
        }
    }
}
