use thiserror::Error;

/// Result type alias for prompt loop operations
pub type Result<T> = std::result::Result<T, PortableError>;

/// Errors that can occur while reading and validating an application ID
#[derive(Error, Debug)]
pub enum PortableError {
    /// Standard input ended before the loop reached its terminal state
    #[error("input ended before an application ID was accepted")]
    InputExhausted,

    /// Input could not be decoded as text
    #[error("input is not valid UTF-8 text")]
    MalformedInput,

    /// A setting value could not be parsed
    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    /// Reading input or writing the transcript failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PortableError {
    /// Returns true if the error was caused by the input stream itself
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InputExhausted | Self::MalformedInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_classified() {
        assert!(PortableError::InputExhausted.is_input_error());
        assert!(PortableError::MalformedInput.is_input_error());
        assert!(!PortableError::InvalidSetting("x".into()).is_input_error());
    }

    #[test]
    fn io_error_converts() {
        let err: PortableError = std::io::Error::other("boom").into();
        assert!(matches!(err, PortableError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: boom");
    }
}
