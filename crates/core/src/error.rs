//! Failures surfaced by graph construction and generator configuration.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    /// A caller-supplied argument is outside its accepted range.
    #[error("invalid argument `{name}`: {message}")]
    InvalidArgument { name: &'static str, message: String },
    /// The spanning pass ran out of attempts before every room was linked.
    #[error(
        "spanning pass gave up after {attempts} attempts with {connected} rooms connected and {remaining} remaining"
    )]
    GenerationFailed { connected: usize, remaining: usize, attempts: usize },
    /// A configuration document could not be parsed.
    #[error("invalid generator config: {0}")]
    Config(String),
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GenerationError {
    pub(crate) fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument { name, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_names_the_argument() {
        let err = GenerationError::invalid_argument("room_count", "must be at least 2, got 1");
        assert_eq!(err.to_string(), "invalid argument `room_count`: must be at least 2, got 1");
    }

    #[test]
    fn io_errors_convert_into_generation_errors() {
        let err: GenerationError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, GenerationError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }
}
