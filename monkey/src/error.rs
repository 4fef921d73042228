//! Error handling for the monkey CLI.

use thiserror::Error;

/// Top-level error type for the monkey CLI binary.
#[derive(Error, Debug)]
pub enum MonkeyError {
    /// Error when a required configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Error when reading or writing a source file.
    #[error("file operation failed: {0}")]
    FileOperation(String),

    /// Error when IO operations fail.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when the REPL's line editor fails outside of a normal exit.
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Result type alias using [`MonkeyError`].
pub type Result<T> = std::result::Result<T, MonkeyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = MonkeyError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "configuration error: missing field");
    }

    #[test]
    fn io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let monkey_err: MonkeyError = io_err.into();
        assert!(matches!(monkey_err, MonkeyError::Io(_)));
    }
}
