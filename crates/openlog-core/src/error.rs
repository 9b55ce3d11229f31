//! Error types for the logging facade

use thiserror::Error;

/// Errors surfaced by the few fallible operations of the facade
///
/// Logging calls themselves never fail; these come from parsing
/// level names and building structured messages.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type LoggerResult<T> = Result<T, LoggerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LoggerError::UnknownLevel("verbose".to_string());
        assert_eq!(err.to_string(), "Unknown log level: verbose");
    }
}
