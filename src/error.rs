use std::fmt;

/// Error type returned by pretok-rs public APIs.
#[derive(Debug)]
pub enum PretokError {
    /// Engine-side resource could not be reserved, at construction or mid-call.
    Allocation(String),
    /// Input or output text could not be interpreted under the expected encoding.
    Decoding(String),
    /// User-provided arguments were invalid.
    InvalidArgument(String),
}

impl fmt::Display for PretokError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PretokError::Allocation(message) => write!(f, "allocation failed: {message}"),
            PretokError::Decoding(message) => write!(f, "decoding failed: {message}"),
            PretokError::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
        }
    }
}

impl std::error::Error for PretokError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PretokError>;

#[cfg(test)]
mod error_tests {
    use super::PretokError;

    #[test]
    fn display_messages_are_human_readable() {
        assert_eq!(
            PretokError::Allocation("registry full".to_string()).to_string(),
            "allocation failed: registry full"
        );
        assert_eq!(
            PretokError::Decoding("invalid utf-8".to_string()).to_string(),
            "decoding failed: invalid utf-8"
        );
        assert_eq!(
            PretokError::InvalidArgument("bad arg".to_string()).to_string(),
            "invalid argument: bad arg"
        );
    }

    #[test]
    fn error_is_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(PretokError::Decoding("stray byte".to_string()));
        assert!(error.to_string().contains("stray byte"));
    }
}
