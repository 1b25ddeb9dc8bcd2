//! Error types for Alien operations.
//!
//! This module defines [`AlienError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Identifier and dependency-line parsing are the only conditions raised
//!   locally; everything a helper reports is passed through verbatim
//! - A helper that cannot be spawned reads as a negative answer in the
//!   boolean operations and as empty output in the string operations
//! - Use `anyhow::Error` (via `AlienError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for Alien operations.
#[derive(Debug, Error)]
pub enum AlienError {
    /// Package identifier is missing the `Type:` separator.
    #[error("Malformed package identifier '{identifier}': expected ManagerType:PackageName")]
    MalformedIdentifier { identifier: String },

    /// The helper executable could not be spawned.
    #[error("Helper '{helper}' is unavailable: {message}")]
    HelperUnavailable { helper: String, message: String },

    /// The helper ran but signaled failure through its exit code.
    #[error("Helper '{helper}' failed with exit code {code:?}")]
    HelperFailure { helper: String, code: Option<i32> },

    /// A dependency line could not be interpreted.
    #[error("Invalid dependency line '{line}': {message}")]
    InvalidDependencyLine { line: String, message: String },

    /// Text scanning did not find the expected marker.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Shell command could not be run.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Alien operations.
pub type Result<T> = std::result::Result<T, AlienError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_identifier_displays_identifier() {
        let err = AlienError::MalformedIdentifier {
            identifier: "burn".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("burn"));
        assert!(msg.contains("ManagerType:PackageName"));
    }

    #[test]
    fn helper_unavailable_displays_helper_and_message() {
        let err = AlienError::HelperUnavailable {
            helper: "Alien-PIP".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Alien-PIP"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn helper_failure_displays_code() {
        let err = AlienError::HelperFailure {
            helper: "Alien-CPAN".into(),
            code: Some(3),
        };
        let msg = err.to_string();
        assert!(msg.contains("Alien-CPAN"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn invalid_dependency_line_displays_line() {
        let err = AlienError::InvalidDependencyLine {
            line: "Perl >= 5.8 ,".into(),
            message: "missing second restriction".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Perl >= 5.8 ,"));
        assert!(msg.contains("missing second restriction"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: AlienError = io_err.into();
        assert!(matches!(err, AlienError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(AlienError::Parse("marker not found".into()))
        }
        assert!(returns_error().is_err());
    }
}
