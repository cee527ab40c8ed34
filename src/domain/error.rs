use std::io;

use thiserror::Error;

use crate::domain::SubmissionState;

/// Library-wide error type for timetabler operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// One or more required form controls are absent from the document.
    #[error("Form is missing required controls: {}", .0.join(", "))]
    MissingControls(Vec<String>),

    /// A form override was not written as `name=value`.
    #[error("Invalid form value '{0}': expected name=value")]
    InvalidFormValue(String),

    /// The login gate rejected the credentials.
    #[error("Sign in with a non-empty username and password first")]
    AuthenticationRequired,

    /// A previous submission has not resolved yet.
    #[error("A schedule request is already in flight")]
    SubmissionInFlight,

    /// The request never produced a usable reply.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Document synthesis failed.
    #[error("Failed to render schedule: {0}")]
    Render(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Submission state machine was driven out of order.
    #[error("Invalid submission transition from {from} to {to}")]
    InvalidTransition { from: SubmissionState, to: SubmissionState },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that map errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::InvalidFormValue(_)
            | AppError::ParseError { .. } => io::ErrorKind::InvalidInput,
            AppError::MissingControls(_) => io::ErrorKind::NotFound,
            AppError::AuthenticationRequired => io::ErrorKind::PermissionDenied,
            AppError::SubmissionInFlight => io::ErrorKind::WouldBlock,
            AppError::Transport(_) => io::ErrorKind::ConnectionRefused,
            AppError::Render(_) | AppError::InvalidTransition { .. } => io::ErrorKind::Other,
        }
    }
}
