use thiserror::Error;

/// Errors parsing logging settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObservabilityError {
    #[error("Unknown log level: {0}")]
    InvalidLevel(String),

    #[error("Unknown log format: {0} (expected json or human)")]
    InvalidFormat(String),
}
