use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The speech service rejected or failed the call. The message is the
    /// service's own description and is surfaced to clients unchanged.
    #[error("{message}")]
    Recognition { message: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn recognition(message: impl Into<String>) -> Self {
        Self::Recognition {
            message: message.into(),
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self::Internal(message.to_string())
    }
}
