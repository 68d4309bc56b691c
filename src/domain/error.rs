use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failure taxonomy produced by handlers and repositories.
///
/// Handlers check preconditions locally and fail immediately with a typed
/// outcome; storage failures are carried through as `Storage` without being
/// caught or transformed along the way. The HTTP layer maps each variant to a
/// status code in `crate::error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Unauthorized(String),

    /// A message type was dispatched with no registered handler. This is a
    /// wiring mistake caught at dispatch time, not a runtime condition to
    /// recover from.
    #[error("no handler registered for {0}")]
    Unregistered(&'static str),

    #[error("storage error: {0}")]
    Storage(String),

    /// A modification reported zero rows affected where one was expected,
    /// or some other invariant the storage layer should have upheld broke.
    #[error("{0}")]
    Unexpected(String),
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        DomainError::Forbidden(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        DomainError::Unauthorized(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        DomainError::Unexpected(message.into())
    }
}
