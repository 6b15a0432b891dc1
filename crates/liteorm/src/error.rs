//! Error types for liteorm

use thiserror::Error;

/// Result type alias for liteorm operations
pub type LiteResult<T> = Result<T, LiteError>;

/// Error types for statement building and delegated execution
#[derive(Debug, Error)]
pub enum LiteError {
    /// Invalid caller input, raised before any statement is rendered
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Row not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Error raised by the external database client, surfaced verbatim
    #[error(transparent)]
    Client(Box<dyn std::error::Error + Send + Sync>),
}

impl LiteError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Wrap an error raised by the external client
    pub fn client(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Client(Box::new(err))
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this error came from the external client
    pub fn is_client(&self) -> bool {
        matches!(self, Self::Client(_))
    }
}
