//! Error types for Quotebook

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuoteError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Raised by the service layer when author or text is empty.
    #[error("author and quote must not be empty")]
    InvalidInput,

    #[error("Quote not found: {0}")]
    NotFound(String),

    /// Storage engine failure, surfaced as-is and never retried.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

impl QuoteError {
    /// Stable machine-readable kind, used in HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            QuoteError::InvalidInput => "invalid_input",
            QuoteError::NotFound(_) => "not_found",
            QuoteError::Internal(_) => "internal",
        }
    }
}
