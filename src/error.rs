//! Error types for pagewalk
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Data-source failures pass through unchanged; cursor decoding and stream
//! cancellation get their own variants.

use thiserror::Error;

/// The main error type for pagewalk
#[derive(Error, Debug)]
pub enum Error {
    /// A cursor token could not be decoded back into a position
    #[error("Failed to decode cursor '{token}': {message}")]
    CursorDecode { token: String, message: String },

    /// A streaming driver was cancelled by the caller
    #[error("Stream cancelled: {reason}")]
    Cancelled { reason: String },

    /// Generic error with a message
    #[error("{0}")]
    Other(String),

    /// Failure from a wrapped data source, propagated verbatim
    #[error(transparent)]
    Source(#[from] anyhow::Error),
}

impl Error {
    /// Create a cursor decode error
    pub fn cursor_decode(token: impl Into<String>, message: impl ToString) -> Self {
        Self::CursorDecode {
            token: token.into(),
            message: message.to_string(),
        }
    }

    /// Create a cancellation error
    pub fn cancelled(reason: impl Into<String>) -> Self {
        Self::Cancelled {
            reason: reason.into(),
        }
    }

    /// Create a data-source error from a message
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source(anyhow::anyhow!(message.into()))
    }

    /// Check whether this error came from stream cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Result type alias for pagewalk
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }
}
