//! Error types for the external boundaries

use thiserror::Error;

/// Errors surfaced by the identity provider.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No session exists for the caller
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The provider rejected the operation; carries the provider's
    /// literal message so callers can match on it
    #[error("{message}")]
    Rejected { message: String },

    /// The provider could not be reached
    #[error("Transport error: {0}")]
    Transport(String),
}

impl AuthError {
    /// Create a Rejected error
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Errors thrown by the managed data store's transport layer.
///
/// Field-level errors reported inside a successful response travel in
/// [`StoreReply::errors`](crate::task::StoreReply) instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend replied with something that does not parse
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
