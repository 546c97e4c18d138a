//! Uniform service result envelope
//!
//! Every service wrapper resolves to an [`Outcome`]; nothing propagates
//! uncaught past a wrapper. The `status` tag keeps the serialized shape
//! aligned with the managed backend's `{status, data, message}` envelope.

use serde::{Deserialize, Serialize};

/// Result envelope returned by every service wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome<T> {
    Success { data: T, message: String },
    Error { message: String },
}

impl<T> Outcome<T> {
    /// Create a success outcome
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::Success {
            data,
            message: message.into(),
        }
    }

    /// Create an error outcome
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Error { message } => message,
        }
    }

    /// Consume the outcome, keeping the payload if there is one
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Error { .. } => None,
        }
    }
}
