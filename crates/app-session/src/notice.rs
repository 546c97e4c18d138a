//! Transient modal notifications

use ct_core::Outcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A message shown to the user once and then dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Build the notice matching a service outcome
    pub fn from_outcome<T>(outcome: &Outcome<T>) -> Self {
        match outcome {
            Outcome::Success { message, .. } => Self::success(message.clone()),
            Outcome::Error { message } => Self::error(message.clone()),
        }
    }
}
