//! Task record definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task as the managed backend stores it.
///
/// `id` and `updated_at` are assigned by the backend and read-only to
/// the client; `user_id` scopes visibility to the owning account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The client-writable fields submitted on create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub user_id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl TaskDraft {
    /// Create a draft for a new, uncompleted task
    pub fn new(user_id: impl Into<String>, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            completed: false,
            created_at,
        }
    }
}
