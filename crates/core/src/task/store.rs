//! Managed data store boundary
//!
//! The backend answers every call with a `{data, errors}` pair; a
//! transport failure surfaces as [`StoreError`] instead. Wrappers check
//! `errors` before touching `data`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::model::{Task, TaskDraft};
use crate::error::StoreError;

/// A field-level error reported by the backend inside a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    #[serde(default)]
    pub field: Option<String>,
    pub message: String,
}

/// The backend's reply envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreReply<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<FieldError>>,
}

impl<T> StoreReply<T> {
    /// Build a reply carrying data and no errors
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }
}

/// Interface to the managed Task data store
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Create a task record; the backend assigns id and updatedAt
    async fn create(&self, draft: TaskDraft) -> Result<StoreReply<Task>, StoreError>;

    /// List tasks filtered by userId equality
    async fn list_by_user(&self, user_id: &str) -> Result<StoreReply<Vec<Task>>, StoreError>;

    /// Update a task's completed flag by id
    async fn set_completed(&self, id: &str, completed: bool)
        -> Result<StoreReply<Task>, StoreError>;

    /// Delete a task by id
    async fn delete(&self, id: &str) -> Result<StoreReply<Task>, StoreError>;
}
