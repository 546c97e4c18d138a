//! Task service wrappers
//!
//! Translate form input into calls against the managed data store and
//! normalize every reply into an [`Outcome`]. Ownership scoping comes
//! from a fresh current-user lookup per call; each call is a single
//! best-effort round trip with no retry or client-side coordination.

use chrono::{DateTime, Utc};
use tracing::{error, warn};

use super::model::{Task, TaskDraft};
use super::store::{StoreReply, TaskStore};
use crate::auth::{current_user, IdentityProvider};
use crate::outcome::Outcome;

/// Collapse a backend reply into data or a generic error outcome.
///
/// `errors` in the reply and a missing payload both degrade to the
/// given message; field errors are logged before being hidden from the
/// user.
fn unwrap_reply<T>(reply: StoreReply<T>, error_message: &str) -> Outcome<T> {
    if let Some(errors) = reply.errors.filter(|e| !e.is_empty()) {
        warn!("Backend reported field errors: {:?}", errors);
        return Outcome::error(error_message);
    }
    match reply.data {
        Some(data) => Outcome::success(data, ""),
        None => Outcome::error(error_message),
    }
}

/// Create a task owned by the current user.
///
/// When `created_at` is absent the current time is used. The backend
/// assigns `id` and `updatedAt`; the created record comes back in the
/// success outcome.
pub async fn create_task(
    identity: &dyn IdentityProvider,
    store: &dyn TaskStore,
    title: &str,
    created_at: Option<DateTime<Utc>>,
) -> Outcome<Task> {
    if title.is_empty() {
        return Outcome::error("A task needs a description");
    }

    let Some(user) = current_user(identity).await else {
        return Outcome::error("No signed-in user found");
    };

    let draft = TaskDraft::new(user.user_id, title, created_at.unwrap_or_else(Utc::now));

    match store.create(draft).await {
        Ok(reply) => match unwrap_reply(reply, "Could not add the task, try again") {
            Outcome::Success { data, .. } => Outcome::success(data, "Task added successfully"),
            error => error,
        },
        Err(e) => {
            error!("Create task failed: {}", e);
            Outcome::error("Something went wrong while adding the task, try again later")
        }
    }
}

/// List the current user's tasks.
///
/// Returns the uniform error envelope when no user is signed in; no
/// filtered query is issued in that case.
pub async fn list_tasks(
    identity: &dyn IdentityProvider,
    store: &dyn TaskStore,
) -> Outcome<Vec<Task>> {
    let Some(user) = current_user(identity).await else {
        return Outcome::error("No signed-in user found");
    };

    match store.list_by_user(&user.user_id).await {
        Ok(reply) => match unwrap_reply(reply, "Could not load tasks, try again") {
            Outcome::Success { data, .. } => Outcome::success(data, ""),
            error => error,
        },
        Err(e) => {
            error!("List tasks failed: {}", e);
            Outcome::error("Could not load tasks, try again")
        }
    }
}

/// Delete a task by id; the deleted record comes back on success.
pub async fn delete_task(store: &dyn TaskStore, id: &str) -> Outcome<Task> {
    if id.is_empty() {
        return Outcome::error("A task id is required");
    }

    match store.delete(id).await {
        Ok(reply) => match unwrap_reply(reply, "Could not delete the task, try again") {
            Outcome::Success { data, .. } => Outcome::success(data, "Task deleted successfully"),
            error => error,
        },
        Err(e) => {
            error!("Delete task failed: {}", e);
            Outcome::error("Something went wrong while deleting the task, try again later")
        }
    }
}

/// Flip a task's completed flag; the updated record comes back on
/// success.
pub async fn set_task_completed(
    store: &dyn TaskStore,
    id: &str,
    completed: bool,
) -> Outcome<Task> {
    if id.is_empty() {
        return Outcome::error("A task id is required");
    }

    match store.set_completed(id, completed).await {
        Ok(reply) => match unwrap_reply(reply, "Could not change the task status, try again") {
            Outcome::Success { data, .. } => Outcome::success(data, "Status changed successfully"),
            error => error,
        },
        Err(e) => {
            error!("Update task failed: {}", e);
            Outcome::error("Something went wrong while updating the task, try again later")
        }
    }
}
