//! Home screen task list state
//!
//! The in-memory list is rebuilt from the backend on mount and
//! re-synchronized after each confirmed mutation: append for creates,
//! filter-out for deletes, remove-then-append for updates. Nothing is
//! changed optimistically; an error leaves the list as it was and
//! raises a notice instead. Concurrent mutations on the same task are
//! not coordinated; whichever response is processed last wins.

use chrono::{DateTime, Utc};
use tracing::debug;

use ct_core::auth::IdentityProvider;
use ct_core::task::{self, Task, TaskStore};
use ct_core::Outcome;

use crate::notice::Notice;

/// State for the `/home` surface
#[derive(Debug, Default)]
pub struct TaskListState {
    pub tasks: Vec<Task>,
    pub notice: Option<Notice>,
    pub loading: bool,
}

impl TaskListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Rebuild the list from the backend.
    pub async fn refresh(&mut self, identity: &dyn IdentityProvider, store: &dyn TaskStore) {
        self.loading = true;
        match task::list_tasks(identity, store).await {
            Outcome::Success { data, .. } => {
                debug!("Loaded {} tasks", data.len());
                self.tasks = data;
            }
            outcome @ Outcome::Error { .. } => {
                self.notice = Some(Notice::from_outcome(&outcome));
            }
        }
        self.loading = false;
    }

    /// Create a task and append it once the backend confirms.
    pub async fn add(
        &mut self,
        identity: &dyn IdentityProvider,
        store: &dyn TaskStore,
        title: &str,
        created_at: Option<DateTime<Utc>>,
    ) {
        let outcome = task::create_task(identity, store, title, created_at).await;
        self.notice = Some(Notice::from_outcome(&outcome));
        if let Some(created) = outcome.into_data() {
            self.tasks.push(created);
        }
    }

    /// Flip a task's completed flag. The confirmed record replaces the
    /// old one by id (remove, then append).
    pub async fn toggle(&mut self, store: &dyn TaskStore, id: &str) {
        let Some(current) = self.tasks.iter().find(|t| t.id == id) else {
            return;
        };
        let outcome = task::set_task_completed(store, id, !current.completed).await;
        self.notice = Some(Notice::from_outcome(&outcome));
        if let Some(updated) = outcome.into_data() {
            self.tasks.retain(|t| t.id != updated.id);
            self.tasks.push(updated);
        }
    }

    /// Delete a task. Exactly the confirmed record's id is filtered
    /// out of the list.
    pub async fn remove(&mut self, store: &dyn TaskStore, id: &str) {
        let outcome = task::delete_task(store, id).await;
        self.notice = Some(Notice::from_outcome(&outcome));
        if let Some(deleted) = outcome.into_data() {
            self.tasks.retain(|t| t.id != deleted.id);
        }
    }
}
