//! Task module
//!
//! The task record, the managed-data boundary and the service wrappers.

mod model;
mod service;
mod store;

pub use model::{Task, TaskDraft};
pub use service::{create_task, delete_task, list_tasks, set_task_completed};
pub use store::{FieldError, StoreReply, TaskStore};
