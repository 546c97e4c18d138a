//! UI state containers for Cloudtask
//!
//! Plain structs owning the screen state. Handlers await the service
//! wrappers sequentially and mutate local state only after the backend
//! confirms; on error the state is left alone and a transient notice is
//! raised instead.

pub mod forms;
pub mod guard;
pub mod login;
pub mod notice;
pub mod task_list;

pub use guard::Route;
pub use login::{LoginScreen, LoginStep};
pub use notice::{Notice, Severity};
pub use task_list::TaskListState;
