//! HTTP implementations of the Cloudtask boundaries
//!
//! - [`HttpIdentityProvider`]: the hosted identity provider's REST API
//! - [`HttpTaskStore`]: the managed Task data API
//!
//! Both are single-attempt clients: no retries, no client-side timeout
//! beyond the transport's own.

mod auth;
mod config;
mod data;

pub use auth::HttpIdentityProvider;
pub use config::ClientConfig;
pub use data::HttpTaskStore;
