//! Core library for Cloudtask
//!
//! This crate contains the client-side business logic, including:
//! - The task model and the managed-backend boundary
//! - The identity-provider boundary
//! - Service wrappers normalizing every call into an [`Outcome`]
//! - Form validation helpers

pub mod auth;
pub mod error;
pub mod outcome;
pub mod task;
pub mod validation;

pub use error::{AuthError, StoreError};
pub use outcome::Outcome;
