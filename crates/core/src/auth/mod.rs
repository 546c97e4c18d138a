//! Auth module
//!
//! The identity-provider boundary and the service wrappers over it.

mod provider;
mod service;

pub use provider::{IdentityProvider, SignInStep, SignUpStep, UserIdentity};
pub use service::{
    confirm_sign_up, current_user, sign_in, sign_out, sign_up, INCORRECT_CREDENTIALS,
};
