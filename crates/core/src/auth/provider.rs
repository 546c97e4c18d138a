//! Identity provider boundary
//!
//! Session lifecycle is fully owned by the external provider; the
//! client only reads the `user_id` off the returned identity.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Next step reported by the provider after a sign-in attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignInStep {
    Done,
    ConfirmSignUp,
    #[serde(other)]
    Unknown,
}

/// Next step reported by the provider after sign-up or confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignUpStep {
    ConfirmSignUp,
    Done,
    CompleteAutoSignIn,
    #[serde(other)]
    Unknown,
}

/// Identity object returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub user_id: String,
    pub username: String,
}

/// Interface to the external identity provider
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Register a new account
    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpStep, AuthError>;

    /// Authenticate an existing account
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignInStep, AuthError>;

    /// Complete registration with the emailed confirmation code
    async fn confirm_sign_up(&self, email: &str, code: &str) -> Result<SignUpStep, AuthError>;

    /// Look up the currently signed-in identity
    async fn current_user(&self) -> Result<UserIdentity, AuthError>;

    /// End the current session
    async fn sign_out(&self) -> Result<(), AuthError>;
}
