//! Auth service wrappers
//!
//! Each wrapper validates presence first, then makes a single awaited
//! call against the identity provider and normalizes whatever comes
//! back into an [`Outcome`]. No retries anywhere; provider errors never
//! propagate past a wrapper.

use tracing::error;

use super::provider::{IdentityProvider, SignInStep, SignUpStep, UserIdentity};
use crate::error::AuthError;
use crate::outcome::Outcome;

/// Literal error text the provider returns on a credential mismatch
pub const INCORRECT_CREDENTIALS: &str = "Incorrect username or password.";

/// Sign in with email and password.
pub async fn sign_in(
    provider: &dyn IdentityProvider,
    email: &str,
    password: &str,
) -> Outcome<()> {
    if email.is_empty() {
        return Outcome::error("Email must not be empty");
    }
    if password.is_empty() {
        return Outcome::error("Password must not be empty");
    }

    match provider.sign_in(email, password).await {
        Ok(SignInStep::Done) => Outcome::success(
            (),
            "Signed in successfully, you will be redirected shortly",
        ),
        Ok(_) => Outcome::error(
            "Could not sign in, check that your email and password are correct",
        ),
        Err(AuthError::Rejected { message }) if message == INCORRECT_CREDENTIALS => {
            Outcome::error("Incorrect email or password, try again")
        }
        Err(e) => {
            error!("Sign-in failed: {}", e);
            Outcome::error(
                "Something went wrong while signing in, try again later",
            )
        }
    }
}

/// Register a new account. Success means the provider now expects the
/// emailed confirmation code.
pub async fn sign_up(
    provider: &dyn IdentityProvider,
    email: &str,
    password: &str,
) -> Outcome<()> {
    if email.is_empty() || password.is_empty() {
        return Outcome::error("Email and password must not be empty");
    }

    match provider.sign_up(email, password).await {
        Ok(SignUpStep::ConfirmSignUp) => Outcome::success(
            (),
            "A confirmation code has been sent to your email",
        ),
        Ok(_) => Outcome::error("Could not complete sign up, try again"),
        Err(e) => {
            error!("Sign-up failed: {}", e);
            Outcome::error("Something went wrong during sign up, try again")
        }
    }
}

/// Complete registration with the confirmation code.
pub async fn confirm_sign_up(
    provider: &dyn IdentityProvider,
    email: &str,
    code: &str,
) -> Outcome<()> {
    if code.is_empty() {
        return Outcome::error("Confirmation code must not be empty");
    }

    match provider.confirm_sign_up(email, code).await {
        Ok(SignUpStep::Done) => Outcome::success((), "Account confirmed!"),
        Ok(_) => Outcome::error("Could not confirm your account, try again"),
        Err(e) => {
            error!("Confirmation failed: {}", e);
            Outcome::error("Could not confirm your account, try again")
        }
    }
}

/// Look up the current user. Never errors: any provider failure is
/// logged and normalized to `None`.
pub async fn current_user(provider: &dyn IdentityProvider) -> Option<UserIdentity> {
    match provider.current_user().await {
        Ok(identity) => Some(identity),
        Err(e) => {
            error!("Current-user lookup failed: {}", e);
            None
        }
    }
}

/// End the session. Best effort: failures are logged and swallowed so
/// the caller can navigate away regardless.
pub async fn sign_out(provider: &dyn IdentityProvider) {
    if let Err(e) = provider.sign_out().await {
        error!("Sign-out failed: {}", e);
    }
}
