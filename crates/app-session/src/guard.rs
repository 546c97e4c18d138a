//! Client-side route gating
//!
//! The home surface is only reachable with a resolvable current user;
//! everything else falls back to the login surface. This is a UI
//! convenience, not an authorization check; the backend enforces
//! ownership on every call.

use ct_core::auth::{current_user, IdentityProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
}

/// Decide which surface to show for the current session state.
pub async fn resolve(identity: &dyn IdentityProvider) -> Route {
    match current_user(identity).await {
        Some(_) => Route::Home,
        None => Route::Login,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ct_core::auth::{SignInStep, SignUpStep, UserIdentity};
    use ct_core::error::AuthError;

    struct StubIdentity {
        signed_in: bool,
    }

    #[async_trait]
    impl IdentityProvider for StubIdentity {
        async fn sign_up(&self, _: &str, _: &str) -> Result<SignUpStep, AuthError> {
            unreachable!()
        }

        async fn sign_in(&self, _: &str, _: &str) -> Result<SignInStep, AuthError> {
            unreachable!()
        }

        async fn confirm_sign_up(&self, _: &str, _: &str) -> Result<SignUpStep, AuthError> {
            unreachable!()
        }

        async fn current_user(&self) -> Result<UserIdentity, AuthError> {
            if self.signed_in {
                Ok(UserIdentity {
                    user_id: "u1".into(),
                    username: "user@example.com".into(),
                })
            } else {
                Err(AuthError::NotAuthenticated)
            }
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_resolve_routes_signed_in_session_home() {
        let route = resolve(&StubIdentity { signed_in: true }).await;
        assert_eq!(route, Route::Home);
    }

    #[tokio::test]
    async fn test_resolve_routes_anonymous_session_to_login() {
        let route = resolve(&StubIdentity { signed_in: false }).await;
        assert_eq!(route, Route::Login);
    }
}
