//! Login screen state
//!
//! Step machine over the three auth forms: sign in, sign up, and the
//! confirmation step that sign-up hands its email over to. Successful
//! confirmation drops back to the sign-in tab; successful sign-in is
//! reported to the caller so the app can navigate home.

use ct_core::auth::{self, IdentityProvider};

use crate::forms::{ConfirmForm, LoginForm, SignUpForm};
use crate::notice::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStep {
    LogIn,
    SignUp,
    Confirm,
}

/// State for the `/` surface
#[derive(Debug)]
pub struct LoginScreen {
    pub step: LoginStep,
    pub login: LoginForm,
    pub sign_up: SignUpForm,
    pub confirm: ConfirmForm,
    pub notice: Option<Notice>,
    pub submitting: bool,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            step: LoginStep::LogIn,
            login: LoginForm::new(),
            sign_up: SignUpForm::new(),
            confirm: ConfirmForm::default(),
            notice: None,
            submitting: false,
        }
    }

    /// Tab selection between the sign-in and sign-up forms
    pub fn select_step(&mut self, step: LoginStep) {
        self.step = step;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Submit the sign-in form. Returns true once authenticated.
    pub async fn submit_login(&mut self, identity: &dyn IdentityProvider) -> bool {
        self.submitting = true;
        let outcome = auth::sign_in(identity, &self.login.email, &self.login.password).await;
        self.notice = Some(Notice::from_outcome(&outcome));
        self.submitting = false;
        outcome.is_success()
    }

    /// Submit the sign-up form. On success the screen switches to the
    /// confirmation step and carries the email over.
    pub async fn submit_sign_up(&mut self, identity: &dyn IdentityProvider) {
        if !self.sign_up.can_submit() {
            return;
        }
        self.submitting = true;
        let outcome = auth::sign_up(identity, &self.sign_up.email, &self.sign_up.password).await;
        if outcome.is_success() {
            self.confirm = ConfirmForm::new(self.sign_up.email.clone());
            self.step = LoginStep::Confirm;
        } else {
            self.notice = Some(Notice::from_outcome(&outcome));
        }
        self.submitting = false;
    }

    /// Submit the confirmation code. On success the screen returns to
    /// the sign-in tab.
    pub async fn submit_confirmation(&mut self, identity: &dyn IdentityProvider) {
        self.submitting = true;
        let outcome =
            auth::confirm_sign_up(identity, &self.confirm.email, &self.confirm.code).await;
        self.notice = Some(Notice::from_outcome(&outcome));
        if outcome.is_success() {
            self.step = LoginStep::LogIn;
        }
        self.submitting = false;
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ct_core::auth::{SignInStep, SignUpStep, UserIdentity};
    use ct_core::error::AuthError;

    /// Provider scripted per operation
    struct ScriptedIdentity {
        sign_in: Result<SignInStep, ()>,
        sign_up: Result<SignUpStep, ()>,
        confirm: Result<SignUpStep, ()>,
    }

    impl ScriptedIdentity {
        fn happy() -> Self {
            Self {
                sign_in: Ok(SignInStep::Done),
                sign_up: Ok(SignUpStep::ConfirmSignUp),
                confirm: Ok(SignUpStep::Done),
            }
        }
    }

    #[async_trait]
    impl IdentityProvider for ScriptedIdentity {
        async fn sign_up(&self, _: &str, _: &str) -> Result<SignUpStep, AuthError> {
            self.sign_up
                .map_err(|()| AuthError::Transport("down".into()))
        }

        async fn sign_in(&self, _: &str, _: &str) -> Result<SignInStep, AuthError> {
            self.sign_in
                .map_err(|()| AuthError::Transport("down".into()))
        }

        async fn confirm_sign_up(&self, _: &str, _: &str) -> Result<SignUpStep, AuthError> {
            self.confirm
                .map_err(|()| AuthError::Transport("down".into()))
        }

        async fn current_user(&self) -> Result<UserIdentity, AuthError> {
            Err(AuthError::NotAuthenticated)
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            Ok(())
        }
    }

    fn filled_sign_up(screen: &mut LoginScreen) {
        screen.select_step(LoginStep::SignUp);
        screen.sign_up.set_email("user@example.com");
        screen.sign_up.set_password("secret1");
        screen.sign_up.set_confirm_password("secret1");
    }

    #[tokio::test]
    async fn test_sign_up_success_moves_to_confirm_with_email() {
        let mut screen = LoginScreen::new();
        filled_sign_up(&mut screen);

        screen.submit_sign_up(&ScriptedIdentity::happy()).await;

        assert_eq!(screen.step, LoginStep::Confirm);
        assert_eq!(screen.confirm.email, "user@example.com");
    }

    #[tokio::test]
    async fn test_sign_up_with_invalid_form_does_not_submit() {
        let mut screen = LoginScreen::new();
        screen.select_step(LoginStep::SignUp);
        screen.sign_up.set_email("user@example.com");
        screen.sign_up.set_password("secret1");
        screen.sign_up.set_confirm_password("other1");

        screen.submit_sign_up(&ScriptedIdentity::happy()).await;

        // Mismatched confirmation blocks the call entirely
        assert_eq!(screen.step, LoginStep::SignUp);
        assert!(screen.notice.is_none());
    }

    #[tokio::test]
    async fn test_confirmation_success_returns_to_login_tab() {
        let mut screen = LoginScreen::new();
        filled_sign_up(&mut screen);
        screen.submit_sign_up(&ScriptedIdentity::happy()).await;

        screen.confirm.set_code("123456");
        screen.submit_confirmation(&ScriptedIdentity::happy()).await;

        assert_eq!(screen.step, LoginStep::LogIn);
        assert!(screen.notice.as_ref().unwrap().message.contains("confirmed"));
    }

    #[tokio::test]
    async fn test_login_reports_authentication() {
        let mut screen = LoginScreen::new();
        screen.login.set_email("user@example.com");
        screen.login.set_password("secret1");

        assert!(screen.submit_login(&ScriptedIdentity::happy()).await);

        let mut failing = ScriptedIdentity::happy();
        failing.sign_in = Err(());
        assert!(!screen.submit_login(&failing).await);
        assert!(screen.notice.is_some());
    }
}
