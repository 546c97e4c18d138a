//! Form state with per-keystroke validation
//!
//! Each setter stores the raw string and recomputes the whole error
//! map, so the UI always renders the errors for the current input.
//! Validation is not debounced.

use ct_core::validation::{validate_login, validate_sign_up, Field, FieldErrors};

/// Login form: email + password
#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.revalidate();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.revalidate();
    }

    /// The submit button stays disabled until both fields are present
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    fn revalidate(&mut self) {
        self.errors = validate_login(&self.email, &self.password);
    }
}

/// Sign-up form: email + password + confirmation
#[derive(Debug, Default, Clone)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub errors: FieldErrors,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.revalidate();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.revalidate();
    }

    pub fn set_confirm_password(&mut self, confirm: impl Into<String>) {
        self.confirm_password = confirm.into();
        self.revalidate();
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Submitting requires every field present and a clean error map
    pub fn can_submit(&self) -> bool {
        self.errors.is_empty()
            && !self.email.is_empty()
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
    }

    fn revalidate(&mut self) {
        self.errors = validate_sign_up(&self.email, &self.password, &self.confirm_password);
    }
}

/// Confirmation form: the carried-over email plus the emailed code
#[derive(Debug, Default, Clone)]
pub struct ConfirmForm {
    pub email: String,
    pub code: String,
}

impl ConfirmForm {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            code: String::new(),
        }
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }
}
