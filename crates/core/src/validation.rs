//! Form validation helpers
//!
//! Pure functions over the raw form strings. Callers re-run these on
//! every keystroke; a missing key in the returned map means the field
//! is currently valid.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Form fields that carry validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
}

/// Field name → error message; empty map means the form is clean
pub type FieldErrors = BTreeMap<Field, String>;

/// Check the email shape (`local@domain.tld`).
///
/// Empty input is not reported here; presence is the submit path's job.
pub fn validate_email(email: &str) -> Option<String> {
    if !email.is_empty() && !EMAIL_RE.is_match(email) {
        return Some("Invalid email address".to_string());
    }
    None
}

/// Check password strength: at least one digit, at least
/// [`MIN_PASSWORD_LEN`] characters. The length message wins when both
/// rules fail.
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return None;
    }
    let mut error = None;
    if !password.chars().any(|c| c.is_ascii_digit()) {
        error = Some("Password must contain at least 1 number".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        error = Some(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    error
}

/// Check that the confirmation matches, once both values are present.
pub fn validate_confirmation(password: &str, confirm: &str) -> Option<String> {
    if !password.is_empty() && !confirm.is_empty() && password != confirm {
        return Some("Passwords do not match".to_string());
    }
    None
}

/// Validate the sign-up form fields together.
pub fn validate_sign_up(email: &str, password: &str, confirm: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Some(message) = validate_email(email) {
        errors.insert(Field::Email, message);
    }
    if let Some(message) = validate_password(password) {
        errors.insert(Field::Password, message);
    }
    if let Some(message) = validate_confirmation(password, confirm) {
        errors.insert(Field::ConfirmPassword, message);
    }
    errors
}

/// Validate the login form fields. Only the email shape is checked
/// reactively; password presence is enforced on submit.
pub fn validate_login(email: &str, _password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Some(message) = validate_email(email) {
        errors.insert(Field::Email, message);
    }
    errors
}
