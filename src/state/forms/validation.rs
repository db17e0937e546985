//! Client-side validation for the two forms
//!
//! Login reports every failing field at once. Registration runs an ordered
//! chain and reports only the first failure.

use super::form_state::{LoginForm, RegisterForm};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Field name to message mapping produced by a login validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    fn insert(&mut self, field: &'static str, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// First failing rule of the registration chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Please fill out the entire form")]
    Incomplete,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn password_long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Validate every login field independently
pub fn validate_login(form: &LoginForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    let email = form.email.as_text();
    let password = form.password.as_text();

    if email.is_empty() || !is_valid_email(email) {
        errors.insert("email", "Please enter a valid email.");
    }
    if password.is_empty() || !password_long_enough(password) {
        errors.insert("password", "Password must be at least 6 characters long.");
    }
    errors
}

/// Validate the registration form, stopping at the first failing rule
pub fn validate_registration(form: &RegisterForm) -> Option<RegistrationError> {
    let password = form.password.as_text();
    let confirm = form.confirm_password.as_text();

    let required = [
        form.full_name.as_text(),
        form.email.as_text(),
        form.phone_number.as_text(),
        password,
        confirm,
    ];
    if required.iter().any(|v| v.is_empty()) {
        return Some(RegistrationError::Incomplete);
    }
    if !form.email.as_text().contains('@') {
        return Some(RegistrationError::InvalidEmail);
    }
    if !password_long_enough(password) {
        return Some(RegistrationError::PasswordTooShort);
    }
    if password != confirm {
        return Some(RegistrationError::PasswordMismatch);
    }
    None
}
