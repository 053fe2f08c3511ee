//! Login and signup form state
//!
//! The forms are stubs pending a real authentication backend: they own their
//! field state, validate locally, and guard against duplicate submits, but
//! resolution is simulated by the caller. Validation rules follow the same
//! shape the eventual backend will enforce.

use serde::Serialize;

/// Shown when a stubbed submission resolves.
pub const AUTH_PENDING_MESSAGE: &str = "Account service is not yet available.";

/// Validate email format (basic structural validation).
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim().to_lowercase();

    if email.len() < 5 {
        return Err("Email is too short".to_string());
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format".to_string());
    }

    let (local, domain) = (parts[0], parts[1]);

    if local.is_empty() {
        return Err("Email local part cannot be empty".to_string());
    }

    if !domain.contains('.') {
        return Err("Email domain must contain a dot".to_string());
    }

    Ok(())
}

/// Validate password strength.
///
/// Requirements: at least 8 characters with an uppercase letter, a lowercase
/// letter, and a digit.
pub fn validate_password_strength(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }

    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter".to_string());
    }

    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter".to_string());
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one number".to_string());
    }

    Ok(())
}

/// Outcome of a stubbed form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthOutcome {
    pub accepted: bool,
    pub message: String,
}

impl AuthOutcome {
    fn pending() -> Self {
        Self {
            accepted: true,
            message: AUTH_PENDING_MESSAGE.to_string(),
        }
    }
}

/// Login form state.
#[derive(Debug, Default)]
pub struct LoginForm {
    email: String,
    password: String,
    submitting: bool,
    error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn set_password(&mut self, password: &str) {
        self.password = password.to_string();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate and enter the submitting state.
    ///
    /// Returns false (and records the validation error) when the form is not
    /// ready, or when a submit is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        if let Err(e) = validate_email(&self.email) {
            self.error = Some(e);
            return false;
        }
        if self.password.is_empty() {
            self.error = Some("Password is required".to_string());
            return false;
        }
        self.error = None;
        self.submitting = true;
        true
    }

    /// Resolve the stubbed submission. Always leaves `submitting` false.
    pub fn finish_submit(&mut self) -> AuthOutcome {
        self.submitting = false;
        AuthOutcome::pending()
    }
}

/// Signup form state.
#[derive(Debug, Default)]
pub struct SignupForm {
    name: String,
    email: String,
    password: String,
    submitting: bool,
    error: Option<String>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn set_password(&mut self, password: &str) {
        self.password = password.to_string();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate and enter the submitting state.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        let name = self.name.trim();
        if name.is_empty() || name.len() > 100 {
            self.error = Some("Full name must be between 1 and 100 characters".to_string());
            return false;
        }
        if let Err(e) = validate_email(&self.email) {
            self.error = Some(e);
            return false;
        }
        if let Err(e) = validate_password_strength(&self.password) {
            self.error = Some(e);
            return false;
        }
        self.error = None;
        self.submitting = true;
        true
    }

    /// Resolve the stubbed submission. Always leaves `submitting` false.
    pub fn finish_submit(&mut self) -> AuthOutcome {
        self.submitting = false;
        AuthOutcome::pending()
    }
}
