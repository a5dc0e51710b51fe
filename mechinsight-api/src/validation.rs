use serde::{Deserialize, Serialize};

use crate::requests::SignupRequest;

/// One failed field check, suitable for rendering next to the form input.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl SignupRequest {
    /// Validates all signup fields at once.
    ///
    /// Returns every failed check rather than stopping at the first, so the
    /// frontend can highlight all offending inputs in one round trip.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.firstname.trim().is_empty() {
            errors.push(FieldError::new("firstname", "firstname is required"));
        }
        if self.lastname.trim().is_empty() {
            errors.push(FieldError::new("lastname", "lastname is required"));
        }
        if self.username.trim().is_empty() {
            errors.push(FieldError::new("username", "username is required"));
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", "invalid email id"));
        }
        if self.password.len() < 8 {
            errors.push(FieldError::new("password", "password should be min length 8"));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.') && email.len() > 5
}
