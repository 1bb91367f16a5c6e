//! Input validation for signup and login payloads.
//!
//! Name and email are blank when empty after trimming; a password only when
//! it is empty. Email comparison elsewhere stays exact; only the shape is
//! checked here.

use thiserror::Error;
use validator::ValidateEmail;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    Required { field: &'static str },
    #[error("Email and password are required")]
    MissingCredentials { field: &'static str },
    #[error("Invalid email format")]
    InvalidEmail,
}

impl ValidationError {
    /// The offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field } | Self::MissingCredentials { field } => field,
            Self::InvalidEmail => "email",
        }
    }
}

fn is_blank(field: &str, value: &str) -> bool {
    match field {
        "password" => value.is_empty(),
        _ => value.trim().is_empty(),
    }
}

/// Fails on the first blank field, in the order given.
pub fn require_all(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    match fields.iter().find(|(field, value)| is_blank(field, value)) {
        Some((field, _)) => Err(ValidationError::Required { field }),
        None => Ok(()),
    }
}

pub fn require_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if is_blank("email", email) {
        return Err(ValidationError::MissingCredentials { field: "email" });
    }
    if is_blank("password", password) {
        return Err(ValidationError::MissingCredentials { field: "password" });
    }
    Ok(())
}

pub fn check_email_shape(email: &str) -> Result<(), ValidationError> {
    if !email.validate_email() {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
