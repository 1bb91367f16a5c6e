use serde::{Deserialize, Serialize};

use super::account::PublicAccount;
use crate::utils::validation::{self, ValidationError};

// Missing fields decode as empty strings so they hit validation instead of a parse error.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RSignup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl RSignup {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::require_all(&[
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
        ])?;
        validation::check_email_shape(&self.email)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RLogin {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl RLogin {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::require_credentials(&self.email, &self.password)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageRes {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserListRes {
    pub users: Vec<PublicAccount>,
}
