use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::db::store::StoreError;
use crate::utils::password::HashingError;
use crate::utils::validation::ValidationError;

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug, Error)]
pub enum AppError {
    // client side
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("already exists")]
    AlreadyExists,
    #[error("not found")]
    NotFound,

    // infra things
    #[error(transparent)]
    Store(StoreError),
    #[error(transparent)]
    Hashing(#[from] HashingError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail => AppError::AlreadyExists,
            StoreError::NotFound => AppError::NotFound,
            StoreError::Validation(msg) => AppError::BadRequest(msg),
            other => AppError::Store(other),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl AppError {
    /// Message safe to hand to a client. Infrastructure detail stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::BadRequest(msg) | Self::Internal(msg) => msg.clone(),
            Self::InvalidCredentials => INVALID_CREDENTIALS.to_string(),
            Self::AlreadyExists => "Email already registered".to_string(),
            Self::NotFound => "Not found".to_string(),
            Self::Store(_) | Self::Hashing(_) => "Internal server error".to_string(),
        }
    }

    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Hashing(_) | Self::Internal(_))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Hashing(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorBody { error: &self.public_message() })
    }
}
