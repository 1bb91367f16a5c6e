use actix_web::{post, web};
use tracing::{error, warn};

use crate::state::AppState;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{MessageRes, RSignup};

#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<RSignup>,
) -> ApiResult<MessageRes> {
    match state.registration.register(body.into_inner()).await {
        Ok(_) => Ok(ApiResponse::Ok(MessageRes {
            message: "User created successfully".to_string(),
        })),
        Err(e @ AppError::Validation(_)) => Err(e),
        // Duplicates share the generic creation failure with infra errors.
        Err(AppError::AlreadyExists) => {
            warn!("Signup rejected: email already registered");
            Err(AppError::Internal("Failed to create user".to_string()))
        }
        Err(e) => {
            error!("Failed to create user: {e}");
            Err(AppError::Internal("Failed to create user".to_string()))
        }
    }
}
