use actix_web::{get, web};
use tracing::error;

use crate::state::AppState;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserListRes;

#[get("/getuser")]
pub async fn list_users(state: web::Data<AppState>) -> ApiResult<UserListRes> {
    let users = state.listing.list_users().await.map_err(|e| {
        error!("Failed to fetch users: {e}");
        AppError::Internal("Failed to fetch users".to_string())
    })?;

    Ok(ApiResponse::Ok(UserListRes { users }))
}
