use actix_web::{post, web};
use tracing::error;

use crate::state::AppState;
use crate::types::account::AccountKind;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{MessageRes, RLogin};

/// Shared by `/login` and `/admin/login`.
pub(crate) async fn login_as(
    state: &AppState,
    kind: AccountKind,
    body: RLogin,
) -> ApiResult<MessageRes> {
    body.validate()?;

    match state.authentication.authenticate(kind, &body.email, &body.password).await {
        Ok(_) => Ok(ApiResponse::Ok(MessageRes {
            message: "Login successful".to_string(),
        })),
        Err(e) if e.is_infrastructure() => {
            error!("{kind} login could not be checked: {e}");
            Err(AppError::Internal("Internal server error".to_string()))
        }
        Err(e) => Err(e),
    }
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<RLogin>,
) -> ApiResult<MessageRes> {
    login_as(&state, AccountKind::User, body.into_inner()).await
}
