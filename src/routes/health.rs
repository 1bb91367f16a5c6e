use actix_web::get;

use crate::types::response::{ApiResponse, ApiResult};

/// Liveness only; does not touch the store.
#[get("")]
async fn health() -> ApiResult<()> {
    Ok(ApiResponse::EmptyOk)
}
