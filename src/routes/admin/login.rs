use actix_web::{post, web};

use crate::routes::user::login::login_as;
use crate::state::AppState;
use crate::types::account::AccountKind;
use crate::types::response::ApiResult;
use crate::types::user::{MessageRes, RLogin};

#[post("/login")]
pub async fn admin_login(
    state: web::Data<AppState>,
    body: web::Json<RLogin>,
) -> ApiResult<MessageRes> {
    login_as(&state, AccountKind::Admin, body.into_inner()).await
}
