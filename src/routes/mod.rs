use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::types::error::AppError;

pub mod admin;
pub mod health;
pub mod user;

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        AppError::BadRequest(err.to_string()).into()
    })
}

/// Expects `web::Data<AppState>` to be registered on the app.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(user::signup::signup);
    cfg.service(user::login::login);
    cfg.service(
        web::scope("/admin")
            .service(admin::login::admin_login)
            .service(admin::list::list_users)
    );
}
