use account_auth::config::EnvConfig;
use account_auth::db::postgres_service::PostgresService;
use account_auth::routes::configure_routes;
use account_auth::utils::password::CredentialHasher;
use account_auth::AppState;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::io;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EnvConfig::from_env().map_err(io::Error::other)?;
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = PostgresService::new(&config.database)
        .await
        .map_err(io::Error::other)?;
    let hasher = CredentialHasher::new(&config.hashing).map_err(io::Error::other)?;

    let state = web::Data::new(AppState::new(
        Arc::new(postgres_service),
        hasher,
        config.store_timeout,
    ));

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
