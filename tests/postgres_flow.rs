// Store-level flows against a real PostgreSQL. Needs Docker:
//   cargo test --test postgres_flow -- --ignored

mod common;

use account_auth::config::DatabaseConfig;
use account_auth::db::postgres_service::PostgresService;
use account_auth::db::store::{AccountStore, StoreError};
use account_auth::types::account::{AccountKind, NewAccount};
use actix_web::{http::StatusCode, test};
use std::sync::Arc;
use std::time::Duration;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

struct PgContext {
    db: Arc<PostgresService>,
    _container: ContainerAsync<Postgres>,
}

impl PgContext {
    async fn new() -> PgContext {
        let container = Postgres::default().start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let config = DatabaseConfig {
            url: format!("postgresql://postgres:postgres@{}:{}/postgres", host, port),
            max_connections: 5,
            connect_timeout: Duration::from_secs(10),
        };

        let db = Arc::new(
            PostgresService::new(&config)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        PgContext { db, _container: container }
    }
}

fn new_account(kind: AccountKind, email: &str) -> NewAccount {
    NewAccount {
        kind,
        name: "Test User".into(),
        email: email.into(),
        password_hash: "$argon2id$v=19$m=256,t=1,p=1$c2FsdHNhbHQ$aGFzaA".into(),
    }
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_postgres_create_find_and_duplicate() {
    let ctx = PgContext::new().await;

    let created = ctx.db.create(new_account(AccountKind::User, "pg@example.com")).await.unwrap();
    let found = ctx.db.find_by_email(AccountKind::User, "pg@example.com").await.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.kind, AccountKind::User);

    let dup = ctx.db.create(new_account(AccountKind::User, "pg@example.com")).await.unwrap_err();
    assert!(matches!(dup, StoreError::DuplicateEmail));

    // separate table, separate uniqueness
    ctx.db.create(new_account(AccountKind::Admin, "pg@example.com")).await.unwrap();

    assert!(matches!(
        ctx.db.find_by_email(AccountKind::User, "nobody@example.com").await,
        Err(StoreError::NotFound)
    ));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_postgres_concurrent_duplicate_has_one_winner() {
    let ctx = PgContext::new().await;

    let (a, b) = tokio::join!(
        ctx.db.create(new_account(AccountKind::User, "race@example.com")),
        ctx.db.create(new_account(AccountKind::User, "race@example.com")),
    );
    assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
    assert_eq!(ctx.db.list_all(AccountKind::User).await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_postgres_list_order_and_soft_delete() {
    let ctx = PgContext::new().await;
    for email in ["one@example.com", "two@example.com", "three@example.com"] {
        ctx.db.create(new_account(AccountKind::User, email)).await.unwrap();
    }

    ctx.db.soft_delete(AccountKind::User, "two@example.com").await.unwrap();

    let emails: Vec<String> = ctx.db
        .list_all(AccountKind::User)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.email)
        .collect();
    assert_eq!(emails, ["one@example.com", "three@example.com"]);
    assert!(matches!(
        ctx.db.find_by_email(AccountKind::User, "two@example.com").await,
        Err(StoreError::NotFound)
    ));
}

#[actix_web::test]
#[ignore = "requires docker"]
async fn test_postgres_http_signup_and_login() {
    let ctx = PgContext::new().await;
    let client = common::client::TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let signup = test::TestRequest::post()
        .uri("/signup")
        .set_json(&common::test_data::sample_user())
        .to_request();
    assert_eq!(test::call_service(&app, signup).await.status(), StatusCode::OK);

    let again = test::TestRequest::post()
        .uri("/signup")
        .set_json(&common::test_data::sample_user())
        .to_request();
    assert_eq!(test::call_service(&app, again).await.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let login = test::TestRequest::post()
        .uri("/login")
        .set_json(&common::test_data::login("testuser@example.com", "password123"))
        .to_request();
    assert_eq!(test::call_service(&app, login).await.status(), StatusCode::OK);
}
