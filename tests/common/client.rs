use actix_web::{web, App};
use account_auth::db::store::AccountStore;
use account_auth::types::account::PublicAccount;
use account_auth::types::user::RSignup;
use account_auth::AppState;
use std::sync::Arc;

use super::{test_hasher, STORE_TIMEOUT};

pub struct TestClient {
    pub state: web::Data<AppState>,
}

impl TestClient {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        TestClient {
            state: web::Data::new(AppState::new(store, test_hasher(), STORE_TIMEOUT)),
        }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .configure(account_auth::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: &str, password: &str) -> PublicAccount {
        self.state
            .registration
            .register(RSignup {
                name: "Test User".to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .expect("Failed to create user")
    }

    #[allow(dead_code)]
    pub async fn create_test_admin(&self, email: &str, password: &str) -> PublicAccount {
        self.state
            .provisioning
            .create_admin("Test Admin", email, password)
            .await
            .expect("Failed to create admin")
    }
}
