use account_auth::config::HashingConfig;
use account_auth::db::memory::MemoryStore;
use account_auth::db::store::{AccountStore, StoreError};
use account_auth::types::account::{Account, AccountKind, NewAccount};
use account_auth::utils::password::CredentialHasher;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub mod client;

pub const STORE_TIMEOUT: Duration = Duration::from_secs(2);

// Tests don't need production-strength hashing.
pub fn test_hasher() -> CredentialHasher {
    CredentialHasher::new(&HashingConfig { memory_kib: 256, iterations: 1, parallelism: 1 })
        .expect("Failed to build hasher")
}

pub struct TestContext {
    pub store: Arc<MemoryStore>,
}

impl TestContext {
    pub fn new() -> TestContext {
        TestContext { store: Arc::new(MemoryStore::new()) }
    }

    #[allow(dead_code)]
    pub fn client(&self) -> client::TestClient {
        client::TestClient::new(self.store.clone())
    }
}

/// Store whose every call fails like a dropped database connection.
#[allow(dead_code)]
pub struct UnavailableStore;

#[async_trait]
impl AccountStore for UnavailableStore {
    async fn find_by_email(&self, _: AccountKind, _: &str) -> Result<Account, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    async fn create(&self, _: NewAccount) -> Result<Account, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
    async fn list_all(&self, _: AccountKind) -> Result<Vec<Account>, StoreError> {
        Err(StoreError::Unavailable("SELECT * FROM users: connection refused".into()))
    }
    async fn soft_delete(&self, _: AccountKind, _: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use account_auth::types::user::{RLogin, RSignup};

    pub fn sample_user() -> RSignup {
        RSignup {
            name: "Test User".to_string(),
            email: "testuser@example.com".to_string(),
            password: "password123".to_string(),
        }
    }

    pub fn login(email: &str, password: &str) -> RLogin {
        RLogin {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}
