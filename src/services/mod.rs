//! Account services: everything between a decoded request and the store.
//!
//! Each service holds its collaborators explicitly. Nothing here keeps state
//! between calls, so one instance is shared by every worker.

use std::future::Future;
use std::time::Duration;

use crate::db::store::StoreError;

pub mod authentication;
pub mod listing;
pub mod provisioning;
pub mod registration;

pub use authentication::AuthenticationService;
pub use listing::ListingService;
pub use provisioning::ProvisioningService;
pub use registration::RegistrationService;

/// Caps a store call. Dropping the inner future on expiry abandons any open
/// transaction, which rolls back.
pub(crate) async fn bounded<T, F>(limit: Duration, call: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    tokio::time::timeout(limit, call)
        .await
        .map_err(|_| StoreError::Timeout)?
}

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::config::HashingConfig;
    use crate::db::store::{AccountStore, StoreError};
    use crate::types::account::{Account, AccountKind, NewAccount};
    use crate::utils::password::CredentialHasher;

    pub fn cheap_hasher() -> CredentialHasher {
        CredentialHasher::new(&HashingConfig { memory_kib: 256, iterations: 1, parallelism: 1 })
            .unwrap()
    }

    pub const TIMEOUT: Duration = Duration::from_secs(2);

    /// Never answers within any sane timeout.
    pub struct StalledStore;

    #[async_trait]
    impl AccountStore for StalledStore {
        async fn find_by_email(&self, _: AccountKind, _: &str) -> Result<Account, StoreError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Err(StoreError::NotFound)
        }
        async fn create(&self, _: NewAccount) -> Result<Account, StoreError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Err(StoreError::Timeout)
        }
        async fn list_all(&self, _: AccountKind) -> Result<Vec<Account>, StoreError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(vec![])
        }
        async fn soft_delete(&self, _: AccountKind, _: &str) -> Result<(), StoreError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(())
        }
    }

    pub fn stalled() -> Arc<dyn AccountStore> {
        Arc::new(StalledStore)
    }
}
