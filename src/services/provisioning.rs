use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::{bounded, registration::create_account};
use crate::db::store::AccountStore;
use crate::types::account::{AccountKind, PublicAccount};
use crate::types::error::AppError;
use crate::types::user::RSignup;
use crate::utils::password::CredentialHasher;

/// Admin lifecycle. Only reachable from the `admin-cli` binary; there is no
/// HTTP route that creates or removes admins.
#[derive(Clone)]
pub struct ProvisioningService {
    store: Arc<dyn AccountStore>,
    hasher: CredentialHasher,
    store_timeout: Duration,
}

impl ProvisioningService {
    pub fn new(store: Arc<dyn AccountStore>, hasher: CredentialHasher, store_timeout: Duration) -> Self {
        Self { store, hasher, store_timeout }
    }

    pub async fn create_admin(&self, name: &str, email: &str, password: &str) -> Result<PublicAccount, AppError> {
        let input = RSignup {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        create_account(&self.store, &self.hasher, self.store_timeout, AccountKind::Admin, input).await
    }

    pub async fn deactivate_admin(&self, email: &str) -> Result<(), AppError> {
        bounded(self.store_timeout, self.store.soft_delete(AccountKind::Admin, email)).await?;
        info!("Deactivated admin {email}");
        Ok(())
    }
}
