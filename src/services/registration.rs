use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use super::bounded;
use crate::db::store::AccountStore;
use crate::types::account::{AccountKind, NewAccount, PublicAccount};
use crate::types::error::AppError;
use crate::types::user::RSignup;
use crate::utils::password::CredentialHasher;

/// Self-service signup for regular users.
#[derive(Clone)]
pub struct RegistrationService {
    store: Arc<dyn AccountStore>,
    hasher: CredentialHasher,
    store_timeout: Duration,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn AccountStore>, hasher: CredentialHasher, store_timeout: Duration) -> Self {
        Self { store, hasher, store_timeout }
    }

    pub async fn register(&self, input: RSignup) -> Result<PublicAccount, AppError> {
        create_account(&self.store, &self.hasher, self.store_timeout, AccountKind::User, input).await
    }
}

/// Validate, hash, insert. Shared with admin provisioning.
pub(crate) async fn create_account(
    store: &Arc<dyn AccountStore>,
    hasher: &CredentialHasher,
    store_timeout: Duration,
    kind: AccountKind,
    input: RSignup,
) -> Result<PublicAccount, AppError> {
    if let Err(e) = input.validate() {
        debug!("{kind} signup rejected on field {}", e.field());
        return Err(e.into());
    }

    let password_hash = hasher.hash_blocking(input.password).await?;

    let account = bounded(
        store_timeout,
        store.create(NewAccount {
            kind,
            name: input.name,
            email: input.email,
            password_hash,
        }),
    )
    .await?;

    info!("Created {kind} account {}", account.id);
    Ok(account.public())
}
