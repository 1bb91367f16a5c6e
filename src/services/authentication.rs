use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

use super::bounded;
use crate::db::store::{AccountStore, StoreError};
use crate::types::account::{AccountKind, PublicAccount};
use crate::types::error::AppError;
use crate::utils::password::CredentialHasher;

/// Credential checks for both account kinds.
///
/// Unknown email and wrong password both come back as
/// [`AppError::InvalidCredentials`]; the unknown-email branch also runs a decoy
/// verification so the two take comparable time.
#[derive(Clone)]
pub struct AuthenticationService {
    store: Arc<dyn AccountStore>,
    hasher: CredentialHasher,
    store_timeout: Duration,
}

impl AuthenticationService {
    pub fn new(store: Arc<dyn AccountStore>, hasher: CredentialHasher, store_timeout: Duration) -> Self {
        Self { store, hasher, store_timeout }
    }

    pub async fn authenticate(
        &self,
        kind: AccountKind,
        email: &str,
        password: &str,
    ) -> Result<PublicAccount, AppError> {
        let account = match bounded(self.store_timeout, self.store.find_by_email(kind, email)).await {
            Ok(account) => account,
            Err(StoreError::NotFound) => {
                self.hasher.verify_decoy_blocking(password.to_string()).await;
                debug!("{kind} login failed: unknown email");
                return Err(AppError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };

        match self
            .hasher
            .verify_blocking(account.password_hash.clone(), password.to_string())
            .await
        {
            Ok(true) => Ok(account.public()),
            Ok(false) => {
                debug!("{kind} login failed: password mismatch for {}", account.id);
                Err(AppError::InvalidCredentials)
            }
            // Unusable stored hash: refuse like any other failure, but shout in the logs.
            Err(e) => {
                error!("{kind} {} has an unusable password hash: {e}", account.id);
                Err(AppError::InvalidCredentials)
            }
        }
    }
}
