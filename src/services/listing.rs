use std::sync::Arc;
use std::time::Duration;

use super::bounded;
use crate::db::store::AccountStore;
use crate::types::account::{AccountKind, PublicAccount};
use crate::types::error::AppError;

#[derive(Clone)]
pub struct ListingService {
    store: Arc<dyn AccountStore>,
    store_timeout: Duration,
}

impl ListingService {
    pub fn new(store: Arc<dyn AccountStore>, store_timeout: Duration) -> Self {
        Self { store, store_timeout }
    }

    /// Every live user in store order. All or nothing.
    pub async fn list_users(&self) -> Result<Vec<PublicAccount>, AppError> {
        let accounts = bounded(self.store_timeout, self.store.list_all(AccountKind::User)).await?;
        Ok(accounts.iter().map(|a| a.public()).collect())
    }
}
