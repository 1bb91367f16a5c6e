use async_trait::async_trait;
use chrono::Utc;
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

use super::store::{AccountStore, StoreError};
use crate::types::account::{Account, AccountKind, NewAccount};

/// In-process [`AccountStore`]. Same uniqueness and soft-delete rules as the
/// Postgres store; used by tests and local experiments.
#[derive(Default)]
pub struct MemoryStore {
    accounts: RwLock<Vec<Account>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row count for `kind`, soft-deleted rows included. Still counts after a
    /// writer panicked.
    pub fn row_count(&self, kind: AccountKind) -> usize {
        let rows = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        rows.iter().filter(|a| a.kind == kind).count()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".into())
}

fn is_live(account: &Account, kind: AccountKind) -> bool {
    account.kind == kind && account.deleted_at.is_none()
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn find_by_email(&self, kind: AccountKind, email: &str) -> Result<Account, StoreError> {
        let rows = self.accounts.read().map_err(poisoned)?;
        rows.iter()
            .find(|a| is_live(a, kind) && a.email == email)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, account: NewAccount) -> Result<Account, StoreError> {
        if account.email.is_empty() || account.name.is_empty() {
            return Err(StoreError::Validation("name and email must be set".into()));
        }

        let mut rows = self.accounts.write().map_err(poisoned)?;
        // unique index covers soft-deleted rows too, like the Postgres one
        if rows.iter().any(|a| a.kind == account.kind && a.email == account.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let now = Utc::now();
        let created = Account {
            id: Uuid::new_v4(),
            kind: account.kind,
            name: account.name,
            email: account.email,
            password_hash: account.password_hash,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn list_all(&self, kind: AccountKind) -> Result<Vec<Account>, StoreError> {
        let rows = self.accounts.read().map_err(poisoned)?;
        Ok(rows.iter().filter(|a| is_live(a, kind)).cloned().collect())
    }

    async fn soft_delete(&self, kind: AccountKind, email: &str) -> Result<(), StoreError> {
        let mut rows = self.accounts.write().map_err(poisoned)?;
        let account = rows
            .iter_mut()
            .find(|a| is_live(a, kind) && a.email == email)
            .ok_or(StoreError::NotFound)?;
        let now = Utc::now();
        account.deleted_at = Some(now);
        account.updated_at = now;
        Ok(())
    }
}
