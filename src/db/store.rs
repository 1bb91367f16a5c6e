//! The account persistence contract shared by the Postgres store and the
//! in-memory store.

use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::types::account::{Account, AccountKind, NewAccount};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("account not found")]
    NotFound,
    #[error("email already registered")]
    DuplicateEmail,
    #[error("rejected by store: {0}")]
    Validation(String),
    #[error("store call timed out")]
    Timeout,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        if let Some(sql_err) = err.sql_err() {
            return match sql_err {
                SqlErr::UniqueConstraintViolation(_) => StoreError::DuplicateEmail,
                _ => StoreError::Unavailable(err.to_string()),
            };
        }
        match err {
            DbErr::RecordNotFound(_) => StoreError::NotFound,
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

/// Accounts keyed by email, separately per [`AccountKind`].
///
/// Soft-deleted accounts are invisible to every read. Uniqueness must be
/// enforced by the implementation itself so concurrent inserts of the same
/// email resolve to exactly one winner.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_email(&self, kind: AccountKind, email: &str) -> Result<Account, StoreError>;

    async fn create(&self, account: NewAccount) -> Result<Account, StoreError>;

    /// Live accounts of `kind` in insertion order.
    async fn list_all(&self, kind: AccountKind) -> Result<Vec<Account>, StoreError>;

    async fn soft_delete(&self, kind: AccountKind, email: &str) -> Result<(), StoreError>;
}
