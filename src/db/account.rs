use async_trait::async_trait;
use chrono::Utc;
use entity::admin::{ActiveModel as AdminActive, Entity as Admin};
use entity::user::{ActiveModel as UserActive, Entity as User};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::db::store::{AccountStore, StoreError};
use crate::types::account::{Account, AccountKind, NewAccount};

fn not_found(kind: AccountKind) -> DbErr {
    DbErr::RecordNotFound(format!("{kind} does not exist"))
}

#[async_trait]
impl AccountStore for PostgresService {
    async fn find_by_email(&self, kind: AccountKind, email: &str) -> Result<Account, StoreError> {
        let found: Option<Account> = match kind {
            AccountKind::User => User::find()
                .filter(entity::user::Column::Email.eq(email))
                .filter(entity::user::Column::DeletedAt.is_null())
                .one(&self.database_connection)
                .await?
                .map(Account::from),
            AccountKind::Admin => Admin::find()
                .filter(entity::admin::Column::Email.eq(email))
                .filter(entity::admin::Column::DeletedAt.is_null())
                .one(&self.database_connection)
                .await?
                .map(Account::from),
        };
        Ok(found.ok_or_else(|| not_found(kind))?)
    }

    /// Single-row insert inside a transaction. The unique email index decides
    /// concurrent duplicates; the loser surfaces as `DuplicateEmail`.
    async fn create(&self, payload: NewAccount) -> Result<Account, StoreError> {
        if payload.name.is_empty() || payload.email.is_empty() {
            return Err(StoreError::Validation("name and email must be set".into()));
        }

        let id = Uuid::new_v4();
        let now = Utc::now();
        let txn = self.database_connection.begin().await?;

        let created: Account = match payload.kind {
            AccountKind::User => UserActive {
                id: Set(id),
                name: Set(payload.name),
                email: Set(payload.email),
                password_hash: Set(payload.password_hash),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
            }
            .insert(&txn)
            .await?
            .into(),
            AccountKind::Admin => AdminActive {
                id: Set(id),
                name: Set(payload.name),
                email: Set(payload.email),
                password_hash: Set(payload.password_hash),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
            }
            .insert(&txn)
            .await?
            .into(),
        };

        txn.commit().await?;
        Ok(created)
    }

    async fn list_all(&self, kind: AccountKind) -> Result<Vec<Account>, StoreError> {
        let accounts = match kind {
            AccountKind::User => User::find()
                .filter(entity::user::Column::DeletedAt.is_null())
                .order_by_asc(entity::user::Column::CreatedAt)
                .order_by_asc(entity::user::Column::Id)
                .all(&self.database_connection)
                .await?
                .into_iter()
                .map(Account::from)
                .collect(),
            AccountKind::Admin => Admin::find()
                .filter(entity::admin::Column::DeletedAt.is_null())
                .order_by_asc(entity::admin::Column::CreatedAt)
                .order_by_asc(entity::admin::Column::Id)
                .all(&self.database_connection)
                .await?
                .into_iter()
                .map(Account::from)
                .collect(),
        };
        Ok(accounts)
    }

    async fn soft_delete(&self, kind: AccountKind, email: &str) -> Result<(), StoreError> {
        let now = Utc::now();
        match kind {
            AccountKind::User => {
                let row = User::find()
                    .filter(entity::user::Column::Email.eq(email))
                    .filter(entity::user::Column::DeletedAt.is_null())
                    .one(&self.database_connection)
                    .await?
                    .ok_or_else(|| not_found(kind))?;
                let mut am: UserActive = row.into();
                am.deleted_at = Set(Some(now));
                am.updated_at = Set(now);
                am.update(&self.database_connection).await?;
            }
            AccountKind::Admin => {
                let row = Admin::find()
                    .filter(entity::admin::Column::Email.eq(email))
                    .filter(entity::admin::Column::DeletedAt.is_null())
                    .one(&self.database_connection)
                    .await?
                    .ok_or_else(|| not_found(kind))?;
                let mut am: AdminActive = row.into();
                am.deleted_at = Set(Some(now));
                am.updated_at = Set(now);
                am.update(&self.database_connection).await?;
            }
        }
        Ok(())
    }
}
