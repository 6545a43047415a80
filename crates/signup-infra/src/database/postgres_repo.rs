//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, Set, SqlErr};
use uuid::Uuid;

use signup_core::domain::{Account, AddAccountModel};
use signup_core::error::RepoError;
use signup_core::ports::AccountRepository;

use super::connections::DatabaseHandle;
use super::entity::account::{self, Entity as AccountEntity};

/// PostgreSQL account repository.
pub struct PostgresAccountRepository {
    db: DatabaseHandle,
}

impl PostgresAccountRepository {
    pub fn new(db: DatabaseHandle) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        return RepoError::Constraint(detail);
    }
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Account already exists".to_string())
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) if local.chars().count() > 1 => format!("{first}***@{domain}"),
            _ => format!("***@{domain}"),
        },
        None => "***".to_string(),
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn add(&self, account: AddAccountModel) -> Result<Account, RepoError> {
        let id = Uuid::new_v4();
        tracing::debug!(account_id = %id, email = %mask_email(&account.email), "Inserting account");

        let model = account::ActiveModel {
            id: Set(id),
            name: Set(account.name),
            email: Set(account.email),
            password: Set(account.password),
            access_token: Set(None),
            created_at: Set(Utc::now().into()),
        };

        AccountEntity::insert(model)
            .exec_without_returning(self.db.connection())
            .await
            .map_err(map_db_err)?;

        // Read back what the database stored under the generated id.
        let stored = AccountEntity::find_by_id(id)
            .one(self.db.connection())
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        Ok(stored.into())
    }

    async fn load_by_email(&self, email: &str) -> Result<Option<Account>, RepoError> {
        tracing::debug!(email = %mask_email(email), "Finding account by email");

        let result = AccountEntity::find()
            .filter(account::Column::Email.eq(email))
            .one(self.db.connection())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}
