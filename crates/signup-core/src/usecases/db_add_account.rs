use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Account, AddAccountModel};
use crate::error::{DomainError, RepoError};
use crate::ports::{AccountRepository, AddAccount, PasswordService};

/// Creates accounts in the repository, storing only the password hash.
#[derive(Clone)]
pub struct DbAddAccount {
    hasher: Arc<dyn PasswordService>,
    repository: Arc<dyn AccountRepository>,
}

impl DbAddAccount {
    pub fn new(hasher: Arc<dyn PasswordService>, repository: Arc<dyn AccountRepository>) -> Self {
        Self { hasher, repository }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    async fn add(&self, account: AddAccountModel) -> Result<Account, DomainError> {
        if self
            .repository
            .load_by_email(&account.email)
            .await?
            .is_some()
        {
            return Err(DomainError::EmailInUse);
        }

        let hashed = self.hasher.hash(&account.password)?;

        // The unique index still decides when two sign-ups race.
        self.repository
            .add(account.with_password(hashed))
            .await
            .map_err(|e| match e {
                RepoError::Constraint(_) => DomainError::EmailInUse,
                other => other.into(),
            })
    }
}
