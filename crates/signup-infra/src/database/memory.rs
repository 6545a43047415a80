//! In-memory account repository - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use signup_core::domain::{Account, AddAccountModel};
use signup_core::error::RepoError;
use signup_core::ports::AccountRepository;

/// Account repository backed by a `HashMap` keyed by email.
///
/// Note: Data is lost on process restart.
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
        }
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn add(&self, account: AddAccountModel) -> Result<Account, RepoError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&account.email) {
            return Err(RepoError::Constraint("email must be unique".to_string()));
        }

        let stored = Account {
            id: Uuid::new_v4().to_string(),
            name: account.name,
            email: account.email,
            password: account.password,
            access_token: None,
        };
        accounts.insert(stored.email.clone(), stored.clone());

        Ok(stored)
    }

    async fn load_by_email(&self, email: &str) -> Result<Option<Account>, RepoError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }
}
