use async_trait::async_trait;

use crate::domain::{Account, AddAccountModel};
use crate::error::RepoError;

/// Account storage.
///
/// Implementations own their connection lifecycle and must enforce that
/// `email` is unique, reporting a duplicate as [`RepoError::Constraint`].
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert an account and return it as stored, including the generated id.
    async fn add(&self, account: AddAccountModel) -> Result<Account, RepoError>;

    /// Find an account by its email address.
    async fn load_by_email(&self, email: &str) -> Result<Option<Account>, RepoError>;
}
