//! Use case ports consumed by the presentation layer.

use async_trait::async_trait;

use crate::domain::{Account, AddAccountModel};
use crate::error::DomainError;

/// Creates a new account.
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Persist a new account and return it with its assigned id.
    async fn add(&self, account: AddAccountModel) -> Result<Account, DomainError>;
}
