use async_trait::async_trait;

use crate::domain::models::account::Account;

use super::repository::RepositoryResult;

/// Point lookups and point writes keyed by the account identifier.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn exists(&self, identifier: &str) -> RepositoryResult<bool>;
    async fn get(&self, identifier: &str) -> RepositoryResult<Option<Account>>;
    async fn put(&self, account: Account) -> RepositoryResult<()>;
}
