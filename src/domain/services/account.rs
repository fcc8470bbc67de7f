use async_trait::async_trait;

use crate::domain::error::{LoginError, SignupError};
use crate::domain::models::account::{Account, AuthOutcome, Credentials, SignupRequest};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn signup(&self, request: SignupRequest) -> Result<Account, SignupError>;
    async fn login(&self, credentials: Credentials) -> Result<AuthOutcome, LoginError>;
}
