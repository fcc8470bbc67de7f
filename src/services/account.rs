use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    error::{LoginError, SignupError},
    models::account::{Account, AuthOutcome, Credentials, Notification, SignupRequest},
    repositories::{profile::ProfileRepository, repository::RepositoryError},
    services::account::AccountService,
};

use argon2::{
    Argon2,
    password_hash::{
        Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, Result, SaltString,
        rand_core::OsRng,
    },
};

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use super::notification::NotificationDispatcher;
use super::{DeadlineError, with_deadline};

pub struct AccountServiceImpl {
    repository: Arc<dyn ProfileRepository>,
    notifications: NotificationDispatcher,
    store_timeout: Duration,
}

impl AccountServiceImpl {
    pub fn new(
        repository: Arc<dyn ProfileRepository>,
        notifications: NotificationDispatcher,
        store_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            notifications,
            store_timeout,
        }
    }

    async fn is_account(&self, identifier: &str) -> core::result::Result<bool, SignupError> {
        with_deadline(self.store_timeout, self.repository.exists(identifier))
            .await
            .map_err(|err| SignupError::StoreWriteFailed(err.to_string()))
    }

    /// A concurrent signup may win between the existence check and this write.
    async fn store(&self, account: Account) -> core::result::Result<(), SignupError> {
        with_deadline(self.store_timeout, self.repository.put(account))
            .await
            .map_err(|err| match err {
                DeadlineError::Failed(RepositoryError::Conflict(_)) => {
                    SignupError::DuplicateIdentifier
                }
                err => SignupError::StoreWriteFailed(err.to_string()),
            })
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> core::result::Result<Option<Account>, LoginError> {
        with_deadline(self.store_timeout, self.repository.get(identifier))
            .await
            .map_err(|err| LoginError::StoreLookupFailed(err.to_string()))
    }

    fn welcome(&self, account: &Account) {
        let Some(phone_number) = &account.phone_number else {
            return;
        };

        if let Err(error) = self
            .notifications
            .dispatch(Notification::welcome(phone_number, &account.name))
        {
            warn!(%error, "welcome notification not queued");
        }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    #[instrument(skip_all, fields(identifier = %request.identifier))]
    async fn signup(&self, request: SignupRequest) -> core::result::Result<Account, SignupError> {
        request.validate()?;

        let preferred_language = request.preferred_language.ok_or_else(|| {
            SignupError::Validation("Preferred language is required".to_string())
        })?;

        if self.is_account(&request.identifier).await? {
            return Err(SignupError::DuplicateIdentifier);
        }

        let account = Account {
            identifier: request.identifier,
            name: request.name,
            surname: request.surname,
            phone_number: request.phone_number,
            password: encrypt_password(&request.password)
                .map_err(|err| SignupError::Hashing(err.to_string()))?,
            preferred_language,
        };

        self.store(account.clone()).await?;
        info!("account created");

        self.welcome(&account);

        Ok(account)
    }

    #[instrument(skip_all, fields(identifier = %credentials.identifier))]
    async fn login(&self, credentials: Credentials) -> core::result::Result<AuthOutcome, LoginError> {
        if credentials.identifier.is_empty() || credentials.password.is_empty() {
            return Ok(AuthOutcome::Denied);
        }

        let account = match self.find_by_identifier(&credentials.identifier).await? {
            Some(account) => account,
            None => {
                debug!("unknown identifier");
                return Ok(AuthOutcome::Denied);
            }
        };

        match verify_password(&credentials.password, &account.password) {
            Ok(()) => Ok(AuthOutcome::Authorized(account)),
            Err(HashError::Password) => {
                debug!("password mismatch");
                Ok(AuthOutcome::Denied)
            }
            Err(err) => Err(LoginError::Hashing(err.to_string())),
        }
    }
}

pub fn encrypt_password(password: &str) -> Result<String> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<()> {
    let argon2 = Argon2::default();
    let hash = PasswordHash::new(hash);

    argon2.verify_password(password.as_bytes(), &hash?)
}
