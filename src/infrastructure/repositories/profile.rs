use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::error::{Api, Db};

use crate::domain::models::account::Account;
use crate::domain::repositories::profile::ProfileRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::profile::{SurrealCount, SurrealProfile};

pub struct ProfileRepositoryImpl {
    db: Arc<Surreal<Any>>,
}

impl ProfileRepositoryImpl {
    pub fn new(db: Arc<Surreal<Any>>) -> Self {
        Self { db }
    }
}

const PROFILE: &str = "profile";

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn exists(&self, identifier: &str) -> RepositoryResult<bool> {
        let mut res = self
            .db
            .query("(SELECT count() FROM type::table($table) WHERE identifier = type::string($identifier) GROUP ALL)[0] or { count: 0 }")
            .bind(("table", PROFILE))
            .bind(("identifier", identifier.to_owned()))
            .await?;

        let counter = res.take::<Option<SurrealCount>>(0)?;

        Ok(counter.is_some_and(|counter| counter.count > 0))
    }

    async fn get(&self, identifier: &str) -> RepositoryResult<Option<Account>> {
        let profile: Option<SurrealProfile> =
            self.db.select((PROFILE, identifier.to_owned())).await?;

        Ok(profile.map(Into::into))
    }

    async fn put(&self, account: Account) -> RepositoryResult<()> {
        let identifier = account.identifier.clone();

        let created: Result<Option<SurrealProfile>, surrealdb::Error> = self
            .db
            .create((PROFILE, identifier.clone()))
            .content(SurrealProfile::from(account))
            .await;

        match created {
            Ok(_) => Ok(()),
            Err(error) if is_duplicate(&error) => Err(RepositoryError::Conflict(identifier)),
            Err(error) => Err(error.into()),
        }
    }
}

/// Embedded engines report the typed error; remote engines only send its text.
fn is_duplicate(error: &surrealdb::Error) -> bool {
    match error {
        surrealdb::Error::Db(Db::RecordExists { .. } | Db::IndexExists { .. }) => true,
        surrealdb::Error::Api(Api::Query(message)) => {
            message.contains("already exists") || message.contains("already contains")
        }
        _ => false,
    }
}
