mod translation;

pub mod utils;

use ::surrealdb::{Surreal, engine::any::Any};

use std::sync::Arc;

use serde::Deserialize;
use surrealdb_migrations::MigrationRunner;

use crate::infrastructure::gateways::notification::mock::NotificationGatewayImpl;
use crate::infrastructure::gateways::translation::mock::TranslationGatewayImpl;
use crate::services::notification::NotificationWorker;
use crate::{MIGRATIONS_DIR, infrastructure::databases::surrealdb};
use crate::{
    config::AppConfig,
    container::{Container, Gateways},
};

use rstest::*;

pub struct TestContext {
    pub config: AppConfig,
    pub connection: Surreal<Any>,
    pub container: Arc<Container>,
    pub worker: NotificationWorker,
    pub notifications: Arc<NotificationGatewayImpl>,
    pub translations: Arc<TranslationGatewayImpl>,
}

impl TestContext {
    /// Drops every handle on the dispatcher, then waits for queued
    /// notifications to be delivered.
    pub async fn sent(self) -> Vec<(String, String)> {
        let TestContext {
            container,
            worker,
            notifications,
            ..
        } = self;

        drop(container);
        worker.await.unwrap();

        notifications.messages().await
    }
}

#[fixture]
async fn context() -> TestContext {
    let mut config = AppConfig::default();

    config.surrealdb.endpoint = "mem://".to_string();
    config.surrealdb.username = String::new();

    let connection = surrealdb::connect(&config.surrealdb).await.unwrap();

    MigrationRunner::new(&connection)
        .load_files(&MIGRATIONS_DIR)
        .up()
        .await
        .unwrap();

    let notifications = Arc::new(NotificationGatewayImpl::default());
    let translations = Arc::new(TranslationGatewayImpl::default());

    let gateways = Gateways {
        notification: notifications.clone(),
        translation: translations.clone(),
    };

    let (container, worker) = Container::new(connection.clone(), gateways, &config);

    TestContext {
        config,
        connection,
        container: Arc::new(container),
        worker,
        notifications,
        translations,
    }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    code: u16,
    message: String,
}
