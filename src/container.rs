use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::config::{AppConfig, GatewaysConfig};

use crate::domain::gateways::{NotificationGateway, TranslationGateway};
use crate::domain::repositories::profile::ProfileRepository;
use crate::domain::services::account::AccountService;
use crate::domain::services::translation::TranslationService;

use crate::services::account::AccountServiceImpl;
use crate::services::notification::{NotificationDispatcher, NotificationWorker};
use crate::services::translation::TranslationServiceImpl;

use crate::infrastructure::gateways::notification::HttpNotificationGateway;
use crate::infrastructure::gateways::translation::HttpTranslationGateway;
use crate::infrastructure::repositories::profile::ProfileRepositoryImpl;

pub struct Gateways {
    pub notification: Arc<dyn NotificationGateway>,
    pub translation: Arc<dyn TranslationGateway>,
}

impl Gateways {
    pub fn http(config: &GatewaysConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Gateways {
            notification: Arc::new(HttpNotificationGateway::new(
                client.clone(),
                &config.notification_url,
            )),
            translation: Arc::new(HttpTranslationGateway::new(client, &config.translation_url)),
        })
    }
}

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
    pub translation_service: Arc<dyn TranslationService>,
}

impl Container {
    /// Must run inside a Tokio runtime: the notification worker is spawned here.
    pub fn new(conn: Surreal<Any>, gateways: Gateways, config: &AppConfig) -> (Self, NotificationWorker) {
        let db = Arc::new(conn);

        let (dispatcher, worker) = NotificationDispatcher::spawn(
            gateways.notification,
            config.notifications.queue_capacity,
            config.timeouts.notify(),
        );

        let container = Container {
            account_service: account_service(db, dispatcher, config),
            translation_service: translation_service(gateways.translation, config),
        };

        (container, worker)
    }
}

fn account_service(
    db: Arc<Surreal<Any>>,
    dispatcher: NotificationDispatcher,
    config: &AppConfig,
) -> Arc<dyn AccountService> {
    let profile_repository: Arc<dyn ProfileRepository> = Arc::new(ProfileRepositoryImpl::new(db));

    Arc::new(AccountServiceImpl::new(
        profile_repository,
        dispatcher,
        config.timeouts.store(),
    ))
}

fn translation_service(
    gateway: Arc<dyn TranslationGateway>,
    config: &AppConfig,
) -> Arc<dyn TranslationService> {
    Arc::new(TranslationServiceImpl::new(gateway, config.timeouts.translate()))
}
