use onboard_actix::config::AppConfig;
use onboard_actix::container::{Container, Gateways};
use onboard_actix::infrastructure::databases::surrealdb;
use onboard_actix::{MIGRATIONS_DIR, app, opentelemetry};

use actix_web::HttpServer;
use std::sync::Arc;
use std::time::Duration;
use surrealdb_migrations::MigrationRunner;
use thiserror::Error;

/// Queued welcome messages get this long to drain after the server stops.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Database(#[from] ::surrealdb::Error),
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Migration(String),
    #[error(transparent)]
    OTel(#[from] opentelemetry::OTelError),
    #[error(transparent)]
    Gateway(#[from] reqwest::Error),
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let conn = surrealdb::connect(&config.surrealdb).await?;

    if config.surrealdb.migration {
        MigrationRunner::new(&conn)
            .load_files(&MIGRATIONS_DIR)
            .up()
            .await
            .map_err(|err| AppError::Migration(err.to_string()))?;
    }

    let provider = opentelemetry::configure(&config.service, &config.logging)?;

    let gateways = Gateways::http(&config.gateways)?;

    let (container, worker) = Container::new(conn, gateways, &config);
    let container = Arc::new(container);

    let server_container = Arc::clone(&container);
    let server_config = config.server.clone();
    HttpServer::new(move || {
        app::create(Arc::clone(&server_container), server_config.clone())
    })
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await?;

    // The worker exits once every dispatcher handle is gone.
    drop(container);
    if tokio::time::timeout(DRAIN_TIMEOUT, worker).await.is_err() {
        tracing::warn!("Notification queue not drained before shutdown");
    }

    opentelemetry::shutdown(provider)?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}
