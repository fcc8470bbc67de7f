use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub surrealdb: SurrealDbConfig,
    pub gateways: GatewaysConfig,
    pub timeouts: TimeoutsConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed to call the API from a browser.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
    /// Export spans to an OTLP collector in addition to stdout.
    pub otlp: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SurrealDbConfig {
    /// `ws://host:port` for a remote server, `mem://` for an in-process store.
    pub endpoint: String,
    pub username: String,
    pub password: String,
    pub namespace: String,
    pub database: String,
    pub migration: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewaysConfig {
    pub notification_url: String,
    pub translation_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TimeoutsConfig {
    pub store_ms: u64,
    pub notify_ms: u64,
    pub translate_ms: u64,
}

impl TimeoutsConfig {
    pub fn store(&self) -> Duration {
        Duration::from_millis(self.store_ms)
    }

    pub fn notify(&self) -> Duration {
        Duration::from_millis(self.notify_ms)
    }

    pub fn translate(&self) -> Duration {
        Duration::from_millis(self.translate_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NotificationsConfig {
    pub queue_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            service: ServiceConfig {
                name: "onboard-actix".to_string(),
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                allowed_origins: vec![
                    "http://localhost:8080".to_string(),
                    "http://localhost:19006".to_string(),
                ],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                otlp: false,
            },
            surrealdb: SurrealDbConfig {
                endpoint: "ws://localhost:8000".to_string(),
                username: "root".to_string(),
                password: "root".to_string(),
                namespace: "onboard".to_string(),
                database: "onboard".to_string(),
                migration: true,
            },
            gateways: GatewaysConfig {
                notification_url: "http://localhost:9001".to_string(),
                translation_url: "http://localhost:9002".to_string(),
            },
            timeouts: TimeoutsConfig {
                store_ms: 5000,
                notify_ms: 5000,
                translate_ms: 3000,
            },
            notifications: NotificationsConfig {
                queue_capacity: 256,
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_nested_values() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("APP_TIMEOUTS__STORE_MS", "250");
            jail.set_env("APP_SURREALDB__ENDPOINT", "mem://");

            let config = AppConfig::load()?;

            assert_eq!(config.timeouts.store(), Duration::from_millis(250));
            assert_eq!(config.surrealdb.endpoint, "mem://");
            assert_eq!(config.notifications.queue_capacity, 256);

            Ok(())
        });
    }
}
