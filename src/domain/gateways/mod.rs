use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::language::Language;

pub type GatewayResult<T> = core::result::Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("Gateway rejected the request with status {0}")]
    Rejected(u16),
    #[error("{0}")]
    Unavailable(String),
}

/// Outbound text messaging (SMS) provider.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn send(&self, destination: &str, body: &str) -> GatewayResult<()>;
}

/// Machine translation provider.
#[async_trait]
pub trait TranslationGateway: Send + Sync {
    async fn translate(&self, text: &str, source: Language, target: Language)
    -> GatewayResult<String>;
}
