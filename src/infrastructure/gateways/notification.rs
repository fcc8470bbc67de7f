use async_trait::async_trait;
use serde::Serialize;

use crate::domain::gateways::{GatewayError, GatewayResult, NotificationGateway};

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    destination: &'a str,
    body: &'a str,
}

/// Posts messages to `{base_url}/messages`.
pub struct HttpNotificationGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNotificationGateway {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

#[async_trait]
impl NotificationGateway for HttpNotificationGateway {
    async fn send(&self, destination: &str, body: &str) -> GatewayResult<()> {
        let response = self
            .client
            .post(format!("{}/messages", self.base_url))
            .json(&SendMessage { destination, body })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::Rejected(response.status().as_u16()));
        }

        Ok(())
    }
}
