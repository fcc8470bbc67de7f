use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::gateways::{GatewayError, GatewayResult, TranslationGateway};
use crate::domain::models::language::Language;

#[derive(Debug, Serialize)]
struct TranslateText<'a> {
    text: &'a str,
    source_language: Language,
    target_language: Language,
}

#[derive(Debug, Deserialize)]
struct TranslatedText {
    translated_text: String,
}

/// Posts single strings to `{base_url}/translate`.
pub struct HttpTranslationGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTranslationGateway {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

#[async_trait]
impl TranslationGateway for HttpTranslationGateway {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> GatewayResult<String> {
        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .json(&TranslateText {
                text,
                source_language: source,
                target_language: target,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::Rejected(response.status().as_u16()));
        }

        let translated: TranslatedText = response.json().await?;

        Ok(translated.translated_text)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload_uses_language_codes() {
        let payload = serde_json::to_value(TranslateText {
            text: "Sign Up",
            source_language: Language::En,
            target_language: Language::Es,
        })
        .unwrap();

        assert_eq!(
            payload,
            serde_json::json!({
                "text": "Sign Up",
                "source_language": "en",
                "target_language": "es"
            })
        );
    }

    #[test]
    fn test_response_payload() {
        let translated: TranslatedText =
            serde_json::from_str(r#"{ "translated_text": "Registrarse" }"#).unwrap();

        assert_eq!(translated.translated_text, "Registrarse");
    }
}
