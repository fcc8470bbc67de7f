use std::ops::Deref;

use crate::domain::error::AppError;
use actix_web::dev::{JsonBody, Payload};
use actix_web::error::JsonPayloadError;
use actix_web::{FromRequest, HttpRequest};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

/// Signup and login bodies are a handful of short strings.
const PAYLOAD_LIMIT: usize = 16_384;

/// JSON body that has already passed its `Validate` rules.
///
/// Malformed or oversized bodies are rejected with 400, rule violations with
/// 422 and a field -> message map.
#[derive(Debug)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for Validated<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let path = req.path().to_owned();

        JsonBody::new(req, payload, None, true)
            .limit(PAYLOAD_LIMIT)
            .map(move |body: Result<T, JsonPayloadError>| {
                let body = body.map_err(AppError::from)?;

                body.validate().map_err(|errors| {
                    debug!(%path, "request body failed validation");
                    AppError::from(errors)
                })?;

                Ok(Validated(body))
            })
            .boxed_local()
    }
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App, HttpResponse, Responder,
        http::{StatusCode, header::ContentType},
        test::{self, TestRequest},
        web,
    };
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::*;
    use crate::domain::validation::{is_identifier, is_phone_number};

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
    struct ContactDTO {
        #[validate(custom(function = "is_identifier"))]
        identifier: String,
        #[validate(custom(function = "is_phone_number"))]
        phone_number: String,
    }

    #[derive(Deserialize)]
    struct Error {
        code: u16,
        message: String,
    }

    async fn index(data: Validated<ContactDTO>) -> impl Responder {
        HttpResponse::Ok().json(data.into_inner())
    }

    async fn send_req<T: DeserializeOwned>(data: &str) -> (StatusCode, T) {
        let app = test::init_service(App::new().route("/index", web::post().to(index))).await;

        let res = TestRequest::post()
            .uri("/index")
            .set_payload(data.to_string())
            .insert_header(ContentType::json())
            .send_request(&app)
            .await;

        let status = res.status();
        let body: T = test::read_body_json(res).await;

        (status, body)
    }

    #[actix_web::test]
    async fn test_valid_data() {
        let data = ContactDTO {
            identifier: "9001015009087".to_string(),
            phone_number: "+27821234567".to_string(),
        };

        let (status, body) = send_req::<ContactDTO>(&json!(data).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, data);
    }

    #[actix_web::test]
    async fn test_multiple_invalid_field_values() {
        let (status, err) = send_req::<Error>(
            "{ \"identifier\": \"12 34\", \"phone_number\": \"call me\" }",
        )
        .await;

        let message = serde_json::from_str::<serde_json::Value>(&err.message).unwrap();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code, 422);
        assert_eq!(
            message,
            json!({
                "identifier": "ID Number may only contain letters, digits, dashes and underscores",
                "phone_number": "Phone number must contain between 7 and 15 digits, optionally prefixed with +"
            })
        );
    }

    #[actix_web::test]
    async fn test_missing_field() {
        let (status, err) = send_req::<Error>("{ \"identifier\": \"123\" }").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("missing field `phone_number`"));
    }

    #[actix_web::test]
    async fn test_malformed_data() {
        let (status, err) = send_req::<Error>("{ \"identifier\": }").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(err.message.starts_with("Json deserialize error"));
    }

    #[actix_web::test]
    async fn test_oversized_payload() {
        let identifier = "1".repeat(PAYLOAD_LIMIT);
        let (status, _) = send_req::<Error>(
            &json!({ "identifier": identifier, "phone_number": "0821234567" }).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
