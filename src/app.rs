use actix_web::{
    App, HttpMessage,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::header::{self, HeaderName, HeaderValue},
    middleware::{Next, from_fn},
    web,
};

use tracing_actix_web::{RequestId, TracingLogger};

use actix_cors::Cors;

use utoipa::openapi::{OpenApi, Server, tag::Tag};
use utoipa_actix_web::AppExt;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::config::ServerConfig;
use crate::container::Container;

use std::sync::Arc;

const REQUEST_ID: &str = "x-request-id";

pub fn create(
    container: Arc<Container>,
    server: ServerConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    App::new()
        .into_utoipa_app()
        .openapi(docs(&server))
        .configure(api::routes)
        .openapi_service(|api| {
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", api)
        })
        .into_app()
        .wrap(TracingLogger::default())
        .wrap(cors(&server.allowed_origins))
        .wrap(from_fn(echo_request_id))
        .app_data(web::Data::new(Arc::clone(&container.account_service)))
        .app_data(web::Data::new(Arc::clone(&container.translation_service)))
}

/// The signup form is served from a different origin than the API.
fn cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(&[header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers([REQUEST_ID])
        .block_on_origin_mismatch(false)
        .max_age(3600)
}

async fn echo_request_id(
    req: ServiceRequest,
    svc: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let request_id = req.extensions().get::<RequestId>().copied();
    let mut res = svc.call(req).await?;

    if let Some(request_id) = request_id {
        res.headers_mut().insert(
            HeaderName::from_static(REQUEST_ID),
            HeaderValue::from_str(&request_id.to_string())?,
        );
    }
    Ok(res)
}

pub fn docs(server: &ServerConfig) -> OpenApi {
    let mut openapi = OpenApi::default();

    openapi.info.title = String::from("Onboard API");
    openapi.info.description = Some(String::from(
        "Account signup and login, plus translated labels for the signup form",
    ));
    openapi.info.version = String::from(env!("CARGO_PKG_VERSION"));

    openapi.servers = Some(vec![
        Server::builder()
            .url(format!("http://{}:{}", server.host, server.port))
            .description(Some("Configured listener"))
            .build(),
    ]);

    openapi.tags = Some(vec![
        Tag::builder()
            .name("Account")
            .description(Some("Signup and credential checks"))
            .build(),
        Tag::builder()
            .name("Translation")
            .description(Some("Signup form labels per language"))
            .build(),
    ]);

    openapi
}
