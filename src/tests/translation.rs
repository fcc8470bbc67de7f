use actix_web::http::StatusCode;
use rstest::*;
use serde::Deserialize;

use crate::tests::{Error, TestContext, context};

use crate::app;
use actix_web::test;
use actix_web::test::TestRequest;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Bundle {
    language: String,
    sign_up: String,
    name: String,
    surname: String,
    phone_number: String,
    id_number: String,
    password: String,
    next: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Language {
    code: String,
    name: String,
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_list_languages(#[future] context: TestContext) {
    let app = test::init_service(app::create(
        Arc::clone(&context.container),
        context.config.server.clone(),
    ))
    .await;

    let res = TestRequest::get()
        .uri("/api/v1/languages")
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));

    let languages: Vec<Language> = test::read_body_json(res).await;
    let codes: Vec<&str> = languages.iter().map(|l| l.code.as_str()).collect();

    assert_eq!(codes, ["en", "es", "fr", "de", "zh"]);
    assert_eq!(languages[0].name, "English");
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_translate_signup_form(#[future] context: TestContext) {
    let app = test::init_service(app::create(
        Arc::clone(&context.container),
        context.config.server.clone(),
    ))
    .await;

    let res = TestRequest::get()
        .uri("/api/v1/translations/de")
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let bundle: Bundle = test::read_body_json(res).await;

    assert_eq!(bundle.language, "de");
    assert_eq!(bundle.sign_up, "de:Sign Up");
    assert_eq!(bundle.name, "de:Name");
    assert_eq!(bundle.surname, "de:Surname");
    assert_eq!(bundle.phone_number, "de:Phone Number");
    assert_eq!(bundle.id_number, "de:ID Number");
    assert_eq!(bundle.password, "de:Password");
    assert_eq!(bundle.next, "de:Next");
    assert_eq!(context.translations.calls(), 7);
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_english_needs_no_translation(#[future] context: TestContext) {
    let app = test::init_service(app::create(
        Arc::clone(&context.container),
        context.config.server.clone(),
    ))
    .await;

    let res = TestRequest::get()
        .uri("/api/v1/translations/EN")
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let bundle: Bundle = test::read_body_json(res).await;

    assert_eq!(bundle.language, "en");
    assert_eq!(bundle.sign_up, "Sign Up");
    assert_eq!(context.translations.calls(), 0);
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_unsupported_language(#[future] context: TestContext) {
    let app = test::init_service(app::create(
        Arc::clone(&context.container),
        context.config.server.clone(),
    ))
    .await;

    let res = TestRequest::get()
        .uri("/api/v1/translations/pt")
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let err: Error = test::read_body_json(res).await;

    assert_eq!(err.code, 400);
    assert_eq!(err.message, "Unsupported language code: pt");
}
