use std::sync::Arc;

use crate::api::dto::translation::{LanguageDTO, TranslationBundleDTO};
use crate::api::error::ApiResult;
use crate::domain::error::AppError;
use crate::domain::models::language::Language;
use crate::domain::services::translation::TranslationService;

use actix_web::{
    HttpResponse, get,
    web::{Data as State, Path},
};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(languages).service(translations);
}

#[utoipa::path(
    responses(
        (status = 200, body = Vec<LanguageDTO>, description = "Selectable languages"),
    ),
    tag = "Translation",
)]
#[get("/languages")]
pub async fn languages() -> ApiResult {
    let languages: Vec<LanguageDTO> = Language::ALL.into_iter().map(LanguageDTO::from).collect();

    Ok(HttpResponse::Ok().json(languages))
}

#[utoipa::path(
    params(("language" = String, Path, description = "Target language code", example = "es")),
    responses(
        (status = 200, body = TranslationBundleDTO, description = "Signup labels in the target language"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
    ),
    tag = "Translation",
)]
#[get("/translations/{language}")]
pub async fn translations(
    language: Path<String>,
    translation_service: State<Arc<dyn TranslationService>>,
) -> ApiResult {
    let language = language
        .into_inner()
        .parse::<Language>()
        .map_err(AppError::BadRequest)?;

    let bundle = translation_service.translate_bundle(language).await;

    Ok(HttpResponse::Ok().json(TranslationBundleDTO::from(bundle)))
}
