use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::validate::Validated;
use crate::domain::error::AppError;
use crate::domain::models::account::AuthOutcome;
use crate::domain::services::account::AccountService;

use crate::api::dto::account::{AccountDTO, CreateAccountDTO, CredentialsDTO};

use actix_web::{HttpResponse, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(signup).service(login);
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CreateAccountDTO,
    tag = "Account",
)]
#[post("/signup")]
pub async fn signup(
    payload: Validated<CreateAccountDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account_dto = payload.into_inner();

    let created_account = account_service.signup(account_dto.into()).await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(created_account)))
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO, description = "Credentials Accepted"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = CredentialsDTO,
    tag = "Account"
)]
#[post("/login")]
pub async fn login(
    payload: Validated<CredentialsDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let credentials_dto = payload.into_inner();

    match account_service.login(credentials_dto.into()).await? {
        AuthOutcome::Authorized(account) => Ok(HttpResponse::Ok().json(AccountDTO::from(account))),
        AuthOutcome::Denied => Err(AppError::Unauthorized()),
    }
}
