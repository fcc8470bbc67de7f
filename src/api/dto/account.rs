use crate::domain::models::account::{Account, Credentials, SignupRequest};
use crate::domain::models::language::Language;
use crate::domain::validation::{is_identifier, is_name, is_password, is_phone_number};
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    identifier: String,
    name: String,
    surname: String,
    phone_number: Option<String>,
    preferred_language: Language,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateAccountDTO {
    #[validate(custom(function = "is_identifier"))]
    #[schema(examples("9001015009087"))]
    pub identifier: String,

    #[validate(custom(function = "is_name"))]
    #[schema(examples("Thandi"))]
    pub name: String,

    #[validate(custom(
        function = "is_name",
        message = "Surname must contain between 1 and 100 characters"
    ))]
    #[schema(examples("Mokoena"))]
    pub surname: String,

    #[serde(default)]
    #[validate(custom(function = "is_blank_or_phone_number"))]
    #[schema(examples("+27821234567"))]
    pub phone_number: Option<String>,

    #[validate(custom(function = "is_password"))]
    #[schema(examples("p4ssw0rd"))]
    pub password: String,

    #[serde(default)]
    #[validate(required(message = "Preferred language is required"))]
    pub preferred_language: Option<Language>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CredentialsDTO {
    #[schema(examples("9001015009087"))]
    pub identifier: String,

    #[schema(examples("p4ssw0rd"))]
    pub password: String,
}

/// The signup form submits an empty string when no phone number was typed.
fn is_blank_or_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    if phone_number.trim().is_empty() {
        return Ok(());
    }

    is_phone_number(phone_number)
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            identifier: val.identifier,
            name: val.name,
            surname: val.surname,
            phone_number: val.phone_number,
            preferred_language: val.preferred_language,
        }
    }
}

impl From<CreateAccountDTO> for SignupRequest {
    fn from(create_account: CreateAccountDTO) -> Self {
        SignupRequest {
            identifier: create_account.identifier,
            name: create_account.name.trim().to_owned(),
            surname: create_account.surname.trim().to_owned(),
            phone_number: create_account
                .phone_number
                .map(|phone_number| phone_number.trim().to_owned())
                .filter(|phone_number| !phone_number.is_empty()),
            password: create_account.password,
            preferred_language: create_account.preferred_language,
        }
    }
}

impl From<CredentialsDTO> for Credentials {
    fn from(credentials: CredentialsDTO) -> Self {
        Credentials {
            identifier: credentials.identifier.trim().to_owned(),
            password: credentials.password,
        }
    }
}
