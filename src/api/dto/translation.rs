use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::models::language::Language;
use crate::domain::models::translation::TranslationBundle;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationBundleDTO {
    language: Language,
    #[schema(examples("Registrarse"))]
    sign_up: String,
    name: String,
    surname: String,
    phone_number: String,
    id_number: String,
    password: String,
    next: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LanguageDTO {
    code: Language,
    #[schema(examples("Spanish"))]
    name: &'static str,
}

impl From<TranslationBundle> for TranslationBundleDTO {
    fn from(bundle: TranslationBundle) -> Self {
        TranslationBundleDTO {
            language: bundle.language,
            sign_up: bundle.sign_up,
            name: bundle.name,
            surname: bundle.surname,
            phone_number: bundle.phone_number,
            id_number: bundle.id_number,
            password: bundle.password,
            next: bundle.next,
        }
    }
}

impl From<Language> for LanguageDTO {
    fn from(language: Language) -> Self {
        LanguageDTO {
            code: language,
            name: language.display_name(),
        }
    }
}
