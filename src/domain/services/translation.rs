use async_trait::async_trait;

use crate::domain::models::{language::Language, translation::TranslationBundle};

#[async_trait]
pub trait TranslationService: 'static + Sync + Send {
    /// Never fails: labels that cannot be translated keep their English text.
    async fn translate_bundle(&self, language: Language) -> TranslationBundle;
}
