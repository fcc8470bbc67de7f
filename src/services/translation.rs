use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

use crate::domain::gateways::TranslationGateway;
use crate::domain::models::language::Language;
use crate::domain::models::translation::{Label, TranslationBundle};
use crate::domain::services::translation::TranslationService;

use super::with_deadline;

pub struct TranslationServiceImpl {
    gateway: Arc<dyn TranslationGateway>,
    timeout: Duration,
    failures: AtomicU64,
}

impl TranslationServiceImpl {
    pub fn new(gateway: Arc<dyn TranslationGateway>, timeout: Duration) -> Self {
        Self {
            gateway,
            timeout,
            failures: AtomicU64::new(0),
        }
    }

    /// Labels that fell back to English since start-up.
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    async fn translate_label(&self, label: Label, language: Language) -> (Label, String) {
        let source = label.source_text();

        let translated = with_deadline(
            self.timeout,
            self.gateway.translate(source, Language::SOURCE, language),
        )
        .await;

        match translated {
            Ok(text) if !text.trim().is_empty() => (label, text),
            Ok(_) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                warn!(label = label.key(), "empty translation, keeping source text");
                (label, source.to_owned())
            }
            Err(error) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                warn!(label = label.key(), %error, "translation failed, keeping source text");
                (label, source.to_owned())
            }
        }
    }
}

#[async_trait]
impl TranslationService for TranslationServiceImpl {
    #[instrument(skip(self))]
    async fn translate_bundle(&self, language: Language) -> TranslationBundle {
        if language == Language::SOURCE {
            return TranslationBundle::source();
        }

        let texts = join_all(
            Label::ALL
                .into_iter()
                .map(|label| self.translate_label(label, language)),
        )
        .await;

        TranslationBundle::assemble(language, texts)
    }
}

/// Tracks the language picked on a signup form and keeps the bundle of the
/// latest pick, discarding bundles of picks that were superseded while they
/// were still being translated.
pub struct LanguageSelection {
    service: Arc<dyn TranslationService>,
    generation: AtomicU64,
    current: watch::Sender<Option<TranslationBundle>>,
}

impl LanguageSelection {
    pub fn new(service: Arc<dyn TranslationService>) -> Self {
        Self {
            service,
            generation: AtomicU64::new(0),
            current: watch::Sender::new(None),
        }
    }

    /// Returns `None` when another selection started before this one finished.
    pub async fn select(&self, language: Language) -> Option<TranslationBundle> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let bundle = self.service.translate_bundle(language).await;

        // Checked under the watch lock so a stale bundle cannot land after a newer one.
        let published = self.current.send_if_modified(|current| {
            if self.generation.load(Ordering::SeqCst) != ticket {
                return false;
            }
            *current = Some(bundle.clone());
            true
        });

        if !published {
            debug!(%language, "discarding superseded translation bundle");
            return None;
        }

        Some(bundle)
    }

    pub fn current(&self) -> Option<TranslationBundle> {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<TranslationBundle>> {
        self.current.subscribe()
    }
}
