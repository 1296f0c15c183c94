use std::sync::Arc;

use anyhow::Context;
use futures::future::join_all;

use super::dto::{LanguageResult, LocalizationResult};
use super::error::LocalizationError;
use crate::domain::language::{LanguageCode, TRANSLATION_TARGETS};
use crate::infrastructure::repositories::{TranslationRepository, TtsRepository};
use crate::infrastructure::storage::AudioStore;

/// Orchestrates translation and speech synthesis across target languages.
///
/// Each target language is processed independently; a provider failure for
/// one language is captured in that language's result and never aborts the
/// rest of the batch.
pub struct LocalizationService {
    translation_repo: Arc<dyn TranslationRepository>,
    tts_repo: Arc<dyn TtsRepository>,
    audio_store: Arc<AudioStore>,
}

impl LocalizationService {
    pub fn new(
        translation_repo: Arc<dyn TranslationRepository>,
        tts_repo: Arc<dyn TtsRepository>,
        audio_store: Arc<AudioStore>,
    ) -> Self {
        Self {
            translation_repo,
            tts_repo,
            audio_store,
        }
    }

    /// Resolve a client-supplied code into a translation target.
    /// English is the fixed source language and is rejected here.
    pub fn resolve_target(code: &str) -> Result<LanguageCode, LocalizationError> {
        match LanguageCode::from_code(code) {
            Some(lang) if lang.is_translation_target() => Ok(lang),
            _ => Err(LocalizationError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// Resolve a code for localization. English is accepted here for
    /// audio-only output; unknown codes are still rejected.
    pub fn resolve_speech_language(code: &str) -> Result<LanguageCode, LocalizationError> {
        LanguageCode::from_code(code)
            .ok_or_else(|| LocalizationError::UnsupportedLanguage(code.to_string()))
    }

    /// Translate English text into a single target language.
    pub async fn translate(
        &self,
        text: &str,
        target: LanguageCode,
    ) -> Result<String, LocalizationError> {
        // English to English needs no provider round trip.
        if target == LanguageCode::English {
            return Ok(text.to_string());
        }

        self.translation_repo
            .translate(text, LanguageCode::English, target)
            .await
            .map_err(LocalizationError::TranslationProvider)
    }

    /// Translate and then synthesize speech for the translated text,
    /// persisting the audio artifact.
    pub async fn localize(
        &self,
        text: &str,
        target: LanguageCode,
    ) -> Result<LanguageResult, LocalizationError> {
        let translated = self.translate(text, target).await?;

        let audio = self
            .tts_repo
            .synthesize(&translated, target)
            .await
            .map_err(LocalizationError::TtsProvider)?;

        let filename = self
            .audio_store
            .save(target, &audio)
            .await
            .context("failed to store audio artifact")?;

        tracing::info!(
            language = %target,
            audio_file = %filename,
            audio_size = audio.len(),
            "Localization completed"
        );

        Ok(LanguageResult::localized(target, translated, filename))
    }

    /// Single-language translation with the failure captured in the result.
    pub async fn translate_one(&self, text: &str, target: LanguageCode) -> LanguageResult {
        match self.translate(text, target).await {
            Ok(translated) => LanguageResult::translated(target, translated),
            Err(e) => {
                tracing::warn!(language = %target, error = %e, "Translation failed");
                LanguageResult::failed(target, e.to_string())
            }
        }
    }

    /// Single-language localization with the failure captured in the result.
    pub async fn localize_one(&self, text: &str, target: LanguageCode) -> LanguageResult {
        match self.localize(text, target).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(language = %target, error = %e, "Localization failed");
                LanguageResult::failed(target, e.to_string())
            }
        }
    }

    /// Fan out translation across the requested targets concurrently.
    /// The aggregate always holds one result per requested language.
    pub async fn translate_many(
        &self,
        text: &str,
        targets: &[LanguageCode],
    ) -> LocalizationResult {
        let tasks = targets.iter().map(|&target| self.translate_one(text, target));
        let results = join_all(tasks).await;
        LocalizationResult::new(text.to_string(), results)
    }

    /// Fan out localization across the requested targets concurrently.
    pub async fn localize_many(
        &self,
        text: &str,
        targets: &[LanguageCode],
    ) -> LocalizationResult {
        let tasks = targets.iter().map(|&target| self.localize_one(text, target));
        let results = join_all(tasks).await;
        LocalizationResult::new(text.to_string(), results)
    }

    /// Translate into every supported target language.
    pub async fn translate_all(&self, text: &str) -> LocalizationResult {
        self.translate_many(text, &TRANSLATION_TARGETS).await
    }

    /// Localize into every supported target language.
    pub async fn localize_all(&self, text: &str) -> LocalizationResult {
        self.localize_many(text, &TRANSLATION_TARGETS).await
    }
}
