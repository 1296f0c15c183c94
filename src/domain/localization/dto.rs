use serde::{Deserialize, Serialize};

use crate::domain::language::LanguageCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Success,
    Failed,
}

/// Per-language outcome of a translation or localization request.
///
/// Exactly one of these exists per requested target language; a failed
/// language carries its error detail instead of aborting the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageResult {
    pub language: LanguageCode,
    pub status: ResultStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LanguageResult {
    pub fn translated(language: LanguageCode, text: String) -> Self {
        Self {
            language,
            status: ResultStatus::Success,
            translated_text: Some(text),
            audio_file: None,
            audio_url: None,
            error: None,
        }
    }

    pub fn localized(language: LanguageCode, text: String, audio_file: String) -> Self {
        let audio_url = format!("/audio/{}", audio_file);
        Self {
            language,
            status: ResultStatus::Success,
            translated_text: Some(text),
            audio_file: Some(audio_file),
            audio_url: Some(audio_url),
            error: None,
        }
    }

    pub fn failed(language: LanguageCode, error: String) -> Self {
        Self {
            language,
            status: ResultStatus::Failed,
            translated_text: None,
            audio_file: None,
            audio_url: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResultStatus::Success
    }
}

/// Aggregate outcome of a multi-language fan-out, one entry per requested
/// target language regardless of individual failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizationResult {
    pub source_text: String,
    pub source_language: LanguageCode,
    pub results: Vec<LanguageResult>,
    pub requested: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl LocalizationResult {
    pub fn new(source_text: String, results: Vec<LanguageResult>) -> Self {
        let requested = results.len();
        let succeeded = results.iter().filter(|r| r.is_success()).count();
        Self {
            source_text,
            source_language: LanguageCode::English,
            requested,
            succeeded,
            failed: requested - succeeded,
            results,
        }
    }
}
