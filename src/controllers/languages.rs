use axum::{response::IntoResponse, Json};
use serde::Serialize;

use crate::domain::language::{LanguageCode, TRANSLATION_TARGETS};

#[derive(Debug, Serialize)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub audio_only: bool,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub source_language: &'static str,
    pub source_language_name: &'static str,
    pub target_languages: Vec<LanguageEntry>,
    pub total_languages: usize,
}

/// GET /languages - the fixed supported-language set.
/// English appears flagged audio-only; it is never a translation target.
pub async fn list_languages() -> impl IntoResponse {
    let mut target_languages: Vec<LanguageEntry> = TRANSLATION_TARGETS
        .iter()
        .map(|lang| LanguageEntry {
            code: lang.as_str(),
            name: lang.display_name(),
            audio_only: false,
        })
        .collect();

    target_languages.push(LanguageEntry {
        code: LanguageCode::English.as_str(),
        name: LanguageCode::English.display_name(),
        audio_only: true,
    });

    let total = target_languages.len();
    Json(LanguagesResponse {
        source_language: LanguageCode::English.as_str(),
        source_language_name: LanguageCode::English.display_name(),
        target_languages,
        total_languages: total,
    })
}
