use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::validate_text;
use crate::domain::language::LanguageCode;
use crate::domain::localization::{LocalizationResult, LocalizationService};
use crate::error::AppResult;

/// Request for POST /translate
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: String,
}

/// Request for POST /translate-all
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateAllRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub source_text: String,
    pub source_language: LanguageCode,
    pub translated_text: String,
    pub target_language: LanguageCode,
}

pub struct TranslationController {
    localization_service: Arc<LocalizationService>,
}

impl TranslationController {
    pub fn new(localization_service: Arc<LocalizationService>) -> Self {
        Self {
            localization_service,
        }
    }

    /// POST /translate - translate text into a single target language
    pub async fn translate(
        State(controller): State<Arc<TranslationController>>,
        Json(request): Json<TranslateRequest>,
    ) -> AppResult<Json<TranslateResponse>> {
        validate_text(&request.text)?;
        let target = LocalizationService::resolve_target(&request.target_lang)?;

        let translated_text = controller
            .localization_service
            .translate(&request.text, target)
            .await?;

        Ok(Json(TranslateResponse {
            source_text: request.text,
            source_language: LanguageCode::English,
            translated_text,
            target_language: target,
        }))
    }

    /// POST /translate-all - fan out translation across all 8 targets
    pub async fn translate_all(
        State(controller): State<Arc<TranslationController>>,
        Json(request): Json<TranslateAllRequest>,
    ) -> AppResult<Json<LocalizationResult>> {
        validate_text(&request.text)?;

        let result = controller
            .localization_service
            .translate_all(&request.text)
            .await;

        Ok(Json(result))
    }
}
