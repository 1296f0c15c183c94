use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::validate_text;
use crate::domain::localization::{LanguageResult, LocalizationResult, LocalizationService};
use crate::error::AppResult;

/// Request for POST /localize
#[derive(Debug, Serialize, Deserialize)]
pub struct LocalizeRequest {
    pub text: String,
    pub target_lang: String,
}

/// Request for POST /localize-all
#[derive(Debug, Serialize, Deserialize)]
pub struct LocalizeAllRequest {
    pub text: String,
}

pub struct LocalizationController {
    localization_service: Arc<LocalizationService>,
}

impl LocalizationController {
    pub fn new(localization_service: Arc<LocalizationService>) -> Self {
        Self {
            localization_service,
        }
    }

    /// POST /localize - translate one language, then synthesize audio.
    /// `en` is accepted here: translation is skipped and only audio is made.
    pub async fn localize(
        State(controller): State<Arc<LocalizationController>>,
        Json(request): Json<LocalizeRequest>,
    ) -> AppResult<Json<LanguageResult>> {
        validate_text(&request.text)?;
        let target = LocalizationService::resolve_speech_language(&request.target_lang)?;

        let result = controller
            .localization_service
            .localize(&request.text, target)
            .await?;

        Ok(Json(result))
    }

    /// POST /localize-all - translation + audio for all 8 targets
    pub async fn localize_all(
        State(controller): State<Arc<LocalizationController>>,
        Json(request): Json<LocalizeAllRequest>,
    ) -> AppResult<Json<LocalizationResult>> {
        validate_text(&request.text)?;

        let result = controller
            .localization_service
            .localize_all(&request.text)
            .await;

        Ok(Json(result))
    }
}
