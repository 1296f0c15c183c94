use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::validate_text;
use crate::domain::extraction::{self, FileFormat};
use crate::domain::language::{LanguageCode, TRANSLATION_TARGETS};
use crate::domain::localization::{LocalizationResult, LocalizationService};
use crate::error::{AppError, AppResult};

/// Upload size cap, enough for a ~20k word document.
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct ProcessFileResponse {
    pub filename: String,
    pub format: FileFormat,
    pub extracted_text: String,
    pub char_count: usize,
}

/// The file part plus any `target_lang` fields of a multipart upload.
struct FileUpload {
    filename: String,
    bytes: Vec<u8>,
    target_langs: Vec<String>,
}

pub struct FileController {
    localization_service: Arc<LocalizationService>,
}

impl FileController {
    pub fn new(localization_service: Arc<LocalizationService>) -> Self {
        Self {
            localization_service,
        }
    }

    /// POST /process-file - extract plain text from an uploaded document
    pub async fn process_file(
        State(_controller): State<Arc<FileController>>,
        multipart: Multipart,
    ) -> AppResult<Json<ProcessFileResponse>> {
        let upload = read_upload(multipart).await?;
        let (format, text) = extract_upload(&upload)?;

        Ok(Json(ProcessFileResponse {
            filename: upload.filename,
            format,
            char_count: text.chars().count(),
            extracted_text: text,
        }))
    }

    /// POST /translate-file - extract, then translate into the requested
    /// targets (all 8 when none are given)
    pub async fn translate_file(
        State(controller): State<Arc<FileController>>,
        multipart: Multipart,
    ) -> AppResult<Json<LocalizationResult>> {
        let upload = read_upload(multipart).await?;
        let (_, text) = extract_upload(&upload)?;
        validate_text(&text)?;

        let targets = resolve_targets(&upload.target_langs, false)?;
        let result = controller
            .localization_service
            .translate_many(&text, &targets)
            .await;

        Ok(Json(result))
    }

    /// POST /localize-file - extract, translate, and synthesize audio
    pub async fn localize_file(
        State(controller): State<Arc<FileController>>,
        multipart: Multipart,
    ) -> AppResult<Json<LocalizationResult>> {
        let upload = read_upload(multipart).await?;
        let (_, text) = extract_upload(&upload)?;
        validate_text(&text)?;

        let targets = resolve_targets(&upload.target_langs, true)?;
        let result = controller
            .localization_service
            .localize_many(&text, &targets)
            .await;

        Ok(Json(result))
    }
}

/// Pull the `file` part and any `target_lang` fields out of the body.
async fn read_upload(mut multipart: Multipart) -> AppResult<FileUpload> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut target_langs = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed multipart body: {}", e)))?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| {
                        AppError::BadRequest("file part is missing a filename".to_string())
                    })?
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("unreadable file part: {}", e)))?;
                file = Some((filename, bytes.to_vec()));
            }
            Some("target_lang") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("unreadable field: {}", e)))?;
                for code in value.split(',') {
                    let code = code.trim();
                    if !code.is_empty() {
                        target_langs.push(code.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::BadRequest("missing 'file' part".to_string()))?;

    if bytes.len() > MAX_FILE_SIZE {
        return Err(AppError::PayloadTooLarge(format!(
            "File exceeds the {} MiB limit",
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }

    Ok(FileUpload {
        filename,
        bytes,
        target_langs,
    })
}

fn extract_upload(upload: &FileUpload) -> AppResult<(FileFormat, String)> {
    let format = FileFormat::from_filename(&upload.filename).ok_or_else(|| {
        AppError::from(extraction::ExtractError::UnsupportedFormat(
            upload.filename.clone(),
        ))
    })?;

    let text = extraction::extract(&upload.bytes, format)?;

    tracing::info!(
        filename = %upload.filename,
        format = %format,
        char_count = text.chars().count(),
        "File processed"
    );

    Ok((format, text))
}

/// Resolve requested language codes, defaulting to the full target set.
/// English is only valid when audio is being produced.
fn resolve_targets(codes: &[String], allow_english: bool) -> AppResult<Vec<LanguageCode>> {
    if codes.is_empty() {
        return Ok(TRANSLATION_TARGETS.to_vec());
    }

    let mut targets = Vec::with_capacity(codes.len());
    for code in codes {
        let lang = if allow_english {
            LocalizationService::resolve_speech_language(code)?
        } else {
            LocalizationService::resolve_target(code)?
        };
        if !targets.contains(&lang) {
            targets.push(lang);
        }
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_targets_defaults_to_all_eight() {
        let targets = resolve_targets(&[], false).unwrap();
        assert_eq!(targets.len(), 8);
    }

    #[test]
    fn test_resolve_targets_subset_and_dedup() {
        let codes = vec!["es".to_string(), "fr".to_string(), "es".to_string()];
        let targets = resolve_targets(&codes, false).unwrap();
        assert_eq!(targets, vec![LanguageCode::Spanish, LanguageCode::French]);
    }

    #[test]
    fn test_resolve_targets_rejects_unknown_code() {
        let codes = vec!["es".to_string(), "xx".to_string()];
        assert!(resolve_targets(&codes, false).is_err());
    }

    #[test]
    fn test_resolve_targets_english_only_with_audio() {
        let codes = vec!["en".to_string()];
        assert!(resolve_targets(&codes, false).is_err());
        assert_eq!(
            resolve_targets(&codes, true).unwrap(),
            vec![LanguageCode::English]
        );
    }
}
