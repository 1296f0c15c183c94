pub mod audio;
pub mod files;
pub mod health;
pub mod languages;
pub mod localization;
pub mod translation;

use crate::domain::localization::MAX_TEXT_LENGTH;
use crate::error::{AppError, AppResult};

/// Shared request-body validation for every text-accepting endpoint.
pub(crate) fn validate_text(text: &str) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(AppError::BadRequest("Text cannot be empty".to_string()));
    }
    // The limit is in characters, not bytes; CJK input is multibyte
    let char_count = text.chars().count();
    if char_count > MAX_TEXT_LENGTH {
        return Err(AppError::PayloadTooLarge(format!(
            "Text must be {} characters or less, got {}",
            MAX_TEXT_LENGTH, char_count
        )));
    }
    Ok(())
}
