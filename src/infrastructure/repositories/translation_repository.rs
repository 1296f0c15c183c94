use crate::domain::language::LanguageCode;
use async_trait::async_trait;

/// Repository for machine translation operations.
/// Abstracts the underlying provider (Google Translate, DeepL, etc.)
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Splitting long text into chunks and rejoining translations in order
/// - Single-call semantics: no caching, no retry loop
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate text between two languages.
    ///
    /// # Errors
    /// Returns the provider failure (timeout, quota, malformed input) as a
    /// message with the original cause attached.
    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<String, String>;
}
