#[derive(Debug, thiserror::Error)]
pub enum LocalizationError {
    #[error("unsupported target language: {0}")]
    UnsupportedLanguage(String),
    #[error("translation provider error: {0}")]
    TranslationProvider(String),
    #[error("text-to-speech provider error: {0}")]
    TtsProvider(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
