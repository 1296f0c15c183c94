#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to extract text: {0}")]
    Parse(String),
}
