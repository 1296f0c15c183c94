pub mod dto;
pub mod error;
pub mod service;

pub use dto::{LanguageResult, LocalizationResult, ResultStatus};
pub use error::LocalizationError;
pub use service::LocalizationService;

/// Upper bound on submitted or extracted text, in characters.
pub const MAX_TEXT_LENGTH: usize = 20_000;
