pub mod chunking;
pub mod google_translate_repository;
pub mod polly_tts_repository;
pub mod translation_repository;
pub mod tts_repository;

pub use google_translate_repository::GoogleTranslateRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use translation_repository::TranslationRepository;
pub use tts_repository::TtsRepository;
