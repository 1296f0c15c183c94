use serde::{Deserialize, Serialize};

/// ISO 639-1 language codes known to the localization system.
///
/// English is the fixed source language and is valid for speech synthesis
/// only; the remaining 8 codes are the translation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "zh-CN")]
    Chinese,
    #[serde(rename = "ko")]
    Korean,
}

/// The fixed set of translation targets, in listing order.
pub const TRANSLATION_TARGETS: [LanguageCode; 8] = [
    LanguageCode::Spanish,
    LanguageCode::French,
    LanguageCode::German,
    LanguageCode::Italian,
    LanguageCode::Portuguese,
    LanguageCode::Japanese,
    LanguageCode::Chinese,
    LanguageCode::Korean,
];

impl LanguageCode {
    /// Get the ISO 639-1 code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::Spanish => "es",
            LanguageCode::French => "fr",
            LanguageCode::German => "de",
            LanguageCode::Italian => "it",
            LanguageCode::Portuguese => "pt",
            LanguageCode::Japanese => "ja",
            LanguageCode::Chinese => "zh-CN",
            LanguageCode::Korean => "ko",
        }
    }

    /// Human-readable language name for listings
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageCode::English => "English (US)",
            LanguageCode::Spanish => "Spanish",
            LanguageCode::French => "French",
            LanguageCode::German => "German",
            LanguageCode::Italian => "Italian",
            LanguageCode::Portuguese => "Portuguese",
            LanguageCode::Japanese => "Japanese",
            LanguageCode::Chinese => "Chinese",
            LanguageCode::Korean => "Korean",
        }
    }

    /// Parse a language code string. Case-sensitive except for the
    /// region suffix of `zh-CN`, which clients commonly lowercase.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(LanguageCode::English),
            "es" => Some(LanguageCode::Spanish),
            "fr" => Some(LanguageCode::French),
            "de" => Some(LanguageCode::German),
            "it" => Some(LanguageCode::Italian),
            "pt" => Some(LanguageCode::Portuguese),
            "ja" => Some(LanguageCode::Japanese),
            "zh-CN" | "zh-cn" => Some(LanguageCode::Chinese),
            "ko" => Some(LanguageCode::Korean),
            _ => None,
        }
    }

    /// Whether this code is a valid translation target.
    /// English is the source language and is audio-only.
    pub fn is_translation_target(&self) -> bool {
        !matches!(self, LanguageCode::English)
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
