pub mod extraction;
pub mod language;
pub mod localization;
