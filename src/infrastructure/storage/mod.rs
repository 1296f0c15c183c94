use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::domain::language::LanguageCode;

/// Local-disk store for generated audio artifacts.
///
/// Artifacts outlive the request that produced them; cleanup is an external
/// concern. Filenames are generated here and are the only names `load`
/// will ever resolve.
pub struct AudioStore {
    dir: PathBuf,
}

impl AudioStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the output directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Persist an audio artifact, returning its generated filename.
    pub async fn save(&self, language: LanguageCode, audio: &[u8]) -> std::io::Result<String> {
        let timestamp = Utc::now().format("%Y%m%d_%H%M%S%3f");
        let filename = format!("audio_{}_{}.mp3", language, timestamp);

        tokio::fs::write(self.dir.join(&filename), audio).await?;

        tracing::debug!(
            filename = %filename,
            size_bytes = audio.len(),
            "Audio artifact stored"
        );

        Ok(filename)
    }

    /// Load a previously generated artifact. Returns `None` for unknown
    /// filenames and for anything that is not a bare generated name.
    pub async fn load(&self, filename: &str) -> Option<Vec<u8>> {
        if !Self::is_valid_name(filename) {
            tracing::warn!(filename = %filename, "Rejected audio filename");
            return None;
        }

        tokio::fs::read(self.dir.join(filename)).await.ok()
    }

    /// Generated names contain no path separators; anything else is a
    /// traversal attempt.
    fn is_valid_name(filename: &str) -> bool {
        !filename.is_empty()
            && !filename.contains('/')
            && !filename.contains('\\')
            && !filename.contains("..")
    }
}
