use super::chunking::split_on_sentences;
use super::translation_repository::TranslationRepository;
use crate::domain::language::LanguageCode;
use async_trait::async_trait;

/// Google Translate rejects requests above roughly 5000 characters;
/// stay under it with headroom for URL encoding overhead.
const MAX_CHUNK_SIZE: usize = 4500;

/// Google Translate implementation of the translation repository,
/// using the unauthenticated `translate_a/single` web endpoint.
pub struct GoogleTranslateRepository {
    http_client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslateRepository {
    pub fn new(http_client: reqwest::Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Call the provider for a single chunk.
    async fn call_provider(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<String, String> {
        let url = format!("{}/translate_a/single", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source.as_str()),
                ("tl", target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| format!("translation request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("translation provider returned HTTP {}", status));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| format!("unreadable translation response: {}", e))?;

        Self::parse_response(&body)
    }

    /// The gtx endpoint answers with a positional JSON array; element 0 is
    /// the list of translated segments, each segment's element 0 the text.
    fn parse_response(body: &serde_json::Value) -> Result<String, String> {
        let segments = body
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| "malformed translation response: missing segment list".to_string())?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
                translated.push_str(part);
            }
        }

        if translated.is_empty() {
            return Err("malformed translation response: no translated text".to_string());
        }

        Ok(translated)
    }
}

#[async_trait]
impl TranslationRepository for GoogleTranslateRepository {
    async fn translate(
        &self,
        text: &str,
        source: LanguageCode,
        target: LanguageCode,
    ) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        let chunks = split_on_sentences(text, MAX_CHUNK_SIZE);
        if chunks.len() > 1 {
            tracing::info!(
                chunk_count = chunks.len(),
                text_length = text.len(),
                target = %target,
                "Long text split into translation chunks"
            );
        }

        let mut translated_chunks = Vec::with_capacity(chunks.len());
        for (index, chunk) in chunks.iter().enumerate() {
            tracing::debug!(
                chunk_index = index,
                chunk_size = chunk.len(),
                target = %target,
                "Translating chunk"
            );
            let translated = self.call_provider(chunk, source, target).await?;
            translated_chunks.push(translated);
        }

        let full_translation = translated_chunks.join("\n\n");

        tracing::info!(
            provider = "google_translate",
            source = %source,
            target = %target,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            chunk_count = chunks.len(),
            "Translation completed"
        );

        Ok(full_translation)
    }
}
