use super::chunking::split_on_sentences;
use super::tts_repository::TtsRepository;
use crate::domain::language::LanguageCode;
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly has a limit of 3000 characters per request
const MAX_BATCH_SIZE: usize = 3000;

/// AWS Polly implementation of TTS repository
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }

    /// Select the neural Polly voice for a language
    fn get_voice_for_language(language: LanguageCode) -> &'static str {
        match language {
            LanguageCode::English => "Joanna",
            LanguageCode::Spanish => "Lupe",
            LanguageCode::French => "Lea",
            LanguageCode::German => "Vicki",
            LanguageCode::Italian => "Bianca",
            LanguageCode::Portuguese => "Ines",
            LanguageCode::Japanese => "Takumi",
            LanguageCode::Chinese => "Zhiyu",
            LanguageCode::Korean => "Seoyeon",
        }
    }

    /// Call AWS Polly to synthesize a single text batch
    async fn call_polly(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        let voice_name = Self::get_voice_for_language(language);
        let voice_id = VoiceId::from(voice_name);

        tracing::debug!(
            language = %language,
            voice = voice_name,
            text_length = text.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .polly_client
            .synthesize_speech()
            .text(text)
            .voice_id(voice_id)
            .output_format(OutputFormat::Mp3)
            .engine(Engine::Neural)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    language = %language,
                    voice = voice_name,
                    text_length = text.len(),
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {:?}", e)
            })?;

        let audio_stream = result
            .audio_stream
            .collect()
            .await
            .map_err(|e| format!("failed to read audio stream: {}", e))?;

        Ok(audio_stream.into_bytes().to_vec())
    }

    /// Synthesize batches and merge the audio results in order
    async fn synthesize_batches(
        &self,
        batches: &[String],
        language: LanguageCode,
    ) -> Result<Vec<u8>, String> {
        let mut merged_audio = Vec::new();

        for (index, batch) in batches.iter().enumerate() {
            tracing::debug!(batch_index = index, batch_size = batch.len(), "Synthesizing batch");
            let audio_data = self.call_polly(batch, language).await?;
            merged_audio.extend(audio_data);
        }

        Ok(merged_audio)
    }
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    async fn synthesize(&self, text: &str, language: LanguageCode) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let batches = split_on_sentences(text, MAX_BATCH_SIZE);
        let audio_data = self.synthesize_batches(&batches, language).await?;

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "polly",
            language = %language,
            latency_ms = duration.as_millis(),
            characters_count = text.len(),
            batch_count = batches.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
