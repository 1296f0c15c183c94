use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
};
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::infrastructure::storage::AudioStore;

pub struct AudioController {
    audio_store: Arc<AudioStore>,
}

impl AudioController {
    pub fn new(audio_store: Arc<AudioStore>) -> Self {
        Self { audio_store }
    }

    /// GET /audio/:filename - stream a previously generated artifact
    pub async fn get_audio(
        State(controller): State<Arc<AudioController>>,
        Path(filename): Path<String>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let audio = controller
            .audio_store
            .load(&filename)
            .await
            .ok_or_else(|| AppError::NotFound(format!("audio file '{}'", filename)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            "audio/mpeg".parse().expect("static header value"),
        );

        Ok((StatusCode::OK, headers, Body::from(audio)))
    }
}
