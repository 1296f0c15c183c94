use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use hablai_backend::controllers::{
    audio::AudioController, files::FileController, localization::LocalizationController,
    translation::TranslationController,
};
use hablai_backend::domain::language::LanguageCode;
use hablai_backend::domain::localization::LocalizationService;
use hablai_backend::infrastructure::http::build_router;
use hablai_backend::infrastructure::repositories::{TranslationRepository, TtsRepository};
use hablai_backend::infrastructure::storage::AudioStore;

struct FakeTranslator {
    fail_for: Option<LanguageCode>,
}

#[async_trait]
impl TranslationRepository for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: LanguageCode,
        target: LanguageCode,
    ) -> Result<String, String> {
        if self.fail_for == Some(target) {
            return Err("provider timeout".to_string());
        }
        Ok(format!("{} [{}]", text, target))
    }
}

struct FakeTts;

#[async_trait]
impl TtsRepository for FakeTts {
    async fn synthesize(&self, _text: &str, _language: LanguageCode) -> Result<Vec<u8>, String> {
        Ok(vec![0xFF, 0xFB, 0x90, 0x00])
    }
}

fn test_app(fail_for: Option<LanguageCode>) -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let audio_store = Arc::new(AudioStore::new(dir.path().to_path_buf()));

    let service = Arc::new(LocalizationService::new(
        Arc::new(FakeTranslator { fail_for }),
        Arc::new(FakeTts),
        audio_store.clone(),
    ));

    let router = build_router(
        Arc::new(TranslationController::new(service.clone())),
        Arc::new(LocalizationController::new(service.clone())),
        Arc::new(FileController::new(service)),
        Arc::new(AudioController::new(audio_store)),
    );

    (router, dir)
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

const BOUNDARY: &str = "test-boundary-42";

fn post_multipart(uri: &str, filename: &str, content: &[u8], target_langs: &[&str]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
            BOUNDARY, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    for lang in target_langs {
        body.extend_from_slice(
            format!(
                "\r\n--{}\r\nContent-Disposition: form-data; name=\"target_lang\"\r\n\r\n{}",
                BOUNDARY, lang
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn it_should_report_healthy() {
    let (app, _dir) = test_app(None);
    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("x-request-id").is_some());

    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn it_should_expose_service_metadata_at_root() {
    let (app, _dir) = test_app(None);
    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["service"], "hablai-backend");
    assert_eq!(body["status"], "running");
}

#[tokio::test]
async fn it_should_list_eight_targets_plus_audio_only_english() {
    let (app, _dir) = test_app(None);
    let response = app.oneshot(get("/languages")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    let languages = body["target_languages"].as_array().unwrap();
    assert_eq!(languages.len(), 9);

    let english: Vec<&Value> = languages
        .iter()
        .filter(|l| l["code"] == "en")
        .collect();
    assert_eq!(english.len(), 1);
    assert_eq!(english[0]["audio_only"], true);

    let targets = languages.iter().filter(|l| l["audio_only"] == false).count();
    assert_eq!(targets, 8);
}

#[tokio::test]
async fn it_should_translate_into_a_single_language() {
    let (app, _dir) = test_app(None);
    let response = app
        .oneshot(post_json(
            "/translate",
            json!({"text": "Hello world", "target_lang": "es"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["translated_text"], "Hello world [es]");
    assert_eq!(body["source_language"], "en");
    assert_eq!(body["target_language"], "es");
}

#[tokio::test]
async fn it_should_reject_unknown_target_language() {
    let (app, _dir) = test_app(None);
    let response = app
        .oneshot(post_json(
            "/translate",
            json!({"text": "Hello", "target_lang": "xx"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["message"].as_str().unwrap().contains("xx"));
}

#[tokio::test]
async fn it_should_reject_english_as_translation_target() {
    let (app, _dir) = test_app(None);
    let response = app
        .oneshot(post_json(
            "/translate",
            json!({"text": "Hello", "target_lang": "en"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn it_should_reject_empty_text() {
    let (app, _dir) = test_app(None);
    let response = app
        .oneshot(post_json(
            "/translate",
            json!({"text": "   ", "target_lang": "es"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn it_should_reject_oversize_text() {
    let (app, _dir) = test_app(None);
    let response = app
        .oneshot(post_json(
            "/translate",
            json!({"text": "a".repeat(20_001), "target_lang": "es"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn it_should_surface_provider_failures_as_bad_gateway() {
    let (app, _dir) = test_app(Some(LanguageCode::Spanish));
    let response = app
        .oneshot(post_json(
            "/translate",
            json!({"text": "Hello", "target_lang": "es"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn it_should_translate_into_all_eight_languages() {
    let (app, _dir) = test_app(None);
    let response = app
        .oneshot(post_json("/translate-all", json!({"text": "Good morning"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 8);
    assert_eq!(body["succeeded"], 8);
    assert!(results.iter().all(|r| r["language"] != "en"));
    // Text-only operation: no audio fields anywhere
    assert!(results.iter().all(|r| r.get("audio_file").is_none()));
}

#[tokio::test]
async fn it_should_record_partial_failures_per_language() {
    let (app, _dir) = test_app(Some(LanguageCode::Korean));
    let response = app
        .oneshot(post_json("/translate-all", json!({"text": "Good morning"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["succeeded"], 7);
    assert_eq!(body["failed"], 1);

    let korean = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["language"] == "ko")
        .unwrap();
    assert_eq!(korean["status"], "failed");
    assert!(korean["error"].as_str().unwrap().contains("timeout"));
}

#[tokio::test]
async fn it_should_localize_and_serve_the_audio_artifact() {
    let (app, _dir) = test_app(None);
    let response = app
        .clone()
        .oneshot(post_json(
            "/localize",
            json!({"text": "Hello", "target_lang": "fr"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["translated_text"], "Hello [fr]");

    let audio_url = body["audio_url"].as_str().unwrap().to_string();
    assert!(audio_url.starts_with("/audio/audio_fr_"));

    let audio_response = app.oneshot(get(&audio_url)).await.unwrap();
    assert_eq!(audio_response.status(), StatusCode::OK);
    assert_eq!(
        audio_response.headers().get(header::CONTENT_TYPE).unwrap(),
        "audio/mpeg"
    );
}

#[tokio::test]
async fn it_should_localize_all_with_audio_per_language() {
    let (app, _dir) = test_app(None);
    let response = app
        .oneshot(post_json("/localize-all", json!({"text": "Good morning"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 8);
    for result in results {
        assert_ne!(result["language"], "en");
        assert_eq!(result["status"], "success");
        assert!(result["translated_text"].as_str().unwrap().len() > 0);
        assert!(result["audio_file"].as_str().unwrap().ends_with(".mp3"));
    }
}

#[tokio::test]
async fn it_should_return_404_for_missing_audio() {
    let (app, _dir) = test_app(None);
    let response = app
        .oneshot(get("/audio/audio_es_never_made.mp3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_extract_text_from_an_uploaded_file() {
    let (app, _dir) = test_app(None);
    let response = app
        .oneshot(post_multipart(
            "/process-file",
            "greeting.txt",
            b"Hello from a file.",
            &[],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["filename"], "greeting.txt");
    assert_eq!(body["format"], "txt");
    assert_eq!(body["extracted_text"], "Hello from a file.");
}

#[tokio::test]
async fn it_should_count_extracted_characters_not_bytes() {
    let (app, _dir) = test_app(None);
    // 11 characters, 13 bytes in UTF-8
    let response = app
        .oneshot(post_multipart(
            "/process-file",
            "accents.txt",
            "H\u{e9}llo w\u{f6}rld".as_bytes(),
            &[],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["char_count"], 11);
}

#[tokio::test]
async fn it_should_reject_unsupported_file_formats_without_parsing() {
    let (app, _dir) = test_app(None);
    let response = app
        .oneshot(post_multipart("/process-file", "image.png", b"\x89PNG", &[]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("unsupported file format"));
}

#[tokio::test]
async fn it_should_reject_empty_files_of_supported_formats() {
    let (app, _dir) = test_app(None);
    let response = app
        .oneshot(post_multipart("/process-file", "empty.txt", b"", &[]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn it_should_translate_a_file_into_the_requested_subset() {
    let (app, _dir) = test_app(None);
    let response = app
        .oneshot(post_multipart(
            "/translate-file",
            "greeting.txt",
            b"Hello from a file.",
            &["es", "ja"],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    let codes: Vec<&str> = results
        .iter()
        .map(|r| r["language"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["es", "ja"]);
}

#[tokio::test]
async fn it_should_localize_a_file_into_all_targets_by_default() {
    let (app, _dir) = test_app(None);
    let response = app
        .oneshot(post_multipart(
            "/localize-file",
            "greeting.txt",
            b"Hello from a file.",
            &[],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["results"].as_array().unwrap().len(), 8);
    assert_eq!(body["succeeded"], 8);
}

#[tokio::test]
async fn it_should_require_a_file_part() {
    let (app, _dir) = test_app(None);

    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"target_lang\"\r\n\r\nes\r\n--{b}--\r\n",
        b = BOUNDARY
    );
    let request = Request::builder()
        .method("POST")
        .uri("/process-file")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
