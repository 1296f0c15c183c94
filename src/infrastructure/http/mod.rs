pub mod request_id;

use axum::extract::DefaultBodyLimit;
use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::controllers::files::MAX_FILE_SIZE;
use crate::controllers::{
    audio::AudioController, files::FileController, health, languages,
    localization::LocalizationController, translation::TranslationController,
};
use crate::infrastructure::config::Config;
use self::request_id::request_id_middleware;

/// Build the application router with all routes wired to their controllers.
pub fn build_router(
    translation_controller: Arc<TranslationController>,
    localization_controller: Arc<LocalizationController>,
    file_controller: Arc<FileController>,
    audio_controller: Arc<AudioController>,
) -> Router {
    let translation_routes = Router::new()
        .route("/translate", post(TranslationController::translate))
        .route("/translate-all", post(TranslationController::translate_all))
        .with_state(translation_controller);

    let localization_routes = Router::new()
        .route("/localize", post(LocalizationController::localize))
        .route("/localize-all", post(LocalizationController::localize_all))
        .with_state(localization_controller);

    // File uploads get a higher body limit than the axum default
    let file_routes = Router::new()
        .route("/process-file", post(FileController::process_file))
        .route("/translate-file", post(FileController::translate_file))
        .route("/localize-file", post(FileController::localize_file))
        .with_state(file_controller)
        .layer(DefaultBodyLimit::max(MAX_FILE_SIZE + 64 * 1024));

    let audio_routes = Router::new()
        .route("/audio/:filename", get(AudioController::get_audio))
        .with_state(audio_controller);

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/languages", get(languages::list_languages))
        .merge(translation_routes)
        .merge(localization_routes)
        .merge(file_routes)
        .merge(audio_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve the router until shutdown.
pub async fn start_http_server(
    config: Arc<Config>,
    router: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
