use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hablai_backend::controllers::{
    audio::AudioController, files::FileController, localization::LocalizationController,
    translation::TranslationController,
};
use hablai_backend::domain::localization::LocalizationService;
use hablai_backend::infrastructure::config::{Config, LogFormat};
use hablai_backend::infrastructure::http::{build_router, start_http_server};
use hablai_backend::infrastructure::repositories::{
    GoogleTranslateRepository, PollyTtsRepository,
};
use hablai_backend::infrastructure::storage::AudioStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Habl.AI backend on {}:{}",
        config.host,
        config.port
    );

    // Prepare the audio output directory
    let audio_store = Arc::new(AudioStore::new(config.output_audio_dir.clone()));
    audio_store.ensure_dir().await?;
    tracing::info!(dir = %audio_store.dir().display(), "Audio output directory ready");

    // Create AWS Polly client
    tracing::info!(region = %config.aws_region, "Initializing AWS Polly client");
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;
    let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));

    // HTTP client for the translation provider
    let http_client = reqwest::Client::new();

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate provider repositories
    tracing::info!("Instantiating provider repositories...");
    let translation_repo = Arc::new(GoogleTranslateRepository::new(
        http_client,
        config.translate_api_base.clone(),
    ));
    let tts_repo = Arc::new(PollyTtsRepository::new(polly_client));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let localization_service = Arc::new(LocalizationService::new(
        translation_repo,
        tts_repo,
        audio_store.clone(),
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let translation_controller =
        Arc::new(TranslationController::new(localization_service.clone()));
    let localization_controller =
        Arc::new(LocalizationController::new(localization_service.clone()));
    let file_controller = Arc::new(FileController::new(localization_service));
    let audio_controller = Arc::new(AudioController::new(audio_store));

    // Start HTTP server with all routes
    let router = build_router(
        translation_controller,
        localization_controller,
        file_controller,
        audio_controller,
    );
    start_http_server(config, router).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "hablai_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "hablai_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
