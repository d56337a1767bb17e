use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use study_cards::config::AppConfig;
use study_cards::handlers;
use study_cards::ocr::{TesseractRecognizer, TextExtractor};
use study_cards::state::AppState;

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "study_cards=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = AppConfig::load();

  // Without a backend the service still answers quiz requests;
  // extraction requests fail fast instead of returning empty text
  let extractor = match TesseractRecognizer::init(&config.ocr).await {
    Ok(recognizer) => Some(TextExtractor::new(Arc::new(recognizer), config.merge)),
    Err(e) => {
      tracing::warn!("Offline text extraction disabled: {}", e);
      None
    }
  };

  let app = handlers::router(AppState::new(extractor, config.quiz.language));

  let bind_addr = config.server.bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://{}", bind_addr);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
