//! HTTP surface of the offline fallback path.

pub mod ocr;
pub mod quiz;

use axum::{extract::State, routing::get, routing::post, Json, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
  Json(serde_json::json!({
    "status": "ok",
    "ocr_available": state.ocr_available(),
  }))
}

/// Build the application router
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/health", get(health))
    .route("/api/ocr/extract", post(ocr::extract_text))
    .route("/api/quiz/distractors", post(quiz::distractors))
    .route("/api/quiz/grade", post(quiz::grade))
    .route("/api/quiz/prepare", post(quiz::prepare))
    .route("/api/quiz/answer", post(quiz::answer))
    .route("/api/quiz/score", post(quiz::score))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
