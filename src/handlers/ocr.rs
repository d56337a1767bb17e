//! Offline text extraction endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::OcrError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// Page captures in order, as base64 or `data:` URLs
    pub images: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub text: String,
    /// True when nothing was recognized; the client should suggest better lighting
    pub empty: bool,
}

/// Decode a base64 payload, accepting an optional `data:<mime>;base64,` prefix
pub fn decode_image(payload: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let data = match payload.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => payload,
    };
    STANDARD.decode(data.trim())
}

fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// Merge the text of several page captures.
///
/// POST /api/ocr/extract
pub async fn extract_text(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> impl IntoResponse {
    let Some(extractor) = state.extractor.clone() else {
        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Offline text recognition is not available on this server.".to_string(),
        );
    };

    let mut images = Vec::with_capacity(request.images.len());
    for (index, payload) in request.images.iter().enumerate() {
        match decode_image(payload) {
            Ok(bytes) => images.push(bytes),
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Image {} is not valid base64: {}", index + 1, e),
                );
            }
        }
    }

    match extractor.merge_all(&images).await {
        Ok(text) => {
            let empty = text.is_empty();
            (StatusCode::OK, Json(ExtractResponse { text, empty })).into_response()
        }
        Err(e @ OcrError::BackendUnavailable(_)) => {
            tracing::warn!("Text extraction failed: {}", e);
            error_response(StatusCode::SERVICE_UNAVAILABLE, e.to_string())
        }
        Err(e) => {
            tracing::warn!("Text extraction failed: {}", e);
            error_response(StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}
