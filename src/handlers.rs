use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

use crate::error::PipelineError;
use crate::pipeline::types::{TranslationRequest, TranslationResult};
use crate::state::AppState;

/// HTTP face of a [`PipelineError`]: 400 for caller mistakes, 502 for backends
pub struct ApiError(pub PipelineError);

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::BAD_REQUEST
        };
        warn!("Request failed with {}: {}", status, self.0);
        (status, Json(json!({"detail": self.0.to_string()}))).into_response()
    }
}

pub async fn translate_handler(
    State(state): State<AppState>,
    Json(payload): Json<TranslationRequest>,
) -> Result<Json<TranslationResult>, ApiError> {
    let result = state.pipeline.translate(&payload).await?;
    Ok(Json(result))
}

pub async fn speak_handler(
    State(state): State<AppState>,
    Json(payload): Json<TranslationRequest>,
) -> Result<Response, ApiError> {
    let artifact = state.pipeline.speak(&payload).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, artifact.mime_type.to_string()),
            (header::CONTENT_DISPOSITION, artifact.content_disposition()),
        ],
        artifact.bytes,
    )
        .into_response())
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "translate_provider": state.pipeline.translate_provider(),
        "tts_model": state.pipeline.tts_model(),
    }))
}
