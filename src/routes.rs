use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::{health_check, speak_handler, translate_handler};
use crate::observability::request_id_middleware;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/translate", post(translate_handler))
        .route("/speak", post(speak_handler))
        .route("/api/health", get(health_check))
}

/// Full application: routes, request ids, tracing and the open CORS policy
pub fn build_app(state: AppState) -> Router {
    // Credentialed CORS must mirror the caller's origin instead of sending `*`
    let cors = if state.config.system_config.cors_allow_credentials {
        CorsLayer::very_permissive()
    } else {
        CorsLayer::permissive()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    create_routes()
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
