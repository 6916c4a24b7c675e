pub mod config;
pub mod errors;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::Config;
pub use crate::errors::{ApiError, ApiResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post}
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health_handler))
        .route("/metrics", get(routes::metrics_handler))
        .route(
            "/notes",
            post(routes::create_note_handler).get(routes::list_notes_handler)
        )
        .route("/notes/{id}", delete(routes::delete_note_handler))
        .route("/summary", get(routes::summary_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
