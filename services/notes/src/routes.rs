use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response
};
use serde::Deserialize;
use std::sync::Arc;

use notes_core::Note;
use summarizer::service::FALLBACK_SUFFIX;

use crate::errors::ApiResult;
use crate::state::AppState;
use crate::telemetry::Telemetry;

pub const NO_NOTES_AVAILABLE: &str = "No notes available.";

#[derive(Debug, Deserialize)]
pub struct NoteIn {
    pub content: String
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: usize,

    #[serde(default = "default_limit")]
    pub limit: usize
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    100
}

#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    #[serde(default)]
    pub use_openai: bool
}

pub async fn create_note_handler(
    State(state): State<Arc<AppState>>,
    Json(note_in): Json<NoteIn>
) -> (StatusCode, Json<Note>) {
    Telemetry::record_request("create");
    let note = state.store.add(note_in.content).await;
    (StatusCode::CREATED, Json(note))
}

pub async fn list_notes_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>
) -> Json<Vec<Note>> {
    Telemetry::record_request("list");
    Json(state.store.list(params.page, params.limit).await)
}

pub async fn delete_note_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>
) -> ApiResult<Json<serde_json::Value>> {
    Telemetry::record_request("delete");
    state.store.delete(&id).await?;
    Ok(Json(serde_json::json!({ "message": "deleted" })))
}

pub async fn summary_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryParams>
) -> Json<serde_json::Value> {
    Telemetry::record_request("summary");

    if state.store.is_empty().await {
        return Json(serde_json::json!({ "summary": NO_NOTES_AVAILABLE }));
    }

    let combined = state.store.combined_content().await;
    let summary = state.summaries.summarize(&combined, params.use_openai).await;
    if params.use_openai && summary.ends_with(FALLBACK_SUFFIX) {
        Telemetry::record_summary_fallback();
    }

    Json(serde_json::json!({ "summary": summary }))
}

pub async fn health_handler(State(_state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "checks": {
            "store": "ok"
        }
    }))
}

pub async fn metrics_handler() -> Response<String> {
    let metrics_text = r#"# HELP notes_requests_total Total notes API requests
# TYPE notes_requests_total counter
notes_requests_total 0

# HELP notes_summary_fallbacks_total Summaries degraded to the local path
# TYPE notes_summary_fallbacks_total counter
notes_summary_fallbacks_total 0
"#;

    Response::builder()
        .header("Content-Type", "text/plain")
        .body(metrics_text.to_string())
        .unwrap()
}
