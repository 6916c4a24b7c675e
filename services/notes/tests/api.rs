use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode}
};
use tower::ServiceExt;

use notes_service::{AppState, create_router};
use store::NoteStore;
use summarizer::{MockProvider, SummaryService};

fn app() -> Router {
    create_router(Arc::new(AppState::local_only()))
}

fn app_with_failing_provider() -> Router {
    let state = AppState {
        store: Arc::new(NoteStore::new()),
        summaries: Arc::new(SummaryService::new(Some(Arc::new(MockProvider::failing()))))
    };
    create_router(Arc::new(state))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn post_note(content: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/notes")
        .header("content-type", "application/json")
        .body(Body::from(format!(r#"{{"content": "{content}"}}"#)))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let response = app().oneshot(get("/metrics")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("notes_requests_total"));
}

#[tokio::test]
async fn test_create_note_returns_201_with_id() {
    let response = app().oneshot(post_note("buy milk")).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["content"], "buy milk");
    assert!(!json["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_then_list_round_trip() {
    let app = app();

    let created = app.clone().oneshot(post_note("first")).await.unwrap();
    let created_json = body_json(created).await;

    let response = app.oneshot(get("/notes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let notes = json.as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["id"], created_json["id"]);
    assert_eq!(notes[0]["content"], "first");
}

#[tokio::test]
async fn test_list_pagination() {
    let app = app();

    let a = body_json(app.clone().oneshot(post_note("note A")).await.unwrap()).await;
    let b = body_json(app.clone().oneshot(post_note("note B")).await.unwrap()).await;

    let page1 = body_json(app.clone().oneshot(get("/notes?page=1&limit=1")).await.unwrap()).await;
    assert_eq!(page1.as_array().unwrap().len(), 1);
    assert_eq!(page1[0]["id"], a["id"]);

    let page2 = body_json(app.clone().oneshot(get("/notes?page=2&limit=1")).await.unwrap()).await;
    assert_eq!(page2.as_array().unwrap().len(), 1);
    assert_eq!(page2[0]["id"], b["id"]);

    let past_end = body_json(app.oneshot(get("/notes?page=9&limit=50")).await.unwrap()).await;
    assert!(past_end.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_note_then_404_on_second_delete() {
    let app = app();

    let created = body_json(app.clone().oneshot(post_note("short lived")).await.unwrap()).await;
    let id = created["id"].as_str().unwrap().to_string();

    let delete_req = |id: &str| {
        Request::builder()
            .method("DELETE")
            .uri(format!("/notes/{id}"))
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete_req(&id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "deleted");

    let listing = body_json(app.clone().oneshot(get("/notes")).await.unwrap()).await;
    assert!(listing.as_array().unwrap().is_empty());

    let response = app.oneshot(delete_req(&id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Note not found");
}

#[tokio::test]
async fn test_summary_of_empty_store() {
    let response = app().oneshot(get("/summary")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["summary"], "No notes available.");
}

#[tokio::test]
async fn test_summary_local_path() {
    let app = app();

    app.clone()
        .oneshot(post_note("Rust ships safe systems code."))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_note("Rust tooling keeps improving."))
        .await
        .unwrap();

    let response = app.oneshot(get("/summary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let summary = json["summary"].as_str().unwrap();
    assert!(!summary.is_empty());
    assert!(summary.contains("Rust"));
}

#[tokio::test]
async fn test_summary_falls_back_when_provider_fails() {
    let app = app_with_failing_provider();

    app.clone()
        .oneshot(post_note("The provider will fail today."))
        .await
        .unwrap();

    let response = app.oneshot(get("/summary?use_openai=true")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let summary = json["summary"].as_str().unwrap();
    assert!(summary.ends_with("(external summarizer failed)"));
    assert!(summary.contains("provider will fail"));
}
