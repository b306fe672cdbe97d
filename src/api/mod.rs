//! HTTP API for the splitting service.

pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use handlers::AppState;

/// Build the service routes.
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/strategies", get(handlers::list_strategies))
        .route("/split", post(handlers::split_items))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::types::SplitterConfig;

    fn app() -> Router {
        routes(Arc::new(AppState::new(SplitterConfig::default())))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_split(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/split")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], json!("healthy"));
    }

    #[tokio::test]
    async fn test_strategies() {
        let request = Request::builder().uri("/strategies").body(Body::empty()).unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 4);
        assert_eq!(body[0]["name"], json!("bySection"));
    }

    #[tokio::test]
    async fn test_split_with_overrides() {
        let body = json!({
            "items": [{"job_id": "R1", "title": "A", "description": "B"}],
            "options": {
                "strategy": "bySection",
                "preserveContext": false,
                "metadataFields": ["job_id"],
            }
        });
        let (status, body) = send(app(), post_split(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stats"]["total_chunks"], json!(2));
        let records = body["records"].as_array().unwrap();
        assert_eq!(records[0]["content"], json!("Job Title: A"));
        assert_eq!(records[0]["metadata"]["job_id"], json!("R1"));
        assert_eq!(records[0]["original_job_id"], json!("R1"));
        assert_eq!(records[1]["metadata"]["total_chunks"], json!(2));
    }

    #[tokio::test]
    async fn test_unknown_strategy_is_unprocessable() {
        let body = json!({
            "items": [{"title": "A"}, {"title": "B"}],
            "options": {"strategy": "byParagraph"},
        });
        let (status, body) = send(app(), post_split(body)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["item_index"], json!(0));
        assert_eq!(
            body["error"],
            json!("Error processing item 0: Unknown splitting strategy: byParagraph")
        );
    }

    #[tokio::test]
    async fn test_invalid_options_rejected() {
        let body = json!({"items": [], "options": {"maxChunkSize": "big"}});
        let (status, body) = send(app(), post_split(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.get("item_index").is_none());
    }
}
