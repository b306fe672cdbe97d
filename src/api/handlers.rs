//! HTTP request handlers for the splitting service.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::batch::{BatchOutput, BatchProcessor};
use crate::router::SplitterRouter;
use crate::types::SplitterConfig;

/// Application state shared across handlers.
pub struct AppState {
    pub router: Arc<SplitterRouter>,
    pub config: SplitterConfig,
}

impl AppState {
    /// Create state with the given service defaults.
    pub fn new(config: SplitterConfig) -> Self {
        Self {
            router: Arc::new(SplitterRouter::new()),
            config,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Available strategy.
#[derive(Debug, Serialize)]
pub struct StrategyInfo {
    name: String,
    description: String,
}

/// List available strategies.
pub async fn list_strategies(State(state): State<Arc<AppState>>) -> Json<Vec<StrategyInfo>> {
    let strategies = state
        .router
        .list_splitters()
        .into_iter()
        .map(|(name, desc)| StrategyInfo {
            name: name.to_string(),
            description: desc.to_string(),
        })
        .collect();

    Json(strategies)
}

/// Request to split a batch of input items.
#[derive(Debug, Deserialize)]
pub struct SplitRequest {
    /// Host items: job objects, job lists, or `{ "jobs": [...] }`
    pub items: Vec<Value>,

    /// Option overrides applied over the service defaults
    #[serde(default)]
    pub options: Option<Value>,
}

/// Error body returned when a request cannot be processed.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    item_index: Option<usize>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Merge request overrides over the service defaults.
fn resolve_config(defaults: &SplitterConfig, options: Option<Value>) -> Result<SplitterConfig, ApiError> {
    let Some(options) = options else {
        return Ok(defaults.clone());
    };

    let invalid = |message: String| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: message,
                item_index: None,
            }),
        )
    };

    let Value::Object(overrides) = options else {
        return Err(invalid("options must be an object".to_string()));
    };

    let mut merged = serde_json::to_value(defaults).map_err(|e| invalid(e.to_string()))?;
    if let Value::Object(base) = &mut merged {
        base.extend(overrides);
    }

    serde_json::from_value(merged).map_err(|e| invalid(format!("invalid options: {}", e)))
}

/// Split a batch of items into chunk records.
pub async fn split_items(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SplitRequest>,
) -> Result<Json<BatchOutput>, ApiError> {
    let config = resolve_config(&state.config, request.options)?;

    info!(
        items = request.items.len(),
        strategy = %config.strategy,
        "Received split request"
    );

    let processor = BatchProcessor::new(Arc::clone(&state.router), config);
    processor.process_items(&request.items).map(Json).map_err(|e| {
        warn!(error = %e, "Split request failed");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: e.to_string(),
                item_index: e.item_index(),
            }),
        )
    })
}
