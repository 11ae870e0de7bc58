use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;

#[derive(Deserialize)]
pub struct TrackEventRequest {
    category: String,
    action: String,
    #[serde(default)]
    label: String,
}

/// Fire-and-forget analytics passthrough for page-side events the backend
/// does not otherwise see (anchor navigation and the like).
pub async fn track_event(
    State(state): State<Arc<AppState>>,
    Json(event): Json<TrackEventRequest>,
) -> Json<serde_json::Value> {
    state
        .sink
        .record(&event.category, &event.action, &event.label);
    Json(json!({"status": "ok"}))
}
