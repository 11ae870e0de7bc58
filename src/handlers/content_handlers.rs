use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::json;

use crate::AppState;

/// Display strings for the page's dynamic content slots (price and venue).
pub async fn get_content(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let display = state.settings.display.clone();
    Json(json!({
        "price": display.price,
        "price_note": display.price_note,
        "location": display.location,
        "location_note": display.location_note,
    }))
}
