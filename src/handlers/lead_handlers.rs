use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::json;

use crate::models::lead_models::{RawLead, SubmissionOutcome};
use crate::pipeline::feedback::{MessageKind, PresentationPort};
use crate::pipeline::{submission, validator};
use crate::AppState;

/// Port implementation backing the pipeline's presentation calls with the
/// JSON verdict the landing page renders verbatim.
#[derive(Default)]
struct ResponsePresentation {
    kind: Option<MessageKind>,
    message: String,
    clear_form: bool,
    auto_hide_ms: Option<u64>,
}

impl PresentationPort for ResponsePresentation {
    fn set_message(&mut self, kind: MessageKind, text: &str, auto_hide: Option<Duration>) {
        self.kind = Some(kind);
        self.message = text.to_string();
        self.auto_hide_ms = auto_hide.map(|d| d.as_millis() as u64);
    }

    fn clear_form(&mut self) {
        self.clear_form = true;
    }

    fn set_submit_enabled(&mut self, _enabled: bool) {
        // The page disables its own submit button for the in-flight request;
        // nothing to carry in the response.
    }
}

pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    Json(raw): Json<RawLead>,
) -> Json<serde_json::Value> {
    let mut port = ResponsePresentation::default();

    let outcome = submission::process(
        &state.dispatcher,
        &state.fallback,
        state.sink.as_ref(),
        &mut port,
        raw,
    )
    .await;

    let status = match outcome {
        SubmissionOutcome::Rejected(_) => "rejected",
        SubmissionOutcome::Delivered => "delivered",
        SubmissionOutcome::SavedLocally => "saved",
        SubmissionOutcome::DispatchFailed => "error",
    };
    let kind = match port.kind {
        Some(MessageKind::Success) => "success",
        _ => "error",
    };

    Json(json!({
        "status": status,
        "kind": kind,
        "message": port.message,
        "clear_form": port.clear_form,
        "auto_hide_ms": port.auto_hide_ms,
    }))
}

#[derive(Deserialize)]
pub struct FieldCheckRequest {
    field: String,
    #[serde(default)]
    value: String,
}

/// On-blur live check for one input. Advisory: drives the page's invalid
/// marker, never blocks submission. Phone values come back normalized the
/// way the page's input formatter rewrites them.
pub async fn validate_field(
    Json(req): Json<FieldCheckRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let field = match validator::FormField::parse(&req.field) {
        Some(field) => field,
        None => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({"error": format!("Unknown form field: {}", req.field)})),
            ))
        }
    };

    let valid = validator::validate_field(field, &req.value);
    let normalized = match field {
        validator::FormField::Phone => Some(validator::normalize_phone(&req.value)),
        _ => None,
    };

    Ok(Json(json!({
        "valid": valid,
        "normalized": normalized,
    })))
}
