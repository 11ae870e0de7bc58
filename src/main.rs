use anyhow::Context;
use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use std::sync::Arc;

mod handlers {
    pub mod lead_handlers;
    pub mod content_handlers;
    pub mod event_handlers;
    pub mod quiz_handlers;
}
mod api {
    pub mod telegram;
    pub mod sheets;
}
mod models {
    pub mod lead_models;
}
mod pipeline {
    pub mod analytics;
    pub mod dispatch;
    pub mod fallback;
    pub mod feedback;
    pub mod submission;
    pub mod validator;
}
mod quiz {
    pub mod engine;
}
mod config {
    pub mod settings;
}

use config::settings::Settings;
use handlers::{content_handlers, event_handlers, lead_handlers, quiz_handlers};
use pipeline::analytics::{EventSink, TracingSink};
use pipeline::dispatch::DispatchCoordinator;
use pipeline::fallback::FallbackLog;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    settings: Arc<Settings>,
    dispatcher: DispatchCoordinator,
    fallback: FallbackLog,
    sink: Arc<dyn EventSink>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let settings = Arc::new(Settings::from_env());
    if settings.telegram.is_none() {
        tracing::warn!("Telegram credentials missing or placeholder; channel will be skipped");
    }
    if settings.sheets.is_none() {
        tracing::warn!("Sheets webhook URL missing or placeholder; channel will be skipped");
    }

    let http = reqwest::Client::new();
    let state = Arc::new(AppState {
        dispatcher: DispatchCoordinator::from_settings(&settings, http),
        fallback: FallbackLog::new(settings.fallback_path.clone()),
        sink: Arc::new(TracingSink),
        settings: settings.clone(),
    });

    let app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/leads", post(lead_handlers::submit_lead))
        .route(
            "/api/leads/validate-field",
            post(lead_handlers::validate_field),
        )
        .route("/api/content", get(content_handlers::get_content))
        .route("/api/events", post(event_handlers::track_event))
        .route("/api/quiz", get(quiz_handlers::get_quiz))
        .route("/api/quiz/start", post(quiz_handlers::start_quiz))
        .route("/api/quiz/answer", post(quiz_handlers::answer_question))
        .route("/api/quiz/result", post(quiz_handlers::quiz_result))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_origin(Any) // the landing page is served from a static host; restrict in production
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    tracing::info!("listening on {}", settings.bind_addr);
    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;

    Ok(())
}
