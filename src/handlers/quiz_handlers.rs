use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::json;

use crate::quiz::engine;
use crate::AppState;

/// The question list the page renders. Correct indices and explanations
/// stay server-side; the page learns them one answer at a time.
pub async fn get_quiz(State(_state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let questions: Vec<serde_json::Value> = engine::questions()
        .iter()
        .enumerate()
        .map(|(i, q)| {
            json!({
                "index": i,
                "question": q.question,
                "answers": q.answers,
                "progress": engine::progress_percent(i),
            })
        })
        .collect();

    Json(json!({
        "total": engine::question_count(),
        "questions": questions,
    }))
}

#[derive(Deserialize)]
pub struct StartQuizRequest {
    #[serde(default)]
    restart: bool,
}

pub async fn start_quiz(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StartQuizRequest>,
) -> Json<serde_json::Value> {
    if req.restart {
        state.sink.record("Quiz", "Restart", "Quiz Restarted");
    } else {
        state.sink.record("Quiz", "Start", "Quiz Started");
    }

    Json(json!({
        "question": 0,
        "progress": engine::progress_percent(0),
        "total": engine::question_count(),
    }))
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    question: usize,
    answer: usize,
}

pub async fn answer_question(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let outcome = match engine::check_answer(req.question, req.answer) {
        Some(outcome) => outcome,
        None => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Question or answer index out of range"})),
            ))
        }
    };

    state.sink.record(
        "Quiz",
        "Answer",
        &format!(
            "Q{}: {}",
            req.question + 1,
            if outcome.correct { "Correct" } else { "Incorrect" }
        ),
    );

    Ok(Json(json!({
        "correct": outcome.correct,
        "explanation": outcome.explanation,
        "correct_index": outcome.correct_index,
        "last": outcome.last,
        "progress": engine::progress_percent(req.question + 1),
    })))
}

#[derive(Deserialize)]
pub struct QuizResultRequest {
    score: usize,
}

pub async fn quiz_result(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuizResultRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let total = engine::question_count();
    if req.score > total {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": format!("Score cannot exceed {}", total)})),
        ));
    }

    let tier = engine::grade(req.score);
    state
        .sink
        .record("Quiz", "Complete", &format!("Score: {}/{}", req.score, total));

    Ok(Json(json!({
        "score": format!("{} / {}", req.score, total),
        "icon": tier.icon,
        "title": tier.title,
        "text": tier.text,
    })))
}
