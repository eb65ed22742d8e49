use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use super::conversation::{ChatError, ChatRequest, Conversation, QuizPayload};
use super::domain::QuizAnswer;
use super::{AssessmentEngine, AssessmentError};

/// Body accepted by the dedicated quiz endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<QuizAnswer>,
}

/// Router builder exposing the chatbot endpoints.
pub fn assessment_router(engine: Arc<AssessmentEngine>) -> Router {
    Router::new()
        .route("/api/chatbot/query", post(query_handler))
        .route("/api/chatbot/quiz", post(quiz_handler))
        .route("/api/chatbot/questions", get(questions_handler))
        .with_state(engine)
}

pub(crate) async fn query_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    match Conversation::new(&engine).respond(&request) {
        Ok(reply) => {
            debug!(kind = reply.kind(), "chat reply ready");
            (StatusCode::OK, Json(reply)).into_response()
        }
        Err(ChatError::EmptyMessage) => error_response(
            StatusCode::BAD_REQUEST,
            ChatError::EmptyMessage.to_string(),
        ),
        Err(ChatError::Assessment(error)) => assessment_error_response(error),
    }
}

pub(crate) async fn quiz_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    payload: Result<Json<QuizSubmission>, JsonRejection>,
) -> Response {
    let Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    match Conversation::new(&engine).submit_quiz(&submission.answers) {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(error) => assessment_error_response(error),
    }
}

pub(crate) async fn questions_handler(
    State(engine): State<Arc<AssessmentEngine>>,
) -> Json<QuizPayload> {
    Json(QuizPayload {
        questions: engine.questions(),
    })
}

fn assessment_error_response(error: AssessmentError) -> Response {
    match error {
        AssessmentError::InvalidAnswer { .. } => {
            warn!(%error, "rejected quiz submission");
            error_response(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
        }
        AssessmentError::Configuration(_) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}

fn rejection_response(rejection: JsonRejection) -> Response {
    debug!(%rejection, "malformed chatbot payload");
    error_response(StatusCode::BAD_REQUEST, rejection.body_text())
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
