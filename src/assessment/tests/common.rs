use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::{
    assessment_router, AdviceTable, AssessmentEngine, QuizAnswer, QuizCatalog, QuizOption,
    QuizQuestion, ScoreVector, SymptomLexicon,
};

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::standard().expect("standard tables are valid")
}

/// Three-question catalog where each option leans fully towards one dosha.
pub(super) fn three_question_catalog() -> QuizCatalog {
    let options = || {
        vec![
            QuizOption::new("airy", ScoreVector::new(2, 0, 0)),
            QuizOption::new("fiery", ScoreVector::new(0, 2, 0)),
            QuizOption::new("earthy", ScoreVector::new(0, 0, 2)),
        ]
    };
    QuizCatalog::new(vec![
        QuizQuestion::new("First?", options()),
        QuizQuestion::new("Second?", options()),
        QuizQuestion::new("Third?", options()),
    ])
    .expect("catalog is valid")
}

pub(super) fn three_question_engine() -> AssessmentEngine {
    AssessmentEngine::new(
        SymptomLexicon::standard(),
        three_question_catalog(),
        AdviceTable::standard().expect("standard advice is valid"),
    )
}

pub(super) fn answers(pairs: &[(usize, usize)]) -> Vec<QuizAnswer> {
    pairs.iter().copied().map(QuizAnswer::from).collect()
}

pub(super) fn router() -> axum::Router {
    assessment_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
