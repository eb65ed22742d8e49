use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("encode body")))
        .expect("request builds")
}

#[tokio::test]
async fn query_route_analyses_symptoms() {
    let response = router()
        .oneshot(post_json(
            "/api/chatbot/query",
            json!({ "message": "I feel anxious and have dry skin" }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["type"], "analysis");
    assert_eq!(body["data"]["imbalance"], "Vata");
}

#[tokio::test]
async fn query_route_rejects_empty_message() {
    let response = router()
        .oneshot(post_json("/api/chatbot/query", json!({ "message": "  " })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "Message cannot be empty");
}

#[tokio::test]
async fn query_route_rejects_missing_message() {
    let response = router()
        .oneshot(post_json("/api/chatbot/query", json!({ "text": "hi" })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn query_route_scores_quiz_submissions() {
    let response = router()
        .oneshot(post_json(
            "/api/chatbot/query",
            json!({
                "message": "QUIZ_SUBMISSION",
                "context": { "answers": [[0, 1], [1, 1], [2, 1]] }
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["data"]["imbalance"], "Pitta");
    assert!(body["data"].get("symptoms_detected").is_none());
}

#[tokio::test]
async fn quiz_route_rejects_out_of_range_answers() {
    let response = router()
        .oneshot(post_json(
            "/api/chatbot/quiz",
            json!({ "answers": [[0, 0], [99999, 0]] }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("position 1"));
    assert!(message.contains("99999"));
}

#[tokio::test]
async fn quiz_route_returns_analysis() {
    let response = router()
        .oneshot(post_json(
            "/api/chatbot/quiz",
            json!({ "answers": [[0, 2], [4, 2]] }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["type"], "analysis");
    assert_eq!(body["data"]["scores"], json!({ "Vata": 0, "Pitta": 0, "Kapha": 4 }));
}

#[tokio::test]
async fn questions_route_lists_catalog_without_weights() {
    let response = router()
        .oneshot(
            Request::get("/api/chatbot/questions")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let questions = body["questions"].as_array().expect("questions array");
    assert_eq!(questions.len(), engine().catalog().len());
    assert!(questions[0]["question"].is_string());
    assert!(questions[0]["options"][0].is_string());
    assert!(questions[0].get("weights").is_none());
}
