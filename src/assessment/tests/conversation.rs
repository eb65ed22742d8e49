use super::common::*;
use crate::assessment::conversation::QuickOption;
use crate::assessment::{
    AssessmentError, ChatContext, ChatError, ChatReply, ChatRequest, Conversation, Dosha,
};

#[test]
fn symptom_text_produces_analysis() {
    let engine = engine();
    let reply = Conversation::new(&engine)
        .respond(&ChatRequest::text("I feel anxious and have dry skin"))
        .expect("reply");

    assert_eq!(reply.kind(), "analysis");
    assert_eq!(
        reply.response(),
        "Based on your symptoms, I detect a potential **Vata** imbalance."
    );
    let assessment = reply.assessment().expect("analysis data");
    assert_eq!(assessment.imbalance, Dosha::Vata);
    assert!(assessment.symptoms_detected.is_some());
}

#[test]
fn option_one_starts_the_quiz() {
    let engine = engine();
    let reply = Conversation::new(&engine)
        .respond(&ChatRequest::text(" 1 "))
        .expect("reply");

    match reply {
        ChatReply::Quiz { data, .. } => assert_eq!(data.questions, engine.questions()),
        other => panic!("expected quiz reply, got {other:?}"),
    }
}

#[test]
fn other_quick_options_return_tips() {
    let engine = engine();
    let conversation = Conversation::new(&engine);
    for option in ["2", "3", "4", "5", "6"] {
        let reply = conversation
            .respond(&ChatRequest::text(option))
            .expect("reply");
        let Some(QuickOption::Tip(tip)) = QuickOption::parse(option) else {
            panic!("option {option} should be a tip");
        };
        assert_eq!(reply.kind(), "text");
        assert_eq!(reply.response(), tip);
    }
    assert_eq!(QuickOption::parse("7"), None);
}

#[test]
fn greetings_and_farewells_are_case_insensitive() {
    let engine = engine();
    let conversation = Conversation::new(&engine);

    let greeting = conversation
        .respond(&ChatRequest::text("Namaste"))
        .expect("reply");
    assert!(greeting.response().starts_with("Namaste!"));

    let farewell = conversation
        .respond(&ChatRequest::text("BYE"))
        .expect("reply");
    assert_eq!(farewell.response(), "Stay healthy & balanced. Namaste 🙏");
}

#[test]
fn unrecognized_text_falls_back() {
    let engine = engine();
    let reply = Conversation::new(&engine)
        .respond(&ChatRequest::text("what should I cook tonight"))
        .expect("reply");
    assert_eq!(reply.kind(), "text");
    assert!(reply.response().contains("describe your symptoms"));
}

#[test]
fn blank_message_is_rejected() {
    let engine = engine();
    let err = Conversation::new(&engine)
        .respond(&ChatRequest::text("   "))
        .expect_err("blank message");
    assert!(matches!(err, ChatError::EmptyMessage));
}

#[test]
fn quiz_submission_is_scored() {
    let engine = engine();
    let reply = Conversation::new(&engine)
        .respond(&ChatRequest::quiz_submission(answers(&[
            (0, 2),
            (1, 2),
            (2, 0),
        ])))
        .expect("reply");

    assert_eq!(
        reply.response(),
        "Your dosha assessment is complete! Detected imbalance: **Kapha**"
    );
    assert_eq!(
        reply.assessment().map(|assessment| assessment.imbalance),
        Some(Dosha::Kapha)
    );
}

#[test]
fn invalid_quiz_submission_surfaces_the_error() {
    let engine = engine();
    let err = Conversation::new(&engine)
        .respond(&ChatRequest::quiz_submission(answers(&[(0, 0), (42, 0)])))
        .expect_err("question 42 does not exist");
    assert!(matches!(
        err,
        ChatError::Assessment(AssessmentError::InvalidAnswer { position: 1, .. })
    ));
}

#[test]
fn submission_marker_without_answers_is_treated_as_text() {
    let engine = engine();
    let request = ChatRequest {
        message: "QUIZ_SUBMISSION".to_string(),
        context: Some(ChatContext::default()),
    };
    let reply = Conversation::new(&engine)
        .respond(&request)
        .expect("reply");
    assert_eq!(reply.kind(), "text");
}

#[test]
fn request_accepts_string_and_object_contexts() {
    let plain: ChatRequest =
        serde_json::from_str(r#"{"message":"hi","context":""}"#).expect("string context");
    assert_eq!(plain.context, None);

    let missing: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).expect("no context");
    assert_eq!(missing.context, None);

    let quiz: ChatRequest = serde_json::from_str(
        r#"{"message":"QUIZ_SUBMISSION","context":{"answers":[[0,1],[1,0]]}}"#,
    )
    .expect("answers context");
    assert_eq!(quiz, ChatRequest::quiz_submission(answers(&[(0, 1), (1, 0)])));

    assert!(serde_json::from_str::<ChatRequest>(r#"{"message":"hi","context":[1]}"#).is_err());
}

#[test]
fn analysis_reply_serializes_like_the_chat_widget_expects() {
    let engine = engine();
    let reply = Conversation::new(&engine)
        .respond(&ChatRequest::text("I feel anxious and have dry skin"))
        .expect("reply");

    let json = serde_json::to_value(&reply).expect("serializes");
    assert_eq!(json["type"], "analysis");
    assert_eq!(json["data"]["imbalance"], "Vata");
    assert_eq!(
        json["data"]["scores"],
        serde_json::json!({ "Vata": 6, "Pitta": 0, "Kapha": 0 })
    );
    assert_eq!(
        json["data"]["symptoms_detected"],
        serde_json::json!(["anxiety", "dry_skin"])
    );
    assert!(json["data"]["advice"]["avoid"].is_array());

    let text = serde_json::to_value(
        Conversation::new(&engine)
            .respond(&ChatRequest::text("hello"))
            .expect("reply"),
    )
    .expect("serializes");
    assert_eq!(text["type"], "text");
    assert!(text.get("data").is_none());
}
