use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use super::domain::QuizAnswer;
use super::quiz::QuestionView;
use super::{Assessment, AssessmentEngine, AssessmentError};

/// Sentinel message the chat widget sends together with collected quiz answers.
pub const QUIZ_SUBMISSION: &str = "QUIZ_SUBMISSION";

const GREETINGS: [&str; 4] = ["hello", "hi", "hey", "namaste"];
const FAREWELLS: [&str; 3] = ["exit", "bye", "quit"];

const GREETING_REPLY: &str = "Namaste! 🙏 I'm Dhara, your Ayurveda wellness assistant. How can I help you today? You can describe your symptoms, ask about diet, or type a number (1-6) for quick options.";
const FAREWELL_REPLY: &str = "Stay healthy & balanced. Namaste 🙏";
const FALLBACK_REPLY: &str = "I understand. Ayurveda focuses on balance. Could you describe your symptoms (e.g., 'I feel anxious and have dry skin') or choose a quick option (1-6)?";
const QUIZ_INTRO: &str =
    "Let's assess your dosha balance. Please answer the following questions.";

/// Incoming chat message. `context` carries quiz answers on submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, deserialize_with = "deserialize_context")]
    pub context: Option<ChatContext>,
}

impl ChatRequest {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
        }
    }

    pub fn quiz_submission(answers: Vec<QuizAnswer>) -> Self {
        Self {
            message: QUIZ_SUBMISSION.to_string(),
            context: Some(ChatContext {
                answers: Some(answers),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatContext {
    #[serde(default)]
    pub answers: Option<Vec<QuizAnswer>>,
}

/// Older widgets send `"context": ""` when there is nothing to attach.
fn deserialize_context<'de, D>(deserializer: D) -> Result<Option<ChatContext>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null | serde_json::Value::String(_) => Ok(None),
        value @ serde_json::Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        other => Err(serde::de::Error::custom(format!(
            "context must be an object, found {other}"
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizPayload {
    pub questions: Vec<QuestionView>,
}

/// Reply rendered by the chat widget; `type` selects how `data` is displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatReply<'a> {
    Text {
        response: String,
    },
    Quiz {
        response: String,
        data: QuizPayload,
    },
    Analysis {
        response: String,
        data: Assessment<'a>,
    },
}

impl<'a> ChatReply<'a> {
    fn text(response: impl Into<String>) -> Self {
        ChatReply::Text {
            response: response.into(),
        }
    }

    pub fn response(&self) -> &str {
        match self {
            ChatReply::Text { response }
            | ChatReply::Quiz { response, .. }
            | ChatReply::Analysis { response, .. } => response,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ChatReply::Text { .. } => "text",
            ChatReply::Quiz { .. } => "quiz",
            ChatReply::Analysis { .. } => "analysis",
        }
    }

    pub fn assessment(&self) -> Option<&Assessment<'a>> {
        match self {
            ChatReply::Analysis { data, .. } => Some(data),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Message cannot be empty")]
    EmptyMessage,
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}

/// Numeric shortcuts offered by the chat widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickOption {
    StartQuiz,
    Tip(&'static str),
}

impl QuickOption {
    pub fn parse(message: &str) -> Option<Self> {
        let option = match message {
            "1" => QuickOption::StartQuiz,
            "2" => QuickOption::Tip(
                "Stress may indicate Vata imbalance. Try warm tea, deep breathing & early sleep.",
            ),
            "3" => QuickOption::Tip(
                "Eat warm, freshly cooked meals. Avoid processed & cold foods.",
            ),
            "4" => QuickOption::Tip(
                "Sleep tip: Oil massage feet, avoid screens before bed, drink warm milk.",
            ),
            "5" => QuickOption::Tip(
                "Boost energy with ginger tea, morning sunlight & light exercise.",
            ),
            "6" => QuickOption::Tip(
                "Seasonal tip: Eat according to weather. Prefer cooling foods in summer & warm foods in winter.",
            ),
            _ => return None,
        };
        Some(option)
    }
}

/// Routes one stateless chat message to the engine.
#[derive(Debug, Clone, Copy)]
pub struct Conversation<'a> {
    engine: &'a AssessmentEngine,
}

impl<'a> Conversation<'a> {
    pub fn new(engine: &'a AssessmentEngine) -> Self {
        Self { engine }
    }

    pub fn respond(&self, request: &ChatRequest) -> Result<ChatReply<'a>, ChatError> {
        let message = request.message.trim();

        if message == QUIZ_SUBMISSION {
            if let Some(answers) = request
                .context
                .as_ref()
                .and_then(|context| context.answers.as_deref())
            {
                return self.submit_quiz(answers).map_err(ChatError::from);
            }
        }

        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        if let Some(option) = QuickOption::parse(message) {
            debug!(?option, "quick option selected");
            return Ok(match option {
                QuickOption::StartQuiz => self.start_quiz(),
                QuickOption::Tip(tip) => ChatReply::text(tip),
            });
        }

        let lower = message.to_lowercase();
        if GREETINGS.contains(&lower.as_str()) {
            return Ok(ChatReply::text(GREETING_REPLY));
        }
        if FAREWELLS.contains(&lower.as_str()) {
            return Ok(ChatReply::text(FAREWELL_REPLY));
        }

        match self.engine.assess_text(message) {
            Some(assessment) => Ok(ChatReply::Analysis {
                response: format!(
                    "Based on your symptoms, I detect a potential **{}** imbalance.",
                    assessment.imbalance
                ),
                data: assessment,
            }),
            None => Ok(ChatReply::text(FALLBACK_REPLY)),
        }
    }

    pub fn start_quiz(&self) -> ChatReply<'a> {
        ChatReply::Quiz {
            response: QUIZ_INTRO.to_string(),
            data: QuizPayload {
                questions: self.engine.questions(),
            },
        }
    }

    pub fn submit_quiz(&self, answers: &[QuizAnswer]) -> Result<ChatReply<'a>, AssessmentError> {
        let assessment = self.engine.assess_quiz(answers)?;
        Ok(ChatReply::Analysis {
            response: format!(
                "Your dosha assessment is complete! Detected imbalance: **{}**",
                assessment.imbalance
            ),
            data: assessment,
        })
    }
}
