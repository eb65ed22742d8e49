//! Dosha assessment: symptom extraction, quiz scoring, imbalance resolution
//! and advice lookup.
//!
//! All reference tables live inside [`AssessmentEngine`] and are validated
//! once when it is built. Every operation afterwards is a pure function of
//! its input and those tables, so one engine can be shared across requests.

pub mod advice;
pub mod conversation;
pub mod domain;
pub mod quiz;
pub mod resolver;
pub mod router;
mod scoring;
pub mod symptoms;

#[cfg(test)]
mod tests;

pub use advice::{AdviceBundle, AdviceCategory, AdviceTable};
pub use conversation::{
    ChatContext, ChatError, ChatReply, ChatRequest, Conversation, QuickOption, QuizPayload,
};
pub use domain::{Dosha, QuizAnswer, ScoreVector, Symptom, SymptomSet};
pub use quiz::{QuestionView, QuizCatalog, QuizOption, QuizQuestion};
pub use resolver::resolve;
pub use router::{assessment_router, QuizSubmission};
pub use symptoms::{SymptomLexicon, SymptomRule};

use serde::Serialize;
use tracing::debug;

/// Owns the lexicon, quiz catalog and advice table behind every assessment.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    lexicon: SymptomLexicon,
    catalog: QuizCatalog,
    advice: AdviceTable,
}

impl AssessmentEngine {
    pub fn new(lexicon: SymptomLexicon, catalog: QuizCatalog, advice: AdviceTable) -> Self {
        Self {
            lexicon,
            catalog,
            advice,
        }
    }

    /// Engine over the built-in tables. Fails only if those tables are
    /// internally inconsistent.
    pub fn standard() -> Result<Self, AssessmentError> {
        Ok(Self::new(
            SymptomLexicon::standard(),
            QuizCatalog::standard()?,
            AdviceTable::standard()?,
        ))
    }

    pub fn lexicon(&self) -> &SymptomLexicon {
        &self.lexicon
    }

    pub fn catalog(&self) -> &QuizCatalog {
        &self.catalog
    }

    pub fn extract_symptoms(&self, text: &str) -> SymptomSet {
        self.lexicon.extract(text)
    }

    pub fn score_from_symptoms(&self, symptoms: &SymptomSet) -> ScoreVector {
        scoring::score_symptoms(&self.lexicon, symptoms)
    }

    pub fn score_from_quiz_answers(
        &self,
        answers: &[QuizAnswer],
    ) -> Result<ScoreVector, AssessmentError> {
        scoring::score_answers(&self.catalog, answers)
    }

    pub fn resolve(&self, scores: &ScoreVector) -> Dosha {
        resolver::resolve(scores)
    }

    pub fn advice_for(&self, dosha: Dosha) -> &AdviceBundle {
        self.advice.advice_for(dosha)
    }

    pub fn questions(&self) -> Vec<QuestionView> {
        self.catalog.questions()
    }

    /// Full pipeline over free text; `None` when no known symptom was mentioned.
    pub fn assess_text(&self, text: &str) -> Option<Assessment<'_>> {
        let symptoms = self.extract_symptoms(text);
        if symptoms.is_empty() {
            debug!("no symptom keywords matched");
            return None;
        }

        let scores = self.score_from_symptoms(&symptoms);
        let imbalance = self.resolve(&scores);
        debug!(
            symptoms = symptoms.len(),
            ?scores,
            %imbalance,
            "assessed symptom text"
        );

        Some(Assessment {
            scores,
            imbalance,
            advice: self.advice_for(imbalance),
            symptoms_detected: Some(symptoms),
        })
    }

    pub fn assess_quiz(&self, answers: &[QuizAnswer]) -> Result<Assessment<'_>, AssessmentError> {
        let scores = self.score_from_quiz_answers(answers)?;
        let imbalance = self.resolve(&scores);
        debug!(answers = answers.len(), ?scores, %imbalance, "assessed quiz answers");

        Ok(Assessment {
            scores,
            imbalance,
            advice: self.advice_for(imbalance),
            symptoms_detected: None,
        })
    }
}

/// Result bundle handed to the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment<'a> {
    pub scores: ScoreVector,
    pub imbalance: Dosha,
    pub advice: &'a AdviceBundle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptoms_detected: Option<SymptomSet>,
}

/// Errors raised while building or running the assessment engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid quiz answer at position {position}: {fault}")]
    InvalidAnswer { position: usize, fault: AnswerFault },
    #[error("assessment tables misconfigured: {0}")]
    Configuration(#[from] ConfigurationFault),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnswerFault {
    #[error("question {question} does not exist (catalog has {available} questions)")]
    QuestionOutOfRange { question: usize, available: usize },
    #[error("question {question} has no option {option} (it offers {available})")]
    OptionOutOfRange {
        question: usize,
        option: usize,
        available: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationFault {
    #[error("quiz catalog has no questions")]
    EmptyCatalog,
    #[error("quiz question {question} offers {options} option(s), at least two are required")]
    TooFewOptions { question: usize, options: usize },
    #[error("no advice registered for {0}")]
    MissingAdvice(Dosha),
    #[error("{category} advice for {dosha} is empty")]
    EmptyAdvice {
        dosha: Dosha,
        category: AdviceCategory,
    },
}
