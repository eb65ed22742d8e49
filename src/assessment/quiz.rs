use serde::{Deserialize, Serialize};

use super::domain::ScoreVector;
use super::{AssessmentError, ConfigurationFault};

/// One selectable answer and the weight it adds to each axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub text: String,
    pub weights: ScoreVector,
}

impl QuizOption {
    pub fn new(text: impl Into<String>, weights: ScoreVector) -> Self {
        Self {
            text: text.into(),
            weights,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

impl QuizQuestion {
    pub fn new(prompt: impl Into<String>, options: Vec<QuizOption>) -> Self {
        Self {
            prompt: prompt.into(),
            options,
        }
    }

    pub fn view(&self) -> QuestionView {
        QuestionView {
            question: self.prompt.clone(),
            options: self.options.iter().map(|option| option.text.clone()).collect(),
        }
    }
}

/// Public rendering of a question: prompt and option labels, no weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub question: String,
    pub options: Vec<String>,
}

/// Ordered, validated list of quiz questions.
#[derive(Debug, Clone)]
pub struct QuizCatalog {
    questions: Vec<QuizQuestion>,
}

impl QuizCatalog {
    /// Fails when the catalog is empty or a question offers fewer than two options.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, AssessmentError> {
        if questions.is_empty() {
            return Err(ConfigurationFault::EmptyCatalog.into());
        }
        if let Some((index, question)) = questions
            .iter()
            .enumerate()
            .find(|(_, question)| question.options.len() < 2)
        {
            return Err(ConfigurationFault::TooFewOptions {
                question: index,
                options: question.options.len(),
            }
            .into());
        }
        Ok(Self { questions })
    }

    pub fn standard() -> Result<Self, AssessmentError> {
        Self::new(standard_questions())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> Vec<QuestionView> {
        self.questions.iter().map(QuizQuestion::view).collect()
    }
}

fn question(prompt: &str, options: [(&str, ScoreVector); 3]) -> QuizQuestion {
    QuizQuestion::new(
        prompt,
        options
            .into_iter()
            .map(|(text, weights)| QuizOption::new(text, weights))
            .collect(),
    )
}

fn standard_questions() -> Vec<QuizQuestion> {
    vec![
        question(
            "How would you describe your body frame?",
            [
                ("Thin and light, I find it hard to gain weight", ScoreVector::new(2, 0, 0)),
                ("Medium and muscular", ScoreVector::new(0, 2, 0)),
                ("Broad and sturdy, I gain weight easily", ScoreVector::new(0, 0, 2)),
            ],
        ),
        question(
            "What is your skin usually like?",
            [
                ("Dry, rough or thin", ScoreVector::new(2, 0, 0)),
                ("Warm, sensitive, prone to redness or acne", ScoreVector::new(0, 2, 0)),
                ("Thick, smooth and oily", ScoreVector::new(0, 0, 2)),
            ],
        ),
        question(
            "How is your appetite?",
            [
                ("Irregular, sometimes I forget to eat", ScoreVector::new(2, 0, 0)),
                ("Strong, I get irritable if I miss a meal", ScoreVector::new(0, 2, 0)),
                ("Steady but mild, I can skip meals easily", ScoreVector::new(0, 0, 2)),
            ],
        ),
        question(
            "How does your digestion usually feel?",
            [
                ("Gassy or bloated, with a tendency to constipation", ScoreVector::new(2, 0, 0)),
                ("Quick, with occasional acidity or heartburn", ScoreVector::new(0, 2, 0)),
                ("Slow, I feel heavy after meals", ScoreVector::new(0, 0, 2)),
            ],
        ),
        question(
            "How do you sleep?",
            [
                ("Light and interrupted, I wake up easily", ScoreVector::new(2, 0, 0)),
                ("Moderate and sound, but I can wake up hot", ScoreVector::new(0, 2, 0)),
                ("Deep and long, I find it hard to get up", ScoreVector::new(0, 0, 2)),
            ],
        ),
        question(
            "How do you react under stress?",
            [
                ("I become anxious and worried", ScoreVector::new(2, 0, 0)),
                ("I become irritable or angry", ScoreVector::new(0, 2, 0)),
                ("I withdraw and become lethargic", ScoreVector::new(0, 0, 2)),
            ],
        ),
        question(
            "Which weather bothers you the most?",
            [
                ("Cold, dry and windy days", ScoreVector::new(2, 0, 0)),
                ("Hot and humid summers", ScoreVector::new(0, 2, 0)),
                ("Cold, damp and cloudy days", ScoreVector::new(0, 0, 2)),
            ],
        ),
        question(
            "How are your energy levels through the day?",
            [
                ("Comes in bursts, then I crash", ScoreVector::new(2, 0, 0)),
                ("Intense and focused, I push hard", ScoreVector::new(0, 2, 0)),
                ("Steady, but slow to get going", ScoreVector::new(0, 0, 2)),
            ],
        ),
    ]
}
