use super::domain::{QuizAnswer, ScoreVector, SymptomSet};
use super::quiz::QuizCatalog;
use super::symptoms::SymptomLexicon;
use super::{AnswerFault, AssessmentError};

/// Sum the lexicon weight of every symptom in the set.
pub(crate) fn score_symptoms(lexicon: &SymptomLexicon, symptoms: &SymptomSet) -> ScoreVector {
    symptoms
        .iter()
        .fold(ScoreVector::zero(), |mut scores, symptom| {
            scores.accumulate(&lexicon.weights(symptom));
            scores
        })
}

/// Sum the selected options' weights.
///
/// The whole batch is rejected on the first answer that points outside the
/// catalog; no partial tally is ever returned.
pub(crate) fn score_answers(
    catalog: &QuizCatalog,
    answers: &[QuizAnswer],
) -> Result<ScoreVector, AssessmentError> {
    let mut scores = ScoreVector::zero();

    for (position, answer) in answers.iter().enumerate() {
        let question = catalog.question(answer.question()).ok_or_else(|| {
            AssessmentError::InvalidAnswer {
                position,
                fault: AnswerFault::QuestionOutOfRange {
                    question: answer.question(),
                    available: catalog.len(),
                },
            }
        })?;

        let option = question.options.get(answer.option()).ok_or_else(|| {
            AssessmentError::InvalidAnswer {
                position,
                fault: AnswerFault::OptionOutOfRange {
                    question: answer.question(),
                    option: answer.option(),
                    available: question.options.len(),
                },
            }
        })?;

        scores.accumulate(&option.weights);
    }

    Ok(scores)
}
