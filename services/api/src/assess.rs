use crate::infra::parse_answer;
use clap::Args;
use dhara::assessment::{AdviceCategory, Assessment, AssessmentEngine, QuizAnswer, QuizPayload};
use dhara::error::AppError;
use std::fmt::Write;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Free-text symptom description, e.g. "I feel anxious and have dry skin"
    #[arg(long, conflicts_with = "answers", required_unless_present = "answers")]
    pub(crate) text: Option<String>,
    /// Quiz answers as comma separated QUESTION:OPTION pairs (zero-based)
    #[arg(long, value_delimiter = ',', value_parser = parse_answer)]
    pub(crate) answers: Vec<QuizAnswer>,
    /// Print the assessment as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        text,
        answers,
        json,
    } = args;

    let engine = AssessmentEngine::standard()?;
    let assessment = match text {
        Some(text) => match engine.assess_text(&text) {
            Some(assessment) => assessment,
            None => {
                println!("No known symptoms found. Try describing how you feel, e.g. 'I feel anxious and have dry skin'.");
                return Ok(());
            }
        },
        None => engine.assess_quiz(&answers)?,
    };

    if json {
        let rendered =
            serde_json::to_string_pretty(&assessment).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        print!("{}", render_assessment(&assessment));
    }
    Ok(())
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let engine = AssessmentEngine::standard()?;
    let questions = engine.questions();

    if args.json {
        let rendered = serde_json::to_string_pretty(&QuizPayload { questions })
            .map_err(std::io::Error::from)?;
        println!("{rendered}");
        return Ok(());
    }

    println!("Dosha quiz ({} questions)", questions.len());
    for (index, question) in questions.iter().enumerate() {
        println!("\n{index}. {}", question.question);
        for (option, label) in question.options.iter().enumerate() {
            println!("   {index}:{option}  {label}");
        }
    }
    Ok(())
}

pub(crate) fn render_assessment(assessment: &Assessment<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Dosha assessment");

    if let Some(symptoms) = &assessment.symptoms_detected {
        let labels: Vec<&str> = symptoms.iter().map(|symptom| symptom.label()).collect();
        let _ = writeln!(out, "- Symptoms detected: {}", labels.join(", "));
    }

    let scores: Vec<String> = assessment
        .scores
        .entries()
        .map(|(dosha, score)| format!("{dosha} {score}"))
        .collect();
    let _ = writeln!(out, "- Scores: {}", scores.join(" | "));
    let _ = writeln!(
        out,
        "- Imbalance: {} ({})",
        assessment.imbalance,
        assessment.imbalance.elements()
    );

    for (title, category) in [
        ("Diet", AdviceCategory::Diet),
        ("Lifestyle", AdviceCategory::Lifestyle),
        ("Avoid", AdviceCategory::Avoid),
    ] {
        let _ = writeln!(out, "\n{title}:");
        for item in assessment.advice.category(category) {
            let _ = writeln!(out, "  - {item}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_scores_symptoms_and_advice() {
        let engine = AssessmentEngine::standard().expect("engine builds");
        let assessment = engine
            .assess_text("I feel anxious and have dry skin")
            .expect("symptoms detected");

        let report = render_assessment(&assessment);

        assert!(report.contains("- Symptoms detected: anxiety, dry skin"));
        assert!(report.contains("- Scores: Vata 6 | Pitta 0 | Kapha 0"));
        assert!(report.contains("- Imbalance: Vata (Air + Ether)"));
        assert!(report.contains("\nAvoid:\n  - "));
    }

    #[test]
    fn quiz_report_omits_symptom_line() {
        let engine = AssessmentEngine::standard().expect("engine builds");
        let assessment = engine
            .assess_quiz(&[QuizAnswer(0, 1), QuizAnswer(1, 1)])
            .expect("answers valid");

        let report = render_assessment(&assessment);

        assert!(!report.contains("Symptoms detected"));
        assert!(report.contains("- Imbalance: Pitta (Fire + Water)"));
    }
}
