use super::domain::{ScoreVector, Symptom, SymptomSet};

/// Keyword phrases recognized for one symptom and the weight it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomRule {
    pub symptom: Symptom,
    pub keywords: Vec<String>,
    pub weights: ScoreVector,
}

impl SymptomRule {
    pub fn new(symptom: Symptom, keywords: &[&str], weights: ScoreVector) -> Self {
        Self {
            symptom,
            keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
            weights,
        }
    }
}

/// Pre-tokenized keyword phrase pointing back at its owning rule.
#[derive(Debug, Clone)]
struct Phrase {
    tokens: Vec<String>,
    rule: usize,
}

/// Keyword table used to pull symptoms out of free text.
///
/// Matching is case-insensitive and works on whole words: a phrase matches
/// when its words appear contiguously in the message, so "gas" is found in
/// "lots of gas" but not in "vegas".
#[derive(Debug, Clone)]
pub struct SymptomLexicon {
    rules: Vec<SymptomRule>,
    phrases: Vec<Phrase>,
}

impl SymptomLexicon {
    pub fn new(rules: Vec<SymptomRule>) -> Self {
        let phrases = rules
            .iter()
            .enumerate()
            .flat_map(|(index, rule)| {
                rule.keywords.iter().filter_map(move |keyword| {
                    let tokens = tokenize(keyword);
                    (!tokens.is_empty()).then_some(Phrase {
                        tokens,
                        rule: index,
                    })
                })
            })
            .collect();

        Self { rules, phrases }
    }

    pub fn standard() -> Self {
        Self::new(standard_rules())
    }

    pub fn rules(&self) -> &[SymptomRule] {
        &self.rules
    }

    /// Fixed contribution of a symptom; zero for symptoms this table does not know.
    pub fn weights(&self, symptom: Symptom) -> ScoreVector {
        self.rules
            .iter()
            .filter(|rule| rule.symptom == symptom)
            .fold(ScoreVector::zero(), |mut total, rule| {
                total.accumulate(&rule.weights);
                total
            })
    }

    pub fn extract(&self, text: &str) -> SymptomSet {
        let words = tokenize(text);
        let mut found = SymptomSet::new();
        if words.is_empty() {
            return found;
        }

        let mut matches: Vec<(usize, usize)> = self
            .phrases
            .iter()
            .filter_map(|phrase| {
                first_occurrence(&words, &phrase.tokens).map(|position| (position, phrase.rule))
            })
            .collect();
        matches.sort_unstable();

        for (_, rule) in matches {
            found.insert(self.rules[rule].symptom);
        }
        found
    }
}

impl Default for SymptomLexicon {
    fn default() -> Self {
        Self::standard()
    }
}

fn first_occurrence(words: &[String], phrase: &[String]) -> Option<usize> {
    if phrase.len() > words.len() {
        return None;
    }
    words
        .windows(phrase.len())
        .position(|window| window == phrase)
}

/// Lower-case word runs; apostrophes stay inside words so "can't" is one token.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .map(|word| {
            word.trim_matches(|c| c == '\'' || c == '\u{2019}')
                .replace('\u{2019}', "'")
        })
        .filter(|word| !word.is_empty())
        .collect()
}

fn standard_rules() -> Vec<SymptomRule> {
    vec![
        SymptomRule::new(
            Symptom::Anxiety,
            &["anxious", "anxiety", "worried", "worry", "nervous", "panic"],
            ScoreVector::new(3, 0, 0),
        ),
        SymptomRule::new(
            Symptom::DrySkin,
            &["dry skin", "dry lips", "cracked skin", "flaky skin"],
            ScoreVector::new(3, 0, 0),
        ),
        SymptomRule::new(
            Symptom::Constipation,
            &["constipation", "constipated", "hard stools"],
            ScoreVector::new(3, 0, 0),
        ),
        SymptomRule::new(
            Symptom::Insomnia,
            &[
                "insomnia",
                "can't sleep",
                "cannot sleep",
                "trouble sleeping",
                "sleepless",
                "restless sleep",
                "waking up at night",
            ],
            ScoreVector::new(3, 0, 0),
        ),
        SymptomRule::new(
            Symptom::Bloating,
            &["bloating", "bloated", "gas", "gassy", "flatulence"],
            ScoreVector::new(2, 0, 1),
        ),
        SymptomRule::new(
            Symptom::JointPain,
            &["joint pain", "joints ache", "cracking joints", "stiff joints"],
            ScoreVector::new(2, 0, 0),
        ),
        SymptomRule::new(
            Symptom::ColdExtremities,
            &["cold hands", "cold feet", "always cold", "feel cold"],
            ScoreVector::new(2, 0, 0),
        ),
        SymptomRule::new(
            Symptom::Restlessness,
            &["restless", "restlessness", "fidgety", "racing thoughts"],
            ScoreVector::new(2, 0, 0),
        ),
        SymptomRule::new(
            Symptom::Stress,
            &["stress", "stressed", "overwhelmed"],
            ScoreVector::new(2, 1, 0),
        ),
        SymptomRule::new(
            Symptom::Headache,
            &["headache", "headaches", "migraine"],
            ScoreVector::new(1, 2, 0),
        ),
        SymptomRule::new(
            Symptom::Acidity,
            &["acidity", "acid reflux", "heartburn", "sour burps"],
            ScoreVector::new(0, 3, 0),
        ),
        SymptomRule::new(
            Symptom::Irritability,
            &["irritable", "irritated", "angry", "anger", "frustrated", "impatient"],
            ScoreVector::new(0, 3, 0),
        ),
        SymptomRule::new(
            Symptom::Inflammation,
            &["inflammation", "inflamed", "swelling", "redness"],
            ScoreVector::new(0, 3, 0),
        ),
        SymptomRule::new(
            Symptom::SkinRash,
            &["rash", "rashes", "acne", "hives", "pimples"],
            ScoreVector::new(0, 2, 0),
        ),
        SymptomRule::new(
            Symptom::ExcessHeat,
            &[
                "hot flashes",
                "overheating",
                "feel hot",
                "excessive sweating",
                "burning sensation",
            ],
            ScoreVector::new(0, 3, 0),
        ),
        SymptomRule::new(
            Symptom::LooseStools,
            &["diarrhea", "diarrhoea", "loose stools", "loose motions"],
            ScoreVector::new(0, 2, 0),
        ),
        SymptomRule::new(
            Symptom::Lethargy,
            &["lethargic", "lethargy", "sluggish", "tired", "fatigue", "fatigued"],
            ScoreVector::new(0, 0, 3),
        ),
        SymptomRule::new(
            Symptom::WeightGain,
            &["weight gain", "gaining weight", "overweight", "put on weight"],
            ScoreVector::new(0, 0, 3),
        ),
        SymptomRule::new(
            Symptom::Congestion,
            &["congestion", "congested", "mucus", "phlegm", "stuffy nose", "runny nose"],
            ScoreVector::new(0, 0, 3),
        ),
        SymptomRule::new(
            Symptom::Oversleeping,
            &["oversleeping", "sleep too much", "hard to wake up", "drowsy"],
            ScoreVector::new(0, 0, 2),
        ),
        SymptomRule::new(
            Symptom::SluggishDigestion,
            &["slow digestion", "heavy after meals", "heaviness", "no appetite"],
            ScoreVector::new(0, 0, 2),
        ),
        SymptomRule::new(
            Symptom::LowMood,
            &["depressed", "unmotivated", "low mood", "sad"],
            ScoreVector::new(1, 0, 2),
        ),
    ]
}
