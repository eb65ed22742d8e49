use std::fmt;

use serde::{Deserialize, Serialize};

/// The three dosha axes an assessment is scored on.
///
/// Declaration order is significant: it is the priority used to break ties
/// when two axes share the highest score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// Every axis, in tie-break priority order.
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    pub fn label(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }

    pub fn elements(&self) -> &'static str {
        match self {
            Dosha::Vata => "Air + Ether",
            Dosha::Pitta => "Fire + Water",
            Dosha::Kapha => "Water + Earth",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Dosha::Vata => 0,
            Dosha::Pitta => 1,
            Dosha::Kapha => 2,
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-axis tally. Doubles as the fixed contribution carried by a symptom or
/// quiz option, since both have exactly one non-negative entry per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreVector {
    #[serde(rename = "Vata")]
    pub vata: u32,
    #[serde(rename = "Pitta")]
    pub pitta: u32,
    #[serde(rename = "Kapha")]
    pub kapha: u32,
}

impl ScoreVector {
    pub const fn new(vata: u32, pitta: u32, kapha: u32) -> Self {
        Self { vata, pitta, kapha }
    }

    pub const fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn get(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    pub fn total(&self) -> u64 {
        u64::from(self.vata) + u64::from(self.pitta) + u64::from(self.kapha)
    }

    /// Add another vector's contribution axis by axis.
    pub fn accumulate(&mut self, contribution: &ScoreVector) {
        self.vata = self.vata.saturating_add(contribution.vata);
        self.pitta = self.pitta.saturating_add(contribution.pitta);
        self.kapha = self.kapha.saturating_add(contribution.kapha);
    }

    /// Axis/score pairs in tie-break priority order.
    pub fn entries(&self) -> impl Iterator<Item = (Dosha, u32)> + '_ {
        Dosha::ALL.into_iter().map(move |dosha| (dosha, self.get(dosha)))
    }
}

/// Recognized symptom vocabulary produced by the keyword extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    Anxiety,
    DrySkin,
    Constipation,
    Insomnia,
    Bloating,
    JointPain,
    ColdExtremities,
    Restlessness,
    Stress,
    Headache,
    Acidity,
    Irritability,
    Inflammation,
    SkinRash,
    ExcessHeat,
    LooseStools,
    Lethargy,
    WeightGain,
    Congestion,
    Oversleeping,
    SluggishDigestion,
    LowMood,
}

impl Symptom {
    pub fn label(&self) -> &'static str {
        match self {
            Symptom::Anxiety => "anxiety",
            Symptom::DrySkin => "dry skin",
            Symptom::Constipation => "constipation",
            Symptom::Insomnia => "insomnia",
            Symptom::Bloating => "bloating",
            Symptom::JointPain => "joint pain",
            Symptom::ColdExtremities => "cold hands or feet",
            Symptom::Restlessness => "restlessness",
            Symptom::Stress => "stress",
            Symptom::Headache => "headache",
            Symptom::Acidity => "acidity",
            Symptom::Irritability => "irritability",
            Symptom::Inflammation => "inflammation",
            Symptom::SkinRash => "skin rash",
            Symptom::ExcessHeat => "excess body heat",
            Symptom::LooseStools => "loose stools",
            Symptom::Lethargy => "lethargy",
            Symptom::WeightGain => "weight gain",
            Symptom::Congestion => "congestion",
            Symptom::Oversleeping => "oversleeping",
            Symptom::SluggishDigestion => "sluggish digestion",
            Symptom::LowMood => "low mood",
        }
    }
}

/// Set of symptoms matched in one message, kept in first-match order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymptomSet(Vec<Symptom>);

impl SymptomSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the symptom was already present.
    pub fn insert(&mut self, symptom: Symptom) -> bool {
        if self.0.contains(&symptom) {
            return false;
        }
        self.0.push(symptom);
        true
    }

    pub fn contains(&self, symptom: Symptom) -> bool {
        self.0.contains(&symptom)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Symptom> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Symptom> for SymptomSet {
    fn from_iter<I: IntoIterator<Item = Symptom>>(iter: I) -> Self {
        let mut set = SymptomSet::new();
        for symptom in iter {
            set.insert(symptom);
        }
        set
    }
}

/// Zero-based `(question, option)` selection, carried on the wire as `[q, o]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer(pub usize, pub usize);

impl QuizAnswer {
    pub fn question(&self) -> usize {
        self.0
    }

    pub fn option(&self) -> usize {
        self.1
    }
}

impl From<(usize, usize)> for QuizAnswer {
    fn from((question, option): (usize, usize)) -> Self {
        Self(question, option)
    }
}
