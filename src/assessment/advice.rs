use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::Dosha;
use super::{AssessmentError, ConfigurationFault};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceCategory {
    Diet,
    Lifestyle,
    Avoid,
}

impl fmt::Display for AdviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AdviceCategory::Diet => "diet",
            AdviceCategory::Lifestyle => "lifestyle",
            AdviceCategory::Avoid => "avoid",
        };
        f.write_str(label)
    }
}

/// Diet, lifestyle and avoidance guidance for one dosha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceBundle {
    pub diet: Vec<String>,
    pub lifestyle: Vec<String>,
    pub avoid: Vec<String>,
}

impl AdviceBundle {
    pub fn new(diet: &[&str], lifestyle: &[&str], avoid: &[&str]) -> Self {
        Self {
            diet: owned(diet),
            lifestyle: owned(lifestyle),
            avoid: owned(avoid),
        }
    }

    pub fn category(&self, category: AdviceCategory) -> &[String] {
        match category {
            AdviceCategory::Diet => &self.diet,
            AdviceCategory::Lifestyle => &self.lifestyle,
            AdviceCategory::Avoid => &self.avoid,
        }
    }

    fn first_empty_category(&self) -> Option<AdviceCategory> {
        [
            AdviceCategory::Diet,
            AdviceCategory::Lifestyle,
            AdviceCategory::Avoid,
        ]
        .into_iter()
        .find(|category| self.category(*category).is_empty())
    }
}

/// Advice bundles indexed by dosha, checked to cover every axis.
#[derive(Debug, Clone)]
pub struct AdviceTable {
    bundles: [AdviceBundle; 3],
}

impl AdviceTable {
    pub fn from_entries<I>(entries: I) -> Result<Self, AssessmentError>
    where
        I: IntoIterator<Item = (Dosha, AdviceBundle)>,
    {
        let mut by_dosha: BTreeMap<Dosha, AdviceBundle> = entries.into_iter().collect();
        let mut bundles = Vec::with_capacity(Dosha::ALL.len());

        for dosha in Dosha::ALL {
            let bundle = by_dosha
                .remove(&dosha)
                .ok_or(ConfigurationFault::MissingAdvice(dosha))?;
            if let Some(category) = bundle.first_empty_category() {
                return Err(ConfigurationFault::EmptyAdvice { dosha, category }.into());
            }
            bundles.push(bundle);
        }

        let bundles: [AdviceBundle; 3] = bundles
            .try_into()
            .map_err(|_| ConfigurationFault::MissingAdvice(Dosha::Kapha))?;
        Ok(Self { bundles })
    }

    pub fn standard() -> Result<Self, AssessmentError> {
        Self::from_entries(standard_entries())
    }

    pub fn advice_for(&self, dosha: Dosha) -> &AdviceBundle {
        &self.bundles[dosha.index()]
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn standard_entries() -> Vec<(Dosha, AdviceBundle)> {
    vec![
        (
            Dosha::Vata,
            AdviceBundle::new(
                &[
                    "Warm, moist and grounding foods such as soups, stews and cooked grains",
                    "Sweet, sour and salty tastes",
                    "Ghee, sesame oil and warm milk with a pinch of nutmeg",
                    "Warm ginger or cinnamon tea through the day",
                ],
                &[
                    "Keep a regular daily routine for meals and sleep",
                    "Daily warm sesame oil self-massage (abhyanga)",
                    "Gentle yoga, walking and slow deep breathing",
                    "Be in bed by 10 pm and keep screens away before sleep",
                ],
                &[
                    "Raw, cold and dry foods such as salads and crackers",
                    "Excess caffeine",
                    "Skipping meals and irregular schedules",
                    "Cold, windy weather without warm clothing",
                ],
            ),
        ),
        (
            Dosha::Pitta,
            AdviceBundle::new(
                &[
                    "Cooling, sweet foods such as cucumber, melon and leafy greens",
                    "Sweet, bitter and astringent tastes",
                    "Coconut water, mint and coriander",
                    "Basmati rice, oats and ghee in moderation",
                ],
                &[
                    "Practice moderation and avoid overworking",
                    "Cooling pranayama such as sheetali breathing",
                    "Moonlight walks and time near water",
                    "Exercise in the cooler parts of the day",
                ],
                &[
                    "Spicy, fried and very salty foods",
                    "Alcohol and excess coffee",
                    "Fermented and sour foods",
                    "Midday sun and overheating",
                ],
            ),
        ),
        (
            Dosha::Kapha,
            AdviceBundle::new(
                &[
                    "Light, warm and spicy foods with ginger, black pepper and turmeric",
                    "Pungent, bitter and astringent tastes",
                    "Steamed vegetables, legumes and millet",
                    "Warm water with honey in the morning",
                ],
                &[
                    "Stay active with daily vigorous exercise",
                    "Wake up early, before 6 am",
                    "Dry brushing (garshana) to stimulate circulation",
                    "Keep variety and new challenges in your routine",
                ],
                &[
                    "Heavy, oily and fried foods",
                    "Dairy, cold drinks and sweets",
                    "Daytime naps",
                    "Overeating and eating late at night",
                ],
            ),
        ),
    ]
}
