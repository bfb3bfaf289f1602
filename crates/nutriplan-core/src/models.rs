//! Data model for generated meal plans
//!
//! A plan is the JSON array returned by the `generate` endpoint: one meal per
//! slot, in the fixed order Breakfast, Lunch, Dinner. Meals round-trip through
//! serde without losing fields, so the export request can resend what the
//! server produced. Calorie numbers are rounded to whole kcal on the way in.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Meal id the server uses when no meal matched a slot
pub const MISSING_MEAL_ID: &str = "N/A";

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// Slot order every plan is expected to follow
    pub const ORDER: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }

    /// Lowercase name, used as the icon circle CSS class
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    pub fn icon(&self) -> MealIcon {
        match self {
            Self::Breakfast => MealIcon::Sun,
            Self::Lunch => MealIcon::Cup,
            Self::Dinner => MealIcon::Moon,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon shown on a meal card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealIcon {
    Sun,
    Cup,
    Moon,
}

impl MealIcon {
    /// Bootstrap Icons class name
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Sun => "bi-sun",
            Self::Cup => "bi-cup-straw",
            Self::Moon => "bi-moon-stars",
        }
    }
}

/// One slot's recommendation, or the missing-match sentinel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub name: String,
    #[serde(deserialize_with = "calories_from_number")]
    pub calories: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Plan total precomputed by some server versions. Carried through to
    /// export; the header total is always derived client-side.
    #[serde(
        default,
        deserialize_with = "optional_calories_from_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_calories: Option<u32>,
    /// Any other fields the server attached
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Round a JSON calorie number to whole kcal; negative or non-finite values are rejected
fn round_calories(value: f64) -> Option<u32> {
    (value.is_finite() && value >= 0.0 && value <= u32::MAX as f64).then(|| value.round() as u32)
}

fn calories_from_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    round_calories(value)
        .ok_or_else(|| de::Error::custom(format!("invalid calorie value {}", value)))
}

fn optional_calories_from_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u32>, D::Error> {
    match Option::<f64>::deserialize(deserializer)? {
        Some(value) => round_calories(value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid calorie value {}", value))),
        None => Ok(None),
    }
}

impl Meal {
    pub fn new(id: &str, meal_type: MealType, name: &str, calories: u32) -> Self {
        Self {
            id: id.to_string(),
            meal_type,
            name: name.to_string(),
            calories,
            tags: Vec::new(),
            total_calories: None,
            extra: Map::new(),
        }
    }

    /// Placeholder for a slot the server could not fill
    pub fn missing(meal_type: MealType) -> Self {
        Self::new(MISSING_MEAL_ID, meal_type, "", 0)
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// True when the server found no meal for this slot
    pub fn is_missing(&self) -> bool {
        self.id == MISSING_MEAL_ID
    }
}

/// Ordered sequence of meals, normally exactly one per [`MealType`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan {
    pub meals: Vec<Meal>,
}

impl Plan {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Meal> {
        self.meals.iter()
    }

    /// Sum of calories over the slots that actually have a meal
    pub fn total_calories(&self) -> u32 {
        self.meals
            .iter()
            .filter(|m| !m.is_missing())
            .map(|m| m.calories)
            .sum()
    }

    /// Describe every way this plan deviates from the three-slot layout.
    ///
    /// An empty result means the plan has one meal per slot in
    /// Breakfast, Lunch, Dinner order.
    pub fn shape_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.meals.len() != MealType::ORDER.len() {
            warnings.push(format!(
                "Expected {} meals, got {}",
                MealType::ORDER.len(),
                self.meals.len()
            ));
        }

        for (idx, (meal, expected)) in self.meals.iter().zip(MealType::ORDER).enumerate() {
            if meal.meal_type != expected {
                warnings.push(format!(
                    "Slot {} holds {} instead of {}",
                    idx + 1,
                    meal.meal_type,
                    expected
                ));
            }
        }

        warnings
    }

    /// Decode a `generate` response body. `null` and `[]` both mean no plan.
    pub fn from_response_json(body: &str) -> Result<Option<Plan>, serde_json::Error> {
        let plan: Option<Plan> = serde_json::from_str(body)?;
        Ok(plan.filter(|p| !p.is_empty()))
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a Meal;
    type IntoIter = std::slice::Iter<'a, Meal>;

    fn into_iter(self) -> Self::IntoIter {
        self.meals.iter()
    }
}
