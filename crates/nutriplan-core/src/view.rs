//! View model for the results region
//!
//! `PlanView::from_plan` is the pure half of rendering: it turns a plan into
//! everything the page needs to draw, so the browser layer only maps fields
//! onto elements.

use crate::models::{Meal, MealIcon, MealType, Plan};

/// Placeholder shown when the server returned no meals
pub const EMPTY_PLACEHOLDER: &str = "No meals found.";

/// Hint shown on a card whose slot had no match
pub const MISSING_HINT: &str = "Try adjusting preferences";

/// Title line of a meal card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardTitle {
    Name(String),
    /// Rendered as an emphasized "No match found"
    NoMatch,
}

impl CardTitle {
    pub fn text(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::NoMatch => "No match found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBadge {
    pub label: String,
    pub css_class: String,
}

impl TagBadge {
    fn new(tag: &str) -> Self {
        Self {
            label: tag.to_string(),
            css_class: format!("tag-{}", tag),
        }
    }
}

/// One rendered meal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealCard {
    pub meal_type: MealType,
    pub icon: MealIcon,
    pub title: CardTitle,
    /// Meal id line; absent for missing slots
    pub id_line: Option<String>,
    pub calories_badge: String,
    pub tags: Vec<TagBadge>,
    /// De-emphasized styling for a missing slot
    pub muted: bool,
    pub hint: Option<&'static str>,
}

impl MealCard {
    pub fn from_meal(meal: &Meal) -> Self {
        let missing = meal.is_missing();

        Self {
            meal_type: meal.meal_type,
            icon: meal.meal_type.icon(),
            title: if missing {
                CardTitle::NoMatch
            } else {
                CardTitle::Name(meal.name.clone())
            },
            id_line: (!missing).then(|| meal.id.clone()),
            calories_badge: format!("{} kcal", meal.calories),
            tags: meal.tags.iter().map(|t| TagBadge::new(t)).collect(),
            muted: missing,
            hint: missing.then_some(MISSING_HINT),
        }
    }

    pub fn card_class(&self) -> &'static str {
        if self.muted {
            "meal-card opacity-60"
        } else {
            "meal-card"
        }
    }

    pub fn badge_class(&self) -> &'static str {
        if self.muted {
            "badge bg-gradient bg-secondary"
        } else {
            "badge bg-gradient"
        }
    }
}

/// Header above the cards, holding the Export PDF and Share controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanHeader {
    pub total_calories: u32,
}

impl PlanHeader {
    pub fn title(&self) -> String {
        format!("Your {}-Calorie Plan", self.total_calories)
    }
}

/// Full contents of the results region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlanView {
    /// Nothing has been generated yet
    #[default]
    Idle,
    /// The server returned no meals
    Empty,
    Plan {
        header: PlanHeader,
        cards: Vec<MealCard>,
    },
}

impl PlanView {
    /// Build the view for a plan; `None` and empty plans render the placeholder.
    pub fn from_plan(plan: Option<&Plan>) -> Self {
        match plan {
            Some(plan) if !plan.is_empty() => Self::Plan {
                header: PlanHeader {
                    total_calories: plan.total_calories(),
                },
                cards: plan.iter().map(MealCard::from_meal).collect(),
            },
            _ => Self::Empty,
        }
    }

    pub fn cards(&self) -> &[MealCard] {
        match self {
            Self::Plan { cards, .. } => cards,
            _ => &[],
        }
    }

    pub fn header(&self) -> Option<PlanHeader> {
        match self {
            Self::Plan { header, .. } => Some(*header),
            _ => None,
        }
    }
}
