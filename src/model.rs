use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the three plannable slots in a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealTime {
    pub const ALL: [MealTime; 3] = [MealTime::Breakfast, MealTime::Lunch, MealTime::Dinner];

    pub fn as_str(self) -> &'static str {
        match self {
            MealTime::Breakfast => "breakfast",
            MealTime::Lunch => "lunch",
            MealTime::Dinner => "dinner",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<MealTime> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(MealTime::Breakfast),
            "lunch" => Some(MealTime::Lunch),
            "dinner" => Some(MealTime::Dinner),
            _ => None,
        }
    }

    fn rank(self) -> u8 {
        match self {
            MealTime::Breakfast => 0,
            MealTime::Lunch => 1,
            MealTime::Dinner => 2,
        }
    }
}

/// Immutable catalog record. Fetched read-only from the remote catalog or
/// the built-in sample set; the core never mutates one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub calories: Option<u32>,
    #[serde(default)]
    pub meal_times: Vec<MealTime>,
}

impl Meal {
    /// Sort rank for the default "browse" ordering: breakfast before lunch
    /// before dinner; meals with no slot at all go last.
    pub fn meal_time_priority(&self) -> u8 {
        self.meal_times.iter().map(|t| t.rank()).min().unwrap_or(3)
    }

    pub fn applies_to(&self, slot: MealTime) -> bool {
        self.meal_times.contains(&slot)
    }
}

/// Ingredient lookup result from the catalog collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

/// Body metrics captured once during onboarding. Construction validates the
/// measurements so the calorie calculator can assume clean input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    height_cm: f64,
    weight_kg: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

impl UserProfile {
    pub fn new(
        height_cm: f64,
        weight_kg: f64,
        activity: ActivityLevel,
        goal: Goal,
    ) -> Result<Self, Error> {
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(Error::InvalidProfile(format!(
                "height must be positive, got {height_cm}"
            )));
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(Error::InvalidProfile(format!(
                "weight must be positive, got {weight_kg}"
            )));
        }
        Ok(Self {
            height_cm,
            weight_kg,
            activity,
            goal,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn bmi(&self) -> f64 {
        let h = self.height_cm / 100.0;
        self.weight_kg / (h * h)
    }
}

/// Daily calorie target and its split across the three slots.
/// The slot values always sum exactly to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieBreakdown {
    pub target: u32,
    pub breakfast: u32,
    pub lunch: u32,
    pub dinner: u32,
}

impl CalorieBreakdown {
    pub fn quota(&self, slot: MealTime) -> u32 {
        match slot {
            MealTime::Breakfast => self.breakfast,
            MealTime::Lunch => self.lunch,
            MealTime::Dinner => self.dinner,
        }
    }
}

/// One search invocation's input. Transient.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub text: String,
    pub selected_ingredients: Vec<String>,
}

impl SearchQuery {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selected_ingredients: Vec::new(),
        }
    }

    pub fn is_browse(&self) -> bool {
        self.text.trim().is_empty() && self.selected_ingredients.is_empty()
    }
}

/// A meal with its relevance score. The score is internal to the search
/// engine and never persisted.
#[derive(Debug, Clone)]
pub struct RankedResult {
    pub meal: Meal,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_rejects_non_positive_metrics() {
        assert!(UserProfile::new(0.0, 70.0, ActivityLevel::Medium, Goal::Maintain).is_err());
        assert!(UserProfile::new(175.0, -1.0, ActivityLevel::Medium, Goal::Maintain).is_err());
        assert!(UserProfile::new(f64::NAN, 70.0, ActivityLevel::Medium, Goal::Maintain).is_err());
    }

    #[test]
    fn bmi_matches_hand_computation() {
        let profile = UserProfile::new(175.0, 70.0, ActivityLevel::Medium, Goal::Maintain)
            .expect("valid profile");
        assert!((profile.bmi() - 22.857).abs() < 0.01);
    }

    #[test]
    fn browse_detection() {
        assert!(SearchQuery::default().is_browse());
        assert!(!SearchQuery::text_only("cơm").is_browse());
        let chips_only = SearchQuery {
            text: "  ".into(),
            selected_ingredients: vec!["Tôm".into()],
        };
        assert!(!chips_only.is_browse());
    }

    #[test]
    fn meal_time_priority_uses_earliest_slot() {
        let mut meal = Meal {
            id: "1".into(),
            name: "test".into(),
            description: String::new(),
            tags: vec![],
            ingredients: vec![],
            calories: None,
            meal_times: vec![MealTime::Dinner, MealTime::Lunch],
        };
        assert_eq!(meal.meal_time_priority(), 1);
        meal.meal_times.clear();
        assert_eq!(meal.meal_time_priority(), 3);
    }
}
