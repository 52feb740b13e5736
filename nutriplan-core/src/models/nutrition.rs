use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::meal_type::MealType;

/// Nutrient breakdown for a single serving of food.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    pub cholesterol: f64,
}

impl NutritionInfo {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            ..Default::default()
        }
    }

    pub fn with_fiber(mut self, fiber: f64) -> Self {
        self.fiber = fiber;
        self
    }

    pub fn with_sugar(mut self, sugar: f64) -> Self {
        self.sugar = sugar;
        self
    }

    pub fn with_sodium(mut self, sodium: f64) -> Self {
        self.sodium = sodium;
        self
    }
}

/// A logged food entry for a specific date and meal slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub food_name: String,
    pub serving: f64,
    pub unit: String,
    pub nutrition: NutritionInfo,
}

impl NutritionEntry {
    pub fn new(
        date: NaiveDate,
        meal_type: MealType,
        food_name: impl Into<String>,
        nutrition: NutritionInfo,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            meal_type,
            food_name: food_name.into(),
            serving: 1.0,
            unit: "serving".to_string(),
            nutrition,
        }
    }

    pub fn with_serving(mut self, serving: f64, unit: impl Into<String>) -> Self {
        self.serving = serving;
        self.unit = unit.into();
        self
    }
}

impl fmt::Display for NutritionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} ({} {}, {:.0} kcal)",
            self.date, self.meal_type, self.food_name, self.serving, self.unit,
            self.nutrition.calories
        )
    }
}

/// Partial update for a logged entry. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct NutritionEntryUpdate {
    pub date: Option<NaiveDate>,
    pub meal_type: Option<MealType>,
    pub food_name: Option<String>,
    pub serving: Option<f64>,
    pub unit: Option<String>,
    pub nutrition: Option<NutritionInfo>,
}

impl NutritionEntryUpdate {
    pub fn apply(&self, entry: &mut NutritionEntry) {
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(meal_type) = self.meal_type {
            entry.meal_type = meal_type;
        }
        if let Some(food_name) = &self.food_name {
            entry.food_name = food_name.clone();
        }
        if let Some(serving) = self.serving {
            entry.serving = serving;
        }
        if let Some(unit) = &self.unit {
            entry.unit = unit.clone();
        }
        if let Some(nutrition) = self.nutrition {
            entry.nutrition = nutrition;
        }
    }
}

/// A glass/bottle of water logged against a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterIntake {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount_ml: f64,
    pub time: NaiveTime,
}

impl WaterIntake {
    pub fn new(date: NaiveDate, amount_ml: f64, time: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount_ml,
            time,
        }
    }
}

/// Per-day rollup of everything logged for that date.
///
/// Summaries are derived state: they are always rebuilt in full from the
/// entries and water intakes for the date, never patched incrementally.
/// Once a summary exists for a date it persists even if every entry for
/// that date is later removed (it becomes a zeroed summary).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub total_fiber: f64,
    pub total_sugar: f64,
    pub total_sodium: f64,
    pub water_intake_ml: f64,
    pub meals_logged: usize,
}

impl DailySummary {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total_calories: 0.0,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fat: 0.0,
            total_fiber: 0.0,
            total_sugar: 0.0,
            total_sodium: 0.0,
            water_intake_ml: 0.0,
            meals_logged: 0,
        }
    }
}

impl fmt::Display for DailySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary for {}", self.date)?;
        writeln!(f, "{}", "=".repeat(30))?;
        writeln!(f, "Calories: {:.0} kcal", self.total_calories)?;
        writeln!(f, "Protein:  {:.1} g", self.total_protein)?;
        writeln!(f, "Carbs:    {:.1} g", self.total_carbs)?;
        writeln!(f, "Fat:      {:.1} g", self.total_fat)?;
        writeln!(f, "Water:    {:.0} ml", self.water_intake_ml)?;
        writeln!(f, "Meals logged: {}", self.meals_logged)?;
        Ok(())
    }
}

/// Daily targets the streak computation measures against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub water_ml: f64,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein: 150.0,
            carbs: 250.0,
            fat: 65.0,
            water_ml: 2000.0,
        }
    }
}

/// Consecutive-day counters, one per tracked metric.
///
/// Each streak is counted independently by walking back from the most
/// recent summary until that metric's condition fails.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Streaks {
    pub calorie_goal: u32,
    pub protein_goal: u32,
    pub water_goal: u32,
    pub logging: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_nutrition_info_builders() {
        let info = NutritionInfo::new(250.0, 12.0, 30.0, 8.0)
            .with_fiber(4.0)
            .with_sugar(6.0);
        assert_eq!(info.calories, 250.0);
        assert_eq!(info.fiber, 4.0);
        assert_eq!(info.sugar, 6.0);
        assert_eq!(info.sodium, 0.0);
    }

    #[test]
    fn test_entry_new_defaults() {
        let entry = NutritionEntry::new(
            date("2024-01-01"),
            MealType::Breakfast,
            "Oatmeal",
            NutritionInfo::new(300.0, 10.0, 54.0, 5.0),
        );
        assert_eq!(entry.serving, 1.0);
        assert_eq!(entry.unit, "serving");
        assert_eq!(entry.food_name, "Oatmeal");
    }

    #[test]
    fn test_entry_update_apply_partial() {
        let mut entry = NutritionEntry::new(
            date("2024-01-01"),
            MealType::Lunch,
            "Salad",
            NutritionInfo::new(150.0, 5.0, 10.0, 9.0),
        );
        let update = NutritionEntryUpdate {
            date: Some(date("2024-01-02")),
            food_name: Some("Greek salad".to_string()),
            ..Default::default()
        };
        update.apply(&mut entry);
        assert_eq!(entry.date, date("2024-01-02"));
        assert_eq!(entry.food_name, "Greek salad");
        assert_eq!(entry.meal_type, MealType::Lunch);
    }

    #[test]
    fn test_empty_summary_is_zeroed() {
        let summary = DailySummary::empty(date("2024-01-01"));
        assert_eq!(summary.total_calories, 0.0);
        assert_eq!(summary.meals_logged, 0);
    }

    #[test]
    fn test_entry_json_roundtrip() {
        let entry = NutritionEntry::new(
            date("2024-03-05"),
            MealType::Dinner,
            "Chili",
            NutritionInfo::new(420.0, 28.0, 35.0, 18.0),
        )
        .with_serving(1.5, "bowl");
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: NutritionEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, entry.id);
        assert_eq!(parsed.date, entry.date);
        assert_eq!(parsed.serving, 1.5);
    }
}
