//! Meal planner state: the current weekly grid, the sample meal catalog
//! and favorites.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{GroceryItem, Meal, MealIngredient, MealType, NutritionInfo, WeeklyMealPlan};
use crate::store::error::StoreError;

fn sample_catalog() -> Vec<Meal> {
    vec![
        Meal::new("Overnight Oats", 320.0)
            .with_nutrition(NutritionInfo::new(320.0, 12.0, 54.0, 7.0).with_fiber(8.0))
            .with_prep_time(5)
            .with_ingredient(MealIngredient::new("Rolled oats", "Pantry Staples", 0.5, "cup").with_price(0.4))
            .with_ingredient(MealIngredient::new("Milk", "Dairy & Eggs", 0.5, "cup").with_price(0.3))
            .with_ingredient(MealIngredient::new("Blueberries", "Fruits & Vegetables", 0.5, "cup").with_price(1.5)),
        Meal::new("Greek Chicken Bowl", 540.0)
            .with_nutrition(NutritionInfo::new(540.0, 42.0, 45.0, 18.0).with_sodium(620.0))
            .with_prep_time(25)
            .with_ingredient(MealIngredient::new("Chicken breast", "Meat & Seafood", 0.5, "lbs").with_price(3.5))
            .with_ingredient(MealIngredient::new("Rice", "Pantry Staples", 1.0, "cup").with_price(0.6))
            .with_ingredient(MealIngredient::new("Cucumber", "Fruits & Vegetables", 1.0, "ct").with_price(0.8)),
        Meal::new("Veggie Stir Fry", 430.0)
            .with_nutrition(NutritionInfo::new(430.0, 15.0, 52.0, 16.0).with_fiber(9.0))
            .with_prep_time(20)
            .with_ingredient(MealIngredient::new("Broccoli", "Fruits & Vegetables", 1.0, "head").with_price(2.0))
            .with_ingredient(MealIngredient::new("Tofu", "Pantry Staples", 1.0, "block").with_price(2.5)),
        Meal::new("Salmon & Greens", 610.0)
            .with_nutrition(NutritionInfo::new(610.0, 38.0, 22.0, 38.0))
            .with_prep_time(30)
            .with_ingredient(MealIngredient::new("Salmon fillet", "Meat & Seafood", 0.5, "lbs").with_price(6.0))
            .with_ingredient(MealIngredient::new("Spinach", "Fruits & Vegetables", 1.0, "bag").with_price(2.5)),
        Meal::new("Trail Mix", 180.0)
            .with_nutrition(NutritionInfo::new(180.0, 6.0, 14.0, 12.0))
            .with_ingredient(MealIngredient::new("Mixed nuts", "Snacks", 0.25, "cup").with_price(1.2)),
    ]
}

/// Monday of the week containing `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanner {
    pub plan: WeeklyMealPlan,
    pub catalog: Vec<Meal>,
    pub favorites: Vec<Uuid>,
}

impl Default for MealPlanner {
    fn default() -> Self {
        Self {
            plan: WeeklyMealPlan::new(week_start(Local::now().date_naive())),
            catalog: sample_catalog(),
            favorites: Vec::new(),
        }
    }
}

impl MealPlanner {
    /// Look up a catalog meal by name, case-insensitive.
    pub fn find_meal(&self, name: &str) -> Option<&Meal> {
        let name = name.to_lowercase();
        self.catalog.iter().find(|meal| meal.name.to_lowercase() == name)
    }

    /// Place a catalog meal on the grid. A snack slot appends to the day's
    /// snack list; any other slot replaces its current meal.
    pub fn assign_meal(
        &mut self,
        weekday: Weekday,
        meal_type: MealType,
        meal_name: &str,
    ) -> Result<(), StoreError> {
        let meal = self
            .find_meal(meal_name)
            .cloned()
            .ok_or_else(|| StoreError::MealNotFound(meal_name.to_string()))?;
        self.plan.set_meal(weekday, meal_type, meal);
        Ok(())
    }

    pub fn remove_meal(&mut self, weekday: Weekday, meal_type: MealType) -> Option<Meal> {
        self.plan.remove_meal(weekday, meal_type)
    }

    pub fn remove_snack(&mut self, weekday: Weekday, index: usize) -> Option<Meal> {
        self.plan.remove_snack(weekday, index)
    }

    /// Toggle a catalog meal's favorite flag, returning the new state.
    pub fn toggle_favorite(&mut self, meal_name: &str) -> Result<bool, StoreError> {
        let meal_id = self
            .find_meal(meal_name)
            .map(|meal| meal.id)
            .ok_or_else(|| StoreError::MealNotFound(meal_name.to_string()))?;
        if let Some(index) = self.favorites.iter().position(|id| *id == meal_id) {
            self.favorites.remove(index);
            Ok(false)
        } else {
            self.favorites.push(meal_id);
            Ok(true)
        }
    }

    pub fn is_favorite(&self, meal_id: Uuid) -> bool {
        self.favorites.contains(&meal_id)
    }

    /// Grocery drafts for every ingredient of every planned meal. Feeds
    /// the grocery list's one-shot import.
    pub fn grocery_items(&self) -> Vec<GroceryItem> {
        self.plan
            .days
            .iter()
            .flat_map(|day| day.all_meals())
            .flat_map(|meal| meal.ingredients.iter())
            .map(|ingredient| ingredient.to_grocery_item())
            .collect()
    }

    /// Start a fresh plan for the week containing `date`, leaving the
    /// catalog and favorites in place.
    pub fn start_new_week(&mut self, date: NaiveDate) {
        self.plan = WeeklyMealPlan::new(week_start(date));
    }
}
