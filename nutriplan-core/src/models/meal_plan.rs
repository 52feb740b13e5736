use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::meal::Meal;
use super::meal_type::MealType;

/// Meals planned for one day of the week. Breakfast, lunch and dinner are
/// single slots; snacks are an ordered list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayMeals {
    pub breakfast: Option<Meal>,
    pub lunch: Option<Meal>,
    pub dinner: Option<Meal>,
    pub snacks: Vec<Meal>,
}

impl DayMeals {
    /// Single-meal slot for a meal type. Snacks are not a single slot.
    pub fn slot(&self, meal_type: MealType) -> Option<&Meal> {
        match meal_type {
            MealType::Breakfast => self.breakfast.as_ref(),
            MealType::Lunch => self.lunch.as_ref(),
            MealType::Dinner => self.dinner.as_ref(),
            MealType::Snack => None,
        }
    }

    /// Every meal planned for the day, snacks included.
    pub fn all_meals(&self) -> impl Iterator<Item = &Meal> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
            .chain(self.snacks.iter())
    }
}

/// The weekly plan grid: day x meal slot.
///
/// `total_calories` is a running accumulator adjusted on every assign and
/// remove rather than recomputed from the grid. Every mutation must go
/// through the methods below or the accumulator drifts;
/// `recomputed_calories` exists so callers and tests can check it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyMealPlan {
    pub id: Uuid,
    /// Monday of the planned week.
    pub start_date: NaiveDate,
    /// Indexed by `Weekday::num_days_from_monday()`.
    pub days: [DayMeals; 7],
    pub total_calories: f64,
}

impl WeeklyMealPlan {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_date,
            days: Default::default(),
            total_calories: 0.0,
        }
    }

    pub fn day(&self, weekday: Weekday) -> &DayMeals {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    fn day_mut(&mut self, weekday: Weekday) -> &mut DayMeals {
        &mut self.days[weekday.num_days_from_monday() as usize]
    }

    /// Place a meal in a single slot, returning the meal it replaced.
    /// Snacks go through `add_snack` instead.
    pub fn set_meal(&mut self, weekday: Weekday, meal_type: MealType, meal: Meal) -> Option<Meal> {
        if meal_type == MealType::Snack {
            self.add_snack(weekday, meal);
            return None;
        }
        let added = meal.calories;
        let day = self.day_mut(weekday);
        let slot = match meal_type {
            MealType::Breakfast => &mut day.breakfast,
            MealType::Lunch => &mut day.lunch,
            MealType::Dinner => &mut day.dinner,
            MealType::Snack => unreachable!(),
        };
        let previous = slot.replace(meal);
        self.total_calories += added;
        if let Some(old) = &previous {
            self.total_calories -= old.calories;
        }
        previous
    }

    /// Clear a single slot, returning the removed meal if the slot was set.
    pub fn remove_meal(&mut self, weekday: Weekday, meal_type: MealType) -> Option<Meal> {
        let day = self.day_mut(weekday);
        let removed = match meal_type {
            MealType::Breakfast => day.breakfast.take(),
            MealType::Lunch => day.lunch.take(),
            MealType::Dinner => day.dinner.take(),
            MealType::Snack => None,
        };
        if let Some(meal) = &removed {
            self.total_calories -= meal.calories;
        }
        removed
    }

    pub fn add_snack(&mut self, weekday: Weekday, meal: Meal) {
        self.total_calories += meal.calories;
        self.day_mut(weekday).snacks.push(meal);
    }

    pub fn remove_snack(&mut self, weekday: Weekday, index: usize) -> Option<Meal> {
        let day = self.day_mut(weekday);
        if index >= day.snacks.len() {
            return None;
        }
        let meal = day.snacks.remove(index);
        self.total_calories -= meal.calories;
        Some(meal)
    }

    /// Ground-truth calorie total from the grid itself.
    pub fn recomputed_calories(&self) -> f64 {
        self.days
            .iter()
            .flat_map(|day| day.all_meals())
            .map(|meal| meal.calories)
            .sum()
    }
}

impl fmt::Display for WeeklyMealPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Week of {}", self.start_date)?;
        writeln!(f, "{}", "=".repeat(30))?;
        let weekdays = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        for weekday in weekdays {
            let day = self.day(weekday);
            writeln!(f, "{}:", weekday)?;
            for meal_type in MealType::all() {
                if meal_type == MealType::Snack {
                    for snack in &day.snacks {
                        writeln!(f, "  {}: {}", meal_type, snack)?;
                    }
                } else if let Some(meal) = day.slot(meal_type) {
                    writeln!(f, "  {}: {}", meal_type, meal)?;
                }
            }
        }
        writeln!(f, "Total: {:.0} kcal", self.total_calories)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> WeeklyMealPlan {
        WeeklyMealPlan::new("2024-01-01".parse().unwrap())
    }

    #[test]
    fn test_set_meal_accumulates_calories() {
        let mut plan = plan();
        plan.set_meal(Weekday::Mon, MealType::Breakfast, Meal::new("Oats", 300.0));
        plan.set_meal(Weekday::Mon, MealType::Dinner, Meal::new("Curry", 650.0));
        assert_eq!(plan.total_calories, 950.0);
    }

    #[test]
    fn test_replacing_meal_adjusts_by_delta() {
        let mut plan = plan();
        plan.set_meal(Weekday::Tue, MealType::Lunch, Meal::new("Wrap", 450.0));
        let previous = plan.set_meal(Weekday::Tue, MealType::Lunch, Meal::new("Soup", 250.0));
        assert_eq!(previous.unwrap().name, "Wrap");
        assert_eq!(plan.total_calories, 250.0);
    }

    #[test]
    fn test_remove_meal() {
        let mut plan = plan();
        plan.set_meal(Weekday::Wed, MealType::Dinner, Meal::new("Tacos", 700.0));
        let removed = plan.remove_meal(Weekday::Wed, MealType::Dinner);
        assert_eq!(removed.unwrap().name, "Tacos");
        assert_eq!(plan.total_calories, 0.0);
        assert!(plan.remove_meal(Weekday::Wed, MealType::Dinner).is_none());
    }

    #[test]
    fn test_snacks_are_a_list() {
        let mut plan = plan();
        plan.add_snack(Weekday::Fri, Meal::new("Apple", 95.0));
        plan.set_meal(Weekday::Fri, MealType::Snack, Meal::new("Yogurt", 120.0));
        assert_eq!(plan.day(Weekday::Fri).snacks.len(), 2);
        assert_eq!(plan.total_calories, 215.0);

        let removed = plan.remove_snack(Weekday::Fri, 0);
        assert_eq!(removed.unwrap().name, "Apple");
        assert_eq!(plan.total_calories, 120.0);
        assert!(plan.remove_snack(Weekday::Fri, 5).is_none());
    }

    #[test]
    fn test_accumulator_matches_recomputation() {
        let mut plan = plan();
        plan.set_meal(Weekday::Mon, MealType::Breakfast, Meal::new("Oats", 300.0));
        plan.set_meal(Weekday::Mon, MealType::Breakfast, Meal::new("Eggs", 350.0));
        plan.add_snack(Weekday::Tue, Meal::new("Banana", 105.0));
        plan.remove_snack(Weekday::Tue, 0);
        plan.set_meal(Weekday::Sun, MealType::Dinner, Meal::new("Roast", 800.0));
        plan.remove_meal(Weekday::Sun, MealType::Dinner);
        assert_eq!(plan.total_calories, plan.recomputed_calories());
    }

    #[test]
    fn test_display_orders_slots_within_a_day() {
        let mut plan = plan();
        plan.add_snack(Weekday::Mon, Meal::new("Apple", 95.0));
        plan.set_meal(Weekday::Mon, MealType::Dinner, Meal::new("Curry", 650.0));
        plan.set_meal(Weekday::Mon, MealType::Breakfast, Meal::new("Oats", 300.0));

        let text = format!("{}", plan);
        let breakfast = text.find("breakfast: Oats").unwrap();
        let dinner = text.find("dinner: Curry").unwrap();
        let snack = text.find("snack: Apple").unwrap();
        assert!(breakfast < dinner);
        assert!(dinner < snack);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut plan = plan();
        plan.set_meal(Weekday::Mon, MealType::Lunch, Meal::new("Wrap", 450.0));
        let json = serde_json::to_string(&plan).unwrap();
        let parsed: WeeklyMealPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_calories, 450.0);
        assert_eq!(parsed.day(Weekday::Mon).lunch.as_ref().unwrap().name, "Wrap");
    }
}
