//! State containers ("slices") and the aggregate application state.
//!
//! Each slice is a plain struct mutated through `&mut self` methods; there
//! are no ambient singletons. Mutations run to completion before the next
//! one is dispatched, so no locking is involved. Cross-slice effects are
//! explicit one-shot copies on `AppState` rather than hidden couplings.

mod achievements;
mod auth;
mod budget;
mod error;
mod grocery;
mod influencers;
mod meal_plan;
mod nutrition;

pub use achievements::AchievementBoard;
pub use auth::{InfluencerRegistration, Session};
pub use budget::BudgetTracker;
pub use error::StoreError;
pub use grocery::GroceryList;
pub use influencers::InfluencerHub;
pub use meal_plan::MealPlanner;
pub use nutrition::NutritionLog;

use serde::{Deserialize, Serialize};

use crate::models::UserStatsUpdate;

/// The whole application state, one field per slice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub grocery: GroceryList,
    pub nutrition: NutritionLog,
    pub planner: MealPlanner,
    pub budget: BudgetTracker,
    pub achievements: AchievementBoard,
    pub influencers: InfluencerHub,
    pub session: Session,
}

impl AppState {
    /// Copy every planned meal's ingredients onto the grocery list,
    /// merging lines that already exist. Returns how many drafts were
    /// imported.
    pub fn import_plan_to_grocery(&mut self) -> usize {
        let items = self.planner.grocery_items();
        let count = items.len();
        self.grocery.import_from_meal_plan(items);
        count
    }

    /// Count a newly planned meal toward achievement progress.
    pub fn record_meal_planned(&mut self) {
        let planned = self.achievements.stats.meals_planned + 1;
        self.achievements.update_user_stats(&UserStatsUpdate {
            meals_planned: Some(planned),
            ..Default::default()
        });
    }

    /// Count a new follow toward achievement progress.
    pub fn record_influencer_followed(&mut self) {
        let followed = self.influencers.followed.len() as u32;
        self.achievements.update_user_stats(&UserStatsUpdate {
            influencers_followed: Some(followed),
            ..Default::default()
        });
    }

    /// Fold realized savings into achievement progress.
    pub fn record_money_saved(&mut self, amount: f64) {
        let saved = self.achievements.stats.money_saved + amount;
        self.achievements.update_user_stats(&UserStatsUpdate {
            money_saved: Some(saved),
            ..Default::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;
    use chrono::Weekday;

    #[test]
    fn test_import_plan_to_grocery_is_one_shot() {
        let mut state = AppState::default();
        state
            .planner
            .assign_meal(Weekday::Mon, MealType::Breakfast, "Overnight Oats")
            .unwrap();

        let imported = state.import_plan_to_grocery();
        assert_eq!(imported, 3);
        assert_eq!(state.grocery.items.len(), 3);

        // Importing again merges into existing lines instead of duplicating.
        state.import_plan_to_grocery();
        assert_eq!(state.grocery.items.len(), 3);
        let oats = state.grocery.find_by_name("Rolled oats").unwrap();
        assert_eq!(oats.quantity, 1.0);
    }

    #[test]
    fn test_record_meal_planned_feeds_achievements() {
        let mut state = AppState::default();
        state.record_meal_planned();
        assert_eq!(state.achievements.stats.meals_planned, 1);
        assert!(state
            .achievements
            .achievements
            .iter()
            .find(|a| a.id == "1")
            .unwrap()
            .is_unlocked);
    }

    #[test]
    fn test_record_money_saved_accumulates() {
        let mut state = AppState::default();
        state.record_money_saved(30.0);
        state.record_money_saved(25.0);
        assert_eq!(state.achievements.stats.money_saved, 55.0);
        assert!(state
            .achievements
            .achievements
            .iter()
            .find(|a| a.id == "4")
            .unwrap()
            .is_unlocked);
    }

    #[test]
    fn test_app_state_json_roundtrip() {
        let mut state = AppState::default();
        state.record_meal_planned();
        let json = serde_json::to_string(&state).unwrap();
        let parsed: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.achievements.total_points, state.achievements.total_points);
        assert_eq!(parsed.grocery.categories, state.grocery.categories);
    }
}
