//! Nutriplan Core Library
//!
//! Domain models and state containers shared by Nutriplan applications.

pub mod models;
pub mod store;

pub use models::{
    Achievement, AchievementKind, BudgetCategory, DailySummary, DayMeals, GroceryItem,
    GroceryItemUpdate, Influencer, InfluencerMealPlan, InfluencerProfile, ItemFilters, Meal,
    MealIngredient, MealType, NutritionEntry, NutritionEntryUpdate, NutritionGoals, NutritionInfo,
    PriceComparison, PriceLevel, Rarity, Requirement, SavingsSuggestion, SortKey, SortOrder,
    Store, StorePrice, Streaks, User, UserRole, UserStats, UserStatsUpdate, UserUpdate,
    WaterIntake, WeeklyMealPlan,
};
pub use store::{
    AchievementBoard, AppState, BudgetTracker, GroceryList, InfluencerHub, InfluencerRegistration,
    MealPlanner, NutritionLog, Session, StoreError,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
