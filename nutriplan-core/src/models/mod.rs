mod achievement;
mod budget;
mod grocery;
mod influencer;
mod meal;
mod meal_plan;
mod meal_type;
mod nutrition;
mod user;

pub use achievement::{Achievement, AchievementKind, Rarity, Requirement, UserStats, UserStatsUpdate};
pub use budget::{BudgetCategory, SavingsSuggestion};
pub use grocery::{
    GroceryItem, GroceryItemUpdate, ItemFilters, PriceComparison, PriceLevel, SortKey, SortOrder,
    Store, StorePrice,
};
pub use influencer::{Influencer, InfluencerMealPlan};
pub use meal::{Meal, MealIngredient};
pub use meal_plan::{DayMeals, WeeklyMealPlan};
pub use meal_type::MealType;
pub use nutrition::{
    DailySummary, NutritionEntry, NutritionEntryUpdate, NutritionGoals, NutritionInfo, Streaks,
    WaterIntake,
};
pub use user::{InfluencerProfile, User, UserRole, UserUpdate};
