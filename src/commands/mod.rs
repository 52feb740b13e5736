mod achievements;
mod auth_cmd;
mod budget;
mod config_cmd;
mod grocery;
mod influencer;
mod nutrition;
mod plan;

pub use achievements::AchievementsCommand;
pub use auth_cmd::AuthCommand;
pub use budget::BudgetCommand;
pub use config_cmd::ConfigCommand;
pub use grocery::GroceryCommand;
pub use influencer::InfluencerCommand;
pub use nutrition::NutritionCommand;
pub use plan::PlanCommand;
