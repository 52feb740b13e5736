use thiserror::Error;
use uuid::Uuid;

/// Errors returned by store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Grocery item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("Budget category not found: {0}")]
    CategoryNotFound(Uuid),

    #[error("Influencer not found: {0}")]
    InfluencerNotFound(Uuid),

    #[error("Achievement not found: {0}")]
    AchievementNotFound(String),

    #[error("Nutrition entry not found: {0}")]
    EntryNotFound(Uuid),

    #[error("Water intake not found: {0}")]
    WaterIntakeNotFound(Uuid),

    #[error("Meal not found in catalog: {0}")]
    MealNotFound(String),

    #[error("{0}")]
    AuthFailed(String),

    #[error("{0}")]
    RequestFailed(String),
}
