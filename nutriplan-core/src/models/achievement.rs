use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an achievement is earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    Milestone,
    Streak,
    Challenge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rarity::Common => write!(f, "common"),
            Rarity::Rare => write!(f, "rare"),
            Rarity::Epic => write!(f, "epic"),
            Rarity::Legendary => write!(f, "legendary"),
        }
    }
}

/// Progress toward an achievement. `current` is refreshed from user stats
/// on every stats update; the achievement unlocks when it reaches `target`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub target: f64,
    pub current: f64,
}

impl Requirement {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            current: 0.0,
        }
    }

    pub fn is_met(&self) -> bool {
        self.current >= self.target
    }
}

/// An entry in the fixed achievement catalog.
///
/// Unlocking is monotonic: once `is_unlocked` is set it is never cleared,
/// no matter how the underlying stats move afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub kind: AchievementKind,
    pub requirement: Requirement,
    pub points: u32,
    pub rarity: Rarity,
    pub is_unlocked: bool,
    pub unlocked_date: Option<NaiveDate>,
}

impl Achievement {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: AchievementKind,
        target: f64,
        points: u32,
        rarity: Rarity,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: "general".to_string(),
            kind,
            requirement: Requirement::new(target),
            points,
            rarity,
            is_unlocked: false,
            unlocked_date: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_unlocked { "*" } else { " " };
        write!(
            f,
            "[{}] {} ({} pts, {}) - {:.0}/{:.0}",
            mark,
            self.title,
            self.points,
            self.rarity,
            self.requirement.current,
            self.requirement.target
        )
    }
}

/// Counters that drive achievement thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UserStats {
    pub meals_planned: u32,
    pub recipes_tried: u32,
    pub money_saved: f64,
    pub influencers_followed: u32,
    pub grocery_lists_completed: u32,
}

/// Partial stats update. `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserStatsUpdate {
    pub meals_planned: Option<u32>,
    pub recipes_tried: Option<u32>,
    pub money_saved: Option<f64>,
    pub influencers_followed: Option<u32>,
    pub grocery_lists_completed: Option<u32>,
}

impl UserStatsUpdate {
    pub fn apply(&self, stats: &mut UserStats) {
        if let Some(v) = self.meals_planned {
            stats.meals_planned = v;
        }
        if let Some(v) = self.recipes_tried {
            stats.recipes_tried = v;
        }
        if let Some(v) = self.money_saved {
            stats.money_saved = v;
        }
        if let Some(v) = self.influencers_followed {
            stats.influencers_followed = v;
        }
        if let Some(v) = self.grocery_lists_completed {
            stats.grocery_lists_completed = v;
        }
    }
}
