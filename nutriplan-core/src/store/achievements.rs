//! Achievement state: fixed catalog, threshold evaluation and levels.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::models::{Achievement, AchievementKind, Rarity, UserStats, UserStatsUpdate};
use crate::store::error::StoreError;

const RECENT_UNLOCKS_CAP: usize = 5;

fn default_catalog() -> Vec<Achievement> {
    vec![
        Achievement::new("1", "First Steps", AchievementKind::Milestone, 1.0, 10, Rarity::Common)
            .with_description("Plan your first meal")
            .with_category("planning"),
        Achievement::new("2", "Week Warrior", AchievementKind::Streak, 7.0, 25, Rarity::Rare)
            .with_description("Log your meals seven days in a row")
            .with_category("nutrition"),
        Achievement::new("3", "Recipe Explorer", AchievementKind::Milestone, 10.0, 30, Rarity::Rare)
            .with_description("Try ten new recipes")
            .with_category("cooking"),
        Achievement::new("4", "Smart Shopper", AchievementKind::Milestone, 50.0, 40, Rarity::Epic)
            .with_description("Save $50 with budget suggestions")
            .with_category("budget"),
        Achievement::new("5", "Hydration Hero", AchievementKind::Streak, 14.0, 50, Rarity::Epic)
            .with_description("Hit your water goal fourteen days in a row")
            .with_category("nutrition"),
        Achievement::new("6", "Community Builder", AchievementKind::Milestone, 5.0, 20, Rarity::Common)
            .with_description("Follow five influencers")
            .with_category("social"),
    ]
}

/// The achievement slice.
///
/// Only achievements with a stat mapping in `stat_value` are evaluated
/// automatically on stats updates. The streak achievements ('2' and '5')
/// have no mapping and can only be unlocked through the manual `unlock`
/// path; both paths are deliberate and kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementBoard {
    pub achievements: Vec<Achievement>,
    pub stats: UserStats,
    pub total_points: u32,
    /// Most recent unlock first, capped at five entries.
    pub recent_unlocks: Vec<String>,
}

impl Default for AchievementBoard {
    fn default() -> Self {
        Self {
            achievements: default_catalog(),
            stats: UserStats::default(),
            total_points: 0,
            recent_unlocks: Vec::new(),
        }
    }
}

impl AchievementBoard {
    /// The stat backing an achievement id, if it has one.
    fn stat_value(stats: &UserStats, id: &str) -> Option<f64> {
        match id {
            "1" => Some(stats.meals_planned as f64),
            "3" => Some(stats.recipes_tried as f64),
            "4" => Some(stats.money_saved),
            "6" => Some(stats.influencers_followed as f64),
            _ => None,
        }
    }

    /// Merge a partial stats update, refresh each mapped achievement's
    /// progress, and unlock any that reached their target. Unlocking is
    /// monotonic; already-unlocked achievements are never re-evaluated.
    pub fn update_user_stats(&mut self, update: &UserStatsUpdate) {
        update.apply(&mut self.stats);

        let mut newly_unlocked = Vec::new();
        for achievement in self.achievements.iter_mut().filter(|a| !a.is_unlocked) {
            if let Some(value) = Self::stat_value(&self.stats, &achievement.id) {
                achievement.requirement.current = value;
                if achievement.requirement.is_met() {
                    newly_unlocked.push(achievement.id.clone());
                }
            }
        }
        for id in newly_unlocked {
            // Cannot fail: the id came from the catalog.
            let _ = self.unlock(&id);
        }
    }

    /// Manual unlock, also used by the streak achievements that have no
    /// stat mapping. Idempotent for already-unlocked achievements.
    pub fn unlock(&mut self, id: &str) -> Result<(), StoreError> {
        let achievement = self
            .achievements
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::AchievementNotFound(id.to_string()))?;
        if achievement.is_unlocked {
            return Ok(());
        }
        achievement.is_unlocked = true;
        achievement.unlocked_date = Some(Local::now().date_naive());
        self.total_points += achievement.points;
        tracing::info!(
            "Unlocked achievement '{}' (+{} points)",
            achievement.title,
            achievement.points
        );
        self.recent_unlocks.insert(0, achievement.id.clone());
        self.recent_unlocks.truncate(RECENT_UNLOCKS_CAP);
        Ok(())
    }

    pub fn level(&self) -> u32 {
        self.total_points / 100 + 1
    }

    pub fn points_to_next_level(&self) -> u32 {
        self.level() * 100 - self.total_points
    }

    pub fn unlocked(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter().filter(|a| a.is_unlocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_steps_unlock_scenario() {
        let mut board = AchievementBoard::default();
        board.update_user_stats(&UserStatsUpdate {
            meals_planned: Some(1),
            ..Default::default()
        });

        let first = board.achievements.iter().find(|a| a.id == "1").unwrap();
        assert!(first.is_unlocked);
        assert!(first.unlocked_date.is_some());
        assert_eq!(board.total_points, 10);
        assert_eq!(board.recent_unlocks[0], "1");
    }

    #[test]
    fn test_unlock_is_monotonic() {
        let mut board = AchievementBoard::default();
        board.update_user_stats(&UserStatsUpdate {
            meals_planned: Some(1),
            ..Default::default()
        });
        board.update_user_stats(&UserStatsUpdate {
            meals_planned: Some(0),
            ..Default::default()
        });

        let first = board.achievements.iter().find(|a| a.id == "1").unwrap();
        assert!(first.is_unlocked);
        assert_eq!(board.total_points, 10);
    }

    #[test]
    fn test_progress_refreshed_without_unlock() {
        let mut board = AchievementBoard::default();
        board.update_user_stats(&UserStatsUpdate {
            recipes_tried: Some(4),
            ..Default::default()
        });

        let explorer = board.achievements.iter().find(|a| a.id == "3").unwrap();
        assert!(!explorer.is_unlocked);
        assert_eq!(explorer.requirement.current, 4.0);
    }

    #[test]
    fn test_streak_achievements_never_auto_unlock() {
        let mut board = AchievementBoard::default();
        board.update_user_stats(&UserStatsUpdate {
            meals_planned: Some(100),
            recipes_tried: Some(100),
            money_saved: Some(1000.0),
            influencers_followed: Some(100),
            grocery_lists_completed: Some(100),
        });

        for id in ["2", "5"] {
            let a = board.achievements.iter().find(|a| a.id == id).unwrap();
            assert!(!a.is_unlocked, "streak achievement {} must stay locked", id);
            assert_eq!(a.requirement.current, 0.0);
        }
    }

    #[test]
    fn test_manual_unlock_path() {
        let mut board = AchievementBoard::default();
        board.unlock("2").unwrap();
        assert_eq!(board.total_points, 25);

        // Idempotent: unlocking again adds no points.
        board.unlock("2").unwrap();
        assert_eq!(board.total_points, 25);

        assert!(board.unlock("99").is_err());
    }

    #[test]
    fn test_level_formula() {
        let mut board = AchievementBoard::default();
        assert_eq!(board.level(), 1);
        assert_eq!(board.points_to_next_level(), 100);

        board.total_points = 99;
        assert_eq!(board.level(), 1);
        assert_eq!(board.points_to_next_level(), 1);

        board.total_points = 100;
        assert_eq!(board.level(), 2);
        assert_eq!(board.points_to_next_level(), 100);

        board.total_points = 175;
        assert_eq!(board.level(), 2);
        assert_eq!(board.points_to_next_level(), 25);
    }

    #[test]
    fn test_recent_unlocks_capped_at_five() {
        let mut board = AchievementBoard::default();
        for id in ["1", "2", "3", "4", "5", "6"] {
            board.unlock(id).unwrap();
        }
        assert_eq!(board.recent_unlocks.len(), 5);
        assert_eq!(board.recent_unlocks[0], "6");
        assert!(!board.recent_unlocks.contains(&"1".to_string()));
    }

    #[test]
    fn test_multiple_unlocks_in_one_update() {
        let mut board = AchievementBoard::default();
        board.update_user_stats(&UserStatsUpdate {
            meals_planned: Some(3),
            influencers_followed: Some(5),
            ..Default::default()
        });
        assert_eq!(board.total_points, 30);
        assert_eq!(board.recent_unlocks.len(), 2);
    }
}
