//! Nutrition log state: entries, water intakes and the derived daily
//! summaries and streaks.
//!
//! Summaries are derived-on-write: every entry or water mutation rebuilds
//! the affected date's summary in full and then recomputes streaks, so the
//! mutation and its derived state land together.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    DailySummary, NutritionEntry, NutritionEntryUpdate, NutritionGoals, Streaks, WaterIntake,
};
use crate::store::error::StoreError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionLog {
    pub entries: Vec<NutritionEntry>,
    pub water_intakes: Vec<WaterIntake>,
    /// Kept sorted by date descending; re-sorted after every recompute.
    pub daily_summaries: Vec<DailySummary>,
    pub goals: NutritionGoals,
    pub streaks: Streaks,
}

impl NutritionLog {
    pub fn add_entry(&mut self, entry: NutritionEntry) -> Uuid {
        let id = entry.id;
        let date = entry.date;
        self.entries.push(entry);
        self.refresh(date);
        id
    }

    /// Apply a partial update. If the update moves the entry to another
    /// date, both the old and the new date's summaries are rebuilt.
    pub fn update_entry(
        &mut self,
        id: Uuid,
        update: &NutritionEntryUpdate,
    ) -> Result<(), StoreError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(StoreError::EntryNotFound(id))?;
        let old_date = entry.date;
        update.apply(entry);
        let new_date = entry.date;
        self.update_daily_summary(old_date);
        if new_date != old_date {
            self.update_daily_summary(new_date);
        }
        self.update_streaks();
        Ok(())
    }

    /// Remove an entry. The date's summary is rebuilt and persists as a
    /// zeroed summary even when this was the last entry for the date.
    pub fn remove_entry(&mut self, id: Uuid) -> Result<NutritionEntry, StoreError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(StoreError::EntryNotFound(id))?;
        let entry = self.entries.remove(index);
        self.refresh(entry.date);
        Ok(entry)
    }

    pub fn add_water(&mut self, intake: WaterIntake) -> Uuid {
        let id = intake.id;
        let date = intake.date;
        self.water_intakes.push(intake);
        self.refresh(date);
        id
    }

    pub fn remove_water(&mut self, id: Uuid) -> Result<WaterIntake, StoreError> {
        let index = self
            .water_intakes
            .iter()
            .position(|intake| intake.id == id)
            .ok_or(StoreError::WaterIntakeNotFound(id))?;
        let intake = self.water_intakes.remove(index);
        self.refresh(intake.date);
        Ok(intake)
    }

    pub fn set_goals(&mut self, goals: NutritionGoals) {
        self.goals = goals;
        self.update_streaks();
    }

    fn refresh(&mut self, date: NaiveDate) {
        self.update_daily_summary(date);
        self.update_streaks();
    }

    /// Rebuild the summary for one date from scratch: sum every entry and
    /// water intake matching the date, overwrite any existing summary for
    /// it, and re-sort the collection descending by date.
    pub fn update_daily_summary(&mut self, date: NaiveDate) {
        let mut summary = DailySummary::empty(date);
        for entry in self.entries.iter().filter(|entry| entry.date == date) {
            summary.total_calories += entry.nutrition.calories;
            summary.total_protein += entry.nutrition.protein;
            summary.total_carbs += entry.nutrition.carbs;
            summary.total_fat += entry.nutrition.fat;
            summary.total_fiber += entry.nutrition.fiber;
            summary.total_sugar += entry.nutrition.sugar;
            summary.total_sodium += entry.nutrition.sodium;
            summary.meals_logged += 1;
        }
        for intake in self.water_intakes.iter().filter(|intake| intake.date == date) {
            summary.water_intake_ml += intake.amount_ml;
        }

        match self
            .daily_summaries
            .iter_mut()
            .find(|existing| existing.date == date)
        {
            Some(existing) => *existing = summary,
            None => self.daily_summaries.push(summary),
        }
        self.daily_summaries.sort_by(|a, b| b.date.cmp(&a.date));
    }

    pub fn summary_for(&self, date: NaiveDate) -> Option<&DailySummary> {
        self.daily_summaries.iter().find(|s| s.date == date)
    }

    /// Recount every streak by walking back one day at a time from the most
    /// recent summary. Each metric stops at the first day that fails its
    /// own condition; a date with no summary at all breaks every streak
    /// still being counted, same as a present-but-failing day.
    pub fn update_streaks(&mut self) {
        let mut streaks = Streaks::default();
        let Some(latest) = self.daily_summaries.first() else {
            self.streaks = streaks;
            return;
        };

        let mut calorie_alive = true;
        let mut protein_alive = true;
        let mut water_alive = true;
        let mut logging_alive = true;

        let mut date = latest.date;
        loop {
            let Some(summary) = self.summary_for(date) else {
                break;
            };

            if calorie_alive {
                let goal = self.goals.calories;
                if goal > 0.0 && (summary.total_calories - goal).abs() <= goal * 0.10 {
                    streaks.calorie_goal += 1;
                } else {
                    calorie_alive = false;
                }
            }
            if protein_alive {
                if summary.total_protein >= self.goals.protein * 0.80 {
                    streaks.protein_goal += 1;
                } else {
                    protein_alive = false;
                }
            }
            if water_alive {
                if summary.water_intake_ml >= self.goals.water_ml {
                    streaks.water_goal += 1;
                } else {
                    water_alive = false;
                }
            }
            if logging_alive {
                if summary.meals_logged >= 3 {
                    streaks.logging += 1;
                } else {
                    logging_alive = false;
                }
            }

            if !(calorie_alive || protein_alive || water_alive || logging_alive) {
                break;
            }
            date = date - Duration::days(1);
        }

        self.streaks = streaks;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealType, NutritionInfo};
    use chrono::NaiveTime;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn entry(d: &str, calories: f64) -> NutritionEntry {
        NutritionEntry::new(
            date(d),
            MealType::Lunch,
            "Test food",
            NutritionInfo::new(calories, 20.0, 40.0, 10.0),
        )
    }

    fn water(d: &str, ml: f64) -> WaterIntake {
        WaterIntake::new(date(d), ml, NaiveTime::from_hms_opt(9, 0, 0).unwrap())
    }

    #[test]
    fn test_summary_sums_entries_for_date() {
        let mut log = NutritionLog::default();
        log.add_entry(entry("2024-01-01", 300.0));
        log.add_entry(entry("2024-01-01", 500.0));
        log.add_entry(entry("2024-01-02", 999.0));

        let summary = log.summary_for(date("2024-01-01")).unwrap();
        assert_eq!(summary.total_calories, 800.0);
        assert_eq!(summary.total_protein, 40.0);
        assert_eq!(summary.meals_logged, 2);
    }

    #[test]
    fn test_water_contributes_to_summary() {
        let mut log = NutritionLog::default();
        log.add_entry(entry("2024-01-01", 300.0));
        log.add_water(water("2024-01-01", 500.0));
        log.add_water(water("2024-01-01", 250.0));

        let summary = log.summary_for(date("2024-01-01")).unwrap();
        assert_eq!(summary.water_intake_ml, 750.0);
        assert_eq!(summary.meals_logged, 1);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut log = NutritionLog::default();
        log.add_entry(entry("2024-01-01", 300.0));
        log.add_entry(entry("2024-01-01", 450.0));

        log.update_daily_summary(date("2024-01-01"));
        let first = log.summary_for(date("2024-01-01")).unwrap().clone();
        log.update_daily_summary(date("2024-01-01"));
        let second = log.summary_for(date("2024-01-01")).unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(log.daily_summaries.len(), 1);
    }

    #[test]
    fn test_removing_last_entry_leaves_zeroed_summary() {
        let mut log = NutritionLog::default();
        let id = log.add_entry(entry("2024-01-01", 300.0));
        log.remove_entry(id).unwrap();

        let summary = log.summary_for(date("2024-01-01")).unwrap();
        assert_eq!(summary.total_calories, 0.0);
        assert_eq!(summary.meals_logged, 0);
    }

    #[test]
    fn test_date_change_recomputes_both_days() {
        let mut log = NutritionLog::default();
        let id = log.add_entry(entry("2024-01-01", 300.0));
        log.add_entry(entry("2024-01-01", 200.0));

        let update = NutritionEntryUpdate {
            date: Some(date("2024-01-02")),
            ..Default::default()
        };
        log.update_entry(id, &update).unwrap();

        assert_eq!(log.summary_for(date("2024-01-01")).unwrap().total_calories, 200.0);
        assert_eq!(log.summary_for(date("2024-01-02")).unwrap().total_calories, 300.0);
    }

    #[test]
    fn test_summaries_sorted_descending() {
        let mut log = NutritionLog::default();
        log.add_entry(entry("2024-01-01", 100.0));
        log.add_entry(entry("2024-01-03", 100.0));
        log.add_entry(entry("2024-01-02", 100.0));

        let dates: Vec<NaiveDate> = log.daily_summaries.iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![date("2024-01-03"), date("2024-01-02"), date("2024-01-01")]);
    }

    #[test]
    fn test_streaks_count_independently() {
        let mut log = NutritionLog::default();
        log.set_goals(NutritionGoals {
            calories: 2000.0,
            protein: 100.0,
            water_ml: 2000.0,
            ..Default::default()
        });

        // Day 2 (most recent): hits calories and protein, misses water.
        for _ in 0..3 {
            log.add_entry(NutritionEntry::new(
                date("2024-01-02"),
                MealType::Lunch,
                "Bowl",
                NutritionInfo::new(660.0, 30.0, 50.0, 20.0),
            ));
        }
        // Day 1: hits protein and water only (calories far under goal).
        log.add_entry(NutritionEntry::new(
            date("2024-01-01"),
            MealType::Dinner,
            "Steak",
            NutritionInfo::new(700.0, 90.0, 5.0, 40.0),
        ));
        log.add_water(water("2024-01-01", 2500.0));

        // calories: day 2 within +-10% (1980 vs 2000), day 1 fails -> 1
        assert_eq!(log.streaks.calorie_goal, 1);
        // protein: day 2 has 90 >= 80, day 1 has 90 >= 80, day 0 missing -> 2
        assert_eq!(log.streaks.protein_goal, 2);
        // water: day 2 has none -> 0
        assert_eq!(log.streaks.water_goal, 0);
        // logging: day 2 has 3 meals, day 1 only 1 -> 1
        assert_eq!(log.streaks.logging, 1);
    }

    #[test]
    fn test_missing_day_breaks_streak() {
        let mut log = NutritionLog::default();
        log.set_goals(NutritionGoals {
            protein: 100.0,
            ..Default::default()
        });

        let high_protein = |d: &str| {
            NutritionEntry::new(
                date(d),
                MealType::Dinner,
                "Chicken",
                NutritionInfo::new(500.0, 120.0, 10.0, 15.0),
            )
        };
        log.add_entry(high_protein("2024-01-05"));
        // 2024-01-04 has no summary at all.
        log.add_entry(high_protein("2024-01-03"));

        assert_eq!(log.streaks.protein_goal, 1);
    }

    #[test]
    fn test_streaks_start_at_most_recent_summary() {
        // The walk starts at the newest summary, not "today".
        let mut log = NutritionLog::default();
        log.set_goals(NutritionGoals {
            protein: 100.0,
            ..Default::default()
        });
        for d in ["2020-06-02", "2020-06-01"] {
            log.add_entry(NutritionEntry::new(
                date(d),
                MealType::Lunch,
                "Lentils",
                NutritionInfo::new(400.0, 85.0, 60.0, 5.0),
            ));
        }
        assert_eq!(log.streaks.protein_goal, 2);
    }

    #[test]
    fn test_no_summaries_means_zero_streaks() {
        let mut log = NutritionLog::default();
        log.update_streaks();
        assert_eq!(log.streaks, Streaks::default());
    }
}
