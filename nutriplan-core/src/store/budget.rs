//! Budget state: per-category envelopes and the global totals.
//!
//! `total_budget` and `total_spent` are kept in lockstep with the category
//! rows rather than derived from them, mirroring how spending is recorded
//! at the point of sale. `recomputed_spent`/`recomputed_budget` expose the
//! ground truth so the lockstep invariant can be checked.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{BudgetCategory, SavingsSuggestion};
use crate::store::error::StoreError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetTracker {
    pub categories: Vec<BudgetCategory>,
    pub total_budget: f64,
    pub total_spent: f64,
    pub suggestions: Vec<SavingsSuggestion>,
}

impl BudgetTracker {
    pub fn add_category(&mut self, name: impl Into<String>, budget_amount: f64) -> Uuid {
        let category = BudgetCategory::new(name, budget_amount);
        let id = category.id;
        self.total_budget += budget_amount;
        self.categories.push(category);
        id
    }

    /// Record spending against a category, advancing both the category's
    /// counter and the global total by the same amount.
    pub fn add_spending(&mut self, category_id: Uuid, amount: f64) -> Result<(), StoreError> {
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or(StoreError::CategoryNotFound(category_id))?;
        category.spent_amount += amount;
        self.total_spent += amount;
        Ok(())
    }

    /// Change a category's budget, adjusting the global budget by the
    /// delta between the old and new amounts.
    pub fn update_category_budget(
        &mut self,
        category_id: Uuid,
        new_amount: f64,
    ) -> Result<(), StoreError> {
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or(StoreError::CategoryNotFound(category_id))?;
        let delta = new_amount - category.budget_amount;
        category.budget_amount = new_amount;
        self.total_budget += delta;
        Ok(())
    }

    pub fn remaining(&self) -> f64 {
        self.total_budget - self.total_spent
    }

    pub fn set_suggestions(&mut self, suggestions: Vec<SavingsSuggestion>) {
        self.suggestions = suggestions;
    }

    pub fn total_potential_savings(&self) -> f64 {
        self.suggestions.iter().map(|s| s.savings()).sum()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&BudgetCategory> {
        let name = name.to_lowercase();
        self.categories.iter().find(|c| c.name.to_lowercase() == name)
    }

    /// Ground-truth spend total from the category rows.
    pub fn recomputed_spent(&self) -> f64 {
        self.categories.iter().map(|c| c.spent_amount).sum()
    }

    /// Ground-truth budget total from the category rows.
    pub fn recomputed_budget(&self) -> f64 {
        self.categories.iter().map(|c| c.budget_amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_add_spending_updates_both_counters() {
        let mut tracker = BudgetTracker::default();
        let produce = tracker.add_category("Produce", 80.0);
        let pantry = tracker.add_category("Pantry", 50.0);

        tracker.add_spending(produce, 22.5).unwrap();
        tracker.add_spending(pantry, 10.0).unwrap();
        tracker.add_spending(produce, 5.0).unwrap();

        assert!((tracker.total_spent - 37.5).abs() < EPS);
        let produce_row = tracker.find_by_name("produce").unwrap();
        assert!((produce_row.spent_amount - 27.5).abs() < EPS);
    }

    #[test]
    fn test_lockstep_totals_match_recomputation() {
        let mut tracker = BudgetTracker::default();
        let a = tracker.add_category("Produce", 80.0);
        let b = tracker.add_category("Meat", 60.0);

        tracker.add_spending(a, 12.0).unwrap();
        tracker.add_spending(b, 45.0).unwrap();
        tracker.update_category_budget(a, 100.0).unwrap();

        assert!((tracker.total_spent - tracker.recomputed_spent()).abs() < EPS);
        assert!((tracker.total_budget - tracker.recomputed_budget()).abs() < EPS);
    }

    #[test]
    fn test_update_category_budget_adjusts_by_delta() {
        let mut tracker = BudgetTracker::default();
        let id = tracker.add_category("Produce", 80.0);
        tracker.add_category("Meat", 60.0);

        tracker.update_category_budget(id, 50.0).unwrap();
        assert!((tracker.total_budget - 110.0).abs() < EPS);
    }

    #[test]
    fn test_remaining() {
        let mut tracker = BudgetTracker::default();
        let id = tracker.add_category("Produce", 100.0);
        tracker.add_spending(id, 40.0).unwrap();
        assert!((tracker.remaining() - 60.0).abs() < EPS);
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let mut tracker = BudgetTracker::default();
        let missing = Uuid::new_v4();
        assert!(tracker.add_spending(missing, 5.0).is_err());
        assert!(tracker.update_category_budget(missing, 5.0).is_err());
    }

    #[test]
    fn test_total_potential_savings() {
        let mut tracker = BudgetTracker::default();
        tracker.set_suggestions(vec![
            SavingsSuggestion::new("Name-brand pasta", "Store-brand pasta", 3.0, 1.5),
            SavingsSuggestion::new("Bottled water", "Filter pitcher", 6.0, 2.0),
        ]);
        assert!((tracker.total_potential_savings() - 5.5).abs() < EPS);
    }
}
