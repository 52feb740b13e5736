use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A spending envelope for one grocery category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: Uuid,
    pub name: String,
    pub budget_amount: f64,
    pub spent_amount: f64,
}

impl BudgetCategory {
    pub fn new(name: impl Into<String>, budget_amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            budget_amount,
            spent_amount: 0.0,
        }
    }

    pub fn remaining(&self) -> f64 {
        self.budget_amount - self.spent_amount
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent_amount > self.budget_amount
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ${:.2} / ${:.2} (${:.2} left)",
            self.name,
            self.spent_amount,
            self.budget_amount,
            self.remaining()
        )
    }
}

/// A cheaper-alternative suggestion for an item on the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsSuggestion {
    pub item_name: String,
    pub alternative_name: String,
    pub price: f64,
    pub alternative_price: f64,
}

impl SavingsSuggestion {
    pub fn new(
        item_name: impl Into<String>,
        alternative_name: impl Into<String>,
        price: f64,
        alternative_price: f64,
    ) -> Self {
        Self {
            item_name: item_name.into(),
            alternative_name: alternative_name.into(),
            price,
            alternative_price,
        }
    }

    pub fn savings(&self) -> f64 {
        self.price - self.alternative_price
    }
}

impl fmt::Display for SavingsSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (save ${:.2})",
            self.item_name,
            self.alternative_name,
            self.savings()
        )
    }
}
