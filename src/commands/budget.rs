use clap::{Args, Subcommand};

use nutriplan_core::{AppState, SavingsSuggestion, StoreError};

#[derive(Args)]
pub struct BudgetCommand {
    #[command(subcommand)]
    pub command: BudgetSubcommand,
}

#[derive(Subcommand)]
pub enum BudgetSubcommand {
    /// Add a budget category
    AddCategory {
        /// Category name
        name: String,

        /// Budget amount in dollars
        amount: f64,
    },

    /// Record spending against a category
    Spend {
        /// Category name
        category: String,

        /// Amount spent in dollars
        amount: f64,
    },

    /// Change a category's budget
    SetBudget {
        /// Category name
        category: String,

        /// New budget amount in dollars
        amount: f64,
    },

    /// Show budget status
    Status,

    /// Add a cheaper-alternative suggestion
    Suggest {
        /// Item to replace
        item: String,

        /// Cheaper alternative
        alternative: String,

        /// Current price
        price: f64,

        /// Alternative price
        alternative_price: f64,
    },

    /// List savings suggestions
    Suggestions,

    /// Record realized savings (counts toward achievements)
    RecordSavings {
        /// Amount saved in dollars
        amount: f64,
    },
}

impl BudgetCommand {
    pub fn run(&self, state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            BudgetSubcommand::AddCategory { name, amount } => {
                state.budget.add_category(name.clone(), *amount);
                println!("Added category {} (${:.2})", name, amount);
                Ok(())
            }
            BudgetSubcommand::Spend { category, amount } => {
                let id = find_category(state, category)?;
                state.budget.add_spending(id, *amount)?;
                println!("Recorded ${:.2} against {}", amount, category);
                Ok(())
            }
            BudgetSubcommand::SetBudget { category, amount } => {
                let id = find_category(state, category)?;
                state.budget.update_category_budget(id, *amount)?;
                println!("Budget for {} is now ${:.2}", category, amount);
                Ok(())
            }
            BudgetSubcommand::Status => {
                if state.budget.categories.is_empty() {
                    println!("No budget categories yet");
                    return Ok(());
                }
                for category in &state.budget.categories {
                    println!("{}", category);
                }
                println!(
                    "Overall: ${:.2} / ${:.2} (${:.2} left)",
                    state.budget.total_spent,
                    state.budget.total_budget,
                    state.budget.remaining()
                );
                Ok(())
            }
            BudgetSubcommand::Suggest {
                item,
                alternative,
                price,
                alternative_price,
            } => {
                let mut suggestions = state.budget.suggestions.clone();
                suggestions.push(SavingsSuggestion::new(
                    item.clone(),
                    alternative.clone(),
                    *price,
                    *alternative_price,
                ));
                state.budget.set_suggestions(suggestions);
                println!("Added suggestion for {}", item);
                Ok(())
            }
            BudgetSubcommand::Suggestions => {
                if state.budget.suggestions.is_empty() {
                    println!("No suggestions yet");
                    return Ok(());
                }
                for suggestion in &state.budget.suggestions {
                    println!("{}", suggestion);
                }
                println!(
                    "Potential savings: ${:.2}",
                    state.budget.total_potential_savings()
                );
                Ok(())
            }
            BudgetSubcommand::RecordSavings { amount } => {
                state.record_money_saved(*amount);
                println!(
                    "Recorded ${:.2} saved (total ${:.2})",
                    amount, state.achievements.stats.money_saved
                );
                Ok(())
            }
        }
    }
}

fn find_category(state: &AppState, name: &str) -> Result<uuid::Uuid, StoreError> {
    state
        .budget
        .find_by_name(name)
        .map(|category| category.id)
        .ok_or_else(|| StoreError::RequestFailed(format!("No budget category named '{}'", name)))
}
