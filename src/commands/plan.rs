use chrono::Weekday;
use clap::{Args, Subcommand};
use std::str::FromStr;

use nutriplan_core::{AppState, MealType};

#[derive(Args)]
pub struct PlanCommand {
    #[command(subcommand)]
    pub command: PlanSubcommand,
}

#[derive(Subcommand)]
pub enum PlanSubcommand {
    /// Put a catalog meal on the weekly grid
    Assign {
        /// Day of the week (e.g. mon, tuesday)
        day: String,

        /// Meal slot (breakfast, lunch, dinner, snack)
        slot: String,

        /// Catalog meal name
        meal: String,
    },

    /// Clear a slot on the grid
    Remove {
        /// Day of the week
        day: String,

        /// Meal slot
        slot: String,

        /// Snack index (snack slots only, 0-based)
        #[arg(long)]
        index: Option<usize>,
    },

    /// Show the current week
    Show,

    /// List the meal catalog
    Catalog,

    /// Toggle a catalog meal as favorite
    Favorite {
        /// Catalog meal name
        meal: String,
    },

    /// Start a fresh plan for the current week
    NewWeek,
}

fn parse_weekday(input: &str) -> Result<Weekday, String> {
    input
        .parse::<Weekday>()
        .map_err(|_| format!("Invalid day '{}'. Use e.g. mon or monday", input))
}

impl PlanCommand {
    pub fn run(&self, state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            PlanSubcommand::Assign { day, slot, meal } => {
                let weekday = parse_weekday(day)?;
                let meal_type = MealType::from_str(slot)?;
                state.planner.assign_meal(weekday, meal_type, meal)?;
                state.record_meal_planned();
                println!("Planned {} for {} {}", meal, weekday, meal_type);
                Ok(())
            }
            PlanSubcommand::Remove { day, slot, index } => {
                let weekday = parse_weekday(day)?;
                let meal_type = MealType::from_str(slot)?;
                let removed = if meal_type == MealType::Snack {
                    state.planner.remove_snack(weekday, index.unwrap_or(0))
                } else {
                    state.planner.remove_meal(weekday, meal_type)
                };
                match removed {
                    Some(meal) => println!("Removed {} from {} {}", meal.name, weekday, meal_type),
                    None => println!("Nothing planned for {} {}", weekday, meal_type),
                }
                Ok(())
            }
            PlanSubcommand::Show => {
                print!("{}", state.planner.plan);
                Ok(())
            }
            PlanSubcommand::Catalog => {
                for meal in &state.planner.catalog {
                    let star = if state.planner.is_favorite(meal.id) { "*" } else { " " };
                    println!("{} {}", star, meal);
                }
                Ok(())
            }
            PlanSubcommand::Favorite { meal } => {
                let favorite = state.planner.toggle_favorite(meal)?;
                println!(
                    "{} is {} a favorite",
                    meal,
                    if favorite { "now" } else { "no longer" }
                );
                Ok(())
            }
            PlanSubcommand::NewWeek => {
                state.planner.start_new_week(chrono::Local::now().date_naive());
                println!("Started a fresh week of {}", state.planner.plan.start_date);
                Ok(())
            }
        }
    }
}
