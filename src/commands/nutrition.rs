use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use std::str::FromStr;

use nutriplan_core::{
    AppState, MealType, NutritionEntry, NutritionGoals, NutritionInfo, WaterIntake,
};

#[derive(Args)]
pub struct NutritionCommand {
    #[command(subcommand)]
    pub command: NutritionSubcommand,
}

#[derive(Subcommand)]
pub enum NutritionSubcommand {
    /// Log a food entry
    Log {
        /// Food name
        food: String,

        /// Calories
        #[arg(long)]
        calories: f64,

        /// Protein in grams
        #[arg(long, short, default_value_t = 0.0)]
        protein: f64,

        /// Carbs in grams
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,

        /// Fat in grams
        #[arg(long, short, default_value_t = 0.0)]
        fat: f64,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Meal type (breakfast, lunch, dinner, snack)
        #[arg(long = "type", short = 't', default_value = "snack")]
        meal_type: String,
    },

    /// Log water intake
    Water {
        /// Amount in milliliters
        amount: f64,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Show the daily summary for a date
    Summary {
        /// Date (YYYY-MM-DD), defaults to today
        date: Option<String>,
    },

    /// Show current streaks
    Streaks,

    /// Set daily goals
    Goals {
        #[arg(long)]
        calories: Option<f64>,

        #[arg(long)]
        protein: Option<f64>,

        #[arg(long)]
        carbs: Option<f64>,

        #[arg(long)]
        fat: Option<f64>,

        /// Water goal in milliliters
        #[arg(long)]
        water: Option<f64>,
    },
}

fn parse_date(input: &Option<String>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match input {
        Some(s) => Ok(s.parse()?),
        None => Ok(Local::now().date_naive()),
    }
}

impl NutritionCommand {
    pub fn run(&self, state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            NutritionSubcommand::Log {
                food,
                calories,
                protein,
                carbs,
                fat,
                date,
                meal_type,
            } => {
                let date = parse_date(date)?;
                let meal_type = MealType::from_str(meal_type)?;
                let entry = NutritionEntry::new(
                    date,
                    meal_type,
                    food.clone(),
                    NutritionInfo::new(*calories, *protein, *carbs, *fat),
                );
                state.nutrition.add_entry(entry);
                println!("Logged {} for {} ({})", food, date, meal_type);
                Ok(())
            }
            NutritionSubcommand::Water { amount, date } => {
                let date = parse_date(date)?;
                let time = Local::now().time();
                state.nutrition.add_water(WaterIntake::new(date, *amount, time));
                println!("Logged {:.0} ml of water for {}", amount, date);
                Ok(())
            }
            NutritionSubcommand::Summary { date } => {
                let date = parse_date(date)?;
                match state.nutrition.summary_for(date) {
                    Some(summary) => print!("{}", summary),
                    None => println!("Nothing logged for {}", date),
                }
                Ok(())
            }
            NutritionSubcommand::Streaks => {
                let streaks = state.nutrition.streaks;
                println!("Calorie goal: {} day(s)", streaks.calorie_goal);
                println!("Protein goal: {} day(s)", streaks.protein_goal);
                println!("Water goal:   {} day(s)", streaks.water_goal);
                println!("Logging:      {} day(s)", streaks.logging);
                Ok(())
            }
            NutritionSubcommand::Goals {
                calories,
                protein,
                carbs,
                fat,
                water,
            } => {
                let current = state.nutrition.goals;
                state.nutrition.set_goals(NutritionGoals {
                    calories: calories.unwrap_or(current.calories),
                    protein: protein.unwrap_or(current.protein),
                    carbs: carbs.unwrap_or(current.carbs),
                    fat: fat.unwrap_or(current.fat),
                    water_ml: water.unwrap_or(current.water_ml),
                });
                let goals = state.nutrition.goals;
                println!(
                    "Goals: {:.0} kcal, {:.0} g protein, {:.0} g carbs, {:.0} g fat, {:.0} ml water",
                    goals.calories, goals.protein, goals.carbs, goals.fat, goals.water_ml
                );
                Ok(())
            }
        }
    }
}
