use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod storage;

use commands::{
    AchievementsCommand, AuthCommand, BudgetCommand, ConfigCommand, GroceryCommand,
    InfluencerCommand, NutritionCommand, PlanCommand,
};
use config::Config;

#[derive(Parser)]
#[command(name = "nutriplan")]
#[command(version)]
#[command(about = "A nutrition and grocery planning application", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the grocery list
    Grocery(GroceryCommand),

    /// Log food and water, view summaries and streaks
    Nutrition(NutritionCommand),

    /// Manage the weekly meal plan
    Plan(PlanCommand),

    /// Track spending against category budgets
    Budget(BudgetCommand),

    /// View and unlock achievements
    Achievements(AchievementsCommand),

    /// Browse and follow influencers
    Influencer(InfluencerCommand),

    /// Sign in and manage the profile
    Auth(AuthCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config)?;

    let Some(command) = cli.command else {
        println!("Use --help to see available commands");
        return Ok(());
    };

    if let Commands::Config(cmd) = &command {
        return cmd.run(&config);
    }

    let mut state = storage::load_state(&config.state_path)?;
    match &command {
        Commands::Grocery(cmd) => cmd.run(&mut state)?,
        Commands::Nutrition(cmd) => cmd.run(&mut state)?,
        Commands::Plan(cmd) => cmd.run(&mut state)?,
        Commands::Budget(cmd) => cmd.run(&mut state)?,
        Commands::Achievements(cmd) => cmd.run(&mut state)?,
        Commands::Influencer(cmd) => cmd.run(&mut state).await?,
        Commands::Auth(cmd) => cmd.run(&mut state).await?,
        Commands::Config(_) => unreachable!(),
    }
    storage::save_state(&config.state_path, &state)?;

    Ok(())
}
