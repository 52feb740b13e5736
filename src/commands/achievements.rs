use clap::{Args, Subcommand};

use nutriplan_core::AppState;

#[derive(Args)]
pub struct AchievementsCommand {
    #[command(subcommand)]
    pub command: AchievementsSubcommand,
}

#[derive(Subcommand)]
pub enum AchievementsSubcommand {
    /// Show the achievement board
    List,

    /// Show points, level and recent unlocks
    Progress,

    /// Manually unlock an achievement by id (streak achievements only
    /// unlock this way)
    Unlock {
        /// Achievement id
        id: String,
    },
}

impl AchievementsCommand {
    pub fn run(&self, state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            AchievementsSubcommand::List => {
                for achievement in &state.achievements.achievements {
                    println!("{}", achievement);
                }
                Ok(())
            }
            AchievementsSubcommand::Progress => {
                let board = &state.achievements;
                println!("Level {} ({} points)", board.level(), board.total_points);
                println!("{} point(s) to next level", board.points_to_next_level());
                if !board.recent_unlocks.is_empty() {
                    println!("Recent unlocks:");
                    for id in &board.recent_unlocks {
                        if let Some(a) = board.achievements.iter().find(|a| &a.id == id) {
                            println!("  {}", a.title);
                        }
                    }
                }
                Ok(())
            }
            AchievementsSubcommand::Unlock { id } => {
                state.achievements.unlock(id)?;
                println!("Unlocked achievement {}", id);
                Ok(())
            }
        }
    }
}
