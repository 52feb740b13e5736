use clap::{Args, Subcommand};

use nutriplan_core::{AppState, StoreError};

#[derive(Args)]
pub struct InfluencerCommand {
    #[command(subcommand)]
    pub command: InfluencerSubcommand,
}

#[derive(Subcommand)]
pub enum InfluencerSubcommand {
    /// List the influencer directory
    List,

    /// Follow an influencer
    Follow {
        /// Influencer handle (with or without @)
        handle: String,
    },

    /// Unfollow an influencer
    Unfollow {
        /// Influencer handle
        handle: String,
    },

    /// Show an influencer's meal plans
    Plans {
        /// Influencer handle
        handle: String,
    },

    /// Purchase one of an influencer's meal plans
    Purchase {
        /// Influencer handle
        handle: String,

        /// Meal plan title
        plan: String,
    },
}

impl InfluencerCommand {
    pub async fn run(&self, state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            InfluencerSubcommand::List => {
                for influencer in &state.influencers.influencers {
                    let mark = if state.influencers.is_following(influencer.id) {
                        "+"
                    } else {
                        " "
                    };
                    println!("{} {}", mark, influencer);
                }
                Ok(())
            }
            InfluencerSubcommand::Follow { handle } => {
                let id = find_influencer(state, handle)?;
                let followers = state.influencers.follow(id).await?;
                state.record_influencer_followed();
                println!("Following @{} ({} followers)", handle.trim_start_matches('@'), followers);
                Ok(())
            }
            InfluencerSubcommand::Unfollow { handle } => {
                let id = find_influencer(state, handle)?;
                let followers = state.influencers.unfollow(id).await?;
                state.record_influencer_followed();
                println!(
                    "Unfollowed @{} ({} followers)",
                    handle.trim_start_matches('@'),
                    followers
                );
                Ok(())
            }
            InfluencerSubcommand::Plans { handle } => {
                let influencer = state.influencers.find_by_handle(handle).ok_or_else(|| {
                    StoreError::RequestFailed(format!("No influencer with handle '{}'", handle))
                })?;
                for plan in &influencer.meal_plans {
                    let owned = if state.influencers.purchased_plans.contains(&plan.id) {
                        " (owned)"
                    } else {
                        ""
                    };
                    println!(
                        "{} - ${:.2}, {} days, {:.1} stars{}",
                        plan.title, plan.price, plan.duration_days, plan.rating, owned
                    );
                }
                Ok(())
            }
            InfluencerSubcommand::Purchase { handle, plan } => {
                let id = find_influencer(state, handle)?;
                let plan_name = plan.to_lowercase();
                let plan_id = state
                    .influencers
                    .influencers
                    .iter()
                    .find(|i| i.id == id)
                    .and_then(|i| {
                        i.meal_plans
                            .iter()
                            .find(|p| p.title.to_lowercase() == plan_name)
                    })
                    .map(|p| p.id)
                    .ok_or_else(|| {
                        StoreError::RequestFailed(format!("No meal plan titled '{}'", plan))
                    })?;
                let price = state.influencers.purchase_plan(id, plan_id).await?;
                println!("Purchased {} for ${:.2}", plan, price);
                Ok(())
            }
        }
    }
}

fn find_influencer(state: &AppState, handle: &str) -> Result<uuid::Uuid, StoreError> {
    state
        .influencers
        .find_by_handle(handle)
        .map(|influencer| influencer.id)
        .ok_or_else(|| StoreError::RequestFailed(format!("No influencer with handle '{}'", handle)))
}
