use clap::{Args, Subcommand};

use nutriplan_core::{AppState, InfluencerRegistration, UserUpdate};

#[derive(Args)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand)]
pub enum AuthSubcommand {
    /// Sign in
    Login {
        /// Account email
        email: String,

        /// Password
        #[arg(long, short, default_value = "")]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Register a new influencer account
    Register {
        /// Account email
        email: String,

        /// Display name
        name: String,

        /// Profile bio
        #[arg(long, default_value = "")]
        bio: String,

        /// Specialty (can be repeated)
        #[arg(long = "specialty")]
        specialties: Vec<String>,
    },

    /// Approve the signed-in influencer account (admin action)
    Verify,

    /// Edit the signed-in profile
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        bio: Option<String>,
    },
}

impl AuthCommand {
    pub async fn run(&self, state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            AuthSubcommand::Login { email, password } => {
                state.session.login(email, password).await?;
                if let Some(user) = &state.session.current_user {
                    println!("Signed in as {}", user);
                }
                Ok(())
            }
            AuthSubcommand::Logout => {
                state.session.logout();
                println!("Signed out");
                Ok(())
            }
            AuthSubcommand::Whoami => {
                match &state.session.current_user {
                    Some(user) => {
                        println!("{}", user);
                        if user.is_verified {
                            println!("Verified account");
                        }
                    }
                    None => println!("Not signed in"),
                }
                Ok(())
            }
            AuthSubcommand::Register {
                email,
                name,
                bio,
                specialties,
            } => {
                state
                    .session
                    .register_influencer(InfluencerRegistration {
                        email: email.clone(),
                        name: name.clone(),
                        bio: bio.clone(),
                        specialties: specialties.clone(),
                    })
                    .await?;
                println!("Registered {} (pending verification)", name);
                Ok(())
            }
            AuthSubcommand::Verify => {
                let Some(id) = state
                    .session
                    .current_user
                    .as_ref()
                    .map(|user| user.id.clone())
                else {
                    return Err("Not signed in".into());
                };
                state.session.verify_influencer(&id).await;
                println!("Account verified");
                Ok(())
            }
            AuthSubcommand::UpdateProfile { name, email, bio } => {
                let profile_id = state
                    .session
                    .current_user
                    .as_ref()
                    .map(|user| user.id.clone())
                    .unwrap_or_default();
                if !state.session.can_edit_profile(&profile_id) {
                    return Err("Only influencers can edit their own profile".into());
                }
                state.session.update_profile(&UserUpdate {
                    name: name.clone(),
                    email: email.clone(),
                    bio: bio.clone(),
                })?;
                println!("Profile updated");
                Ok(())
            }
        }
    }
}
