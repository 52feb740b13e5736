//! Session state: current user, mock authentication and profile edits.
//!
//! Authentication is simulated: a fixed delay stands in for the network
//! round trip and a small built-in user directory stands in for the
//! backend. Requests follow the same pending/fulfilled/rejected lifecycle
//! as the influencer slice.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::{InfluencerProfile, User, UserRole, UserUpdate};
use crate::store::error::StoreError;

const LOGIN_DELAY: Duration = Duration::from_millis(1000);
const REGISTER_DELAY: Duration = Duration::from_millis(2000);
const VERIFY_DELAY: Duration = Duration::from_millis(1000);

/// Input for influencer sign-up.
#[derive(Debug, Clone)]
pub struct InfluencerRegistration {
    pub email: String,
    pub name: String,
    pub bio: String,
    pub specialties: Vec<String>,
}

fn mock_users() -> Vec<User> {
    vec![
        User::new("1", "sarah@example.com", "Sarah Johnson")
            .with_role(UserRole::Influencer)
            .verified()
            .with_influencer_profile(InfluencerProfile {
                bio: "Certified nutritionist specializing in plant-based diets".to_string(),
                specialties: vec![
                    "Vegan".to_string(),
                    "Fitness".to_string(),
                    "Weight Loss".to_string(),
                ],
                followers: 125000,
                rating: 4.8,
            }),
        User::new("2", "marcus@example.com", "Marcus Chen")
            .with_role(UserRole::Influencer)
            .verified()
            .with_influencer_profile(InfluencerProfile {
                bio: "Fitness coach and nutrition expert".to_string(),
                specialties: vec![
                    "Fitness".to_string(),
                    "Muscle Building".to_string(),
                    "Sports Nutrition".to_string(),
                ],
                followers: 89000,
                rating: 4.9,
            }),
        User::new("3", "user@example.com", "Regular User"),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub current_user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    #[serde(skip)]
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            current_user: None,
            token: None,
            is_authenticated: false,
            is_loading: false,
            error: None,
        }
    }
}

impl Session {
    /// Authenticate against the mock directory. The password is accepted
    /// as-is; only the email is checked.
    pub async fn login(&mut self, email: &str, _password: &str) -> Result<(), StoreError> {
        self.is_loading = true;
        self.error = None;
        tokio::time::sleep(LOGIN_DELAY).await;

        let user = mock_users().into_iter().find(|u| u.email == email);
        self.is_loading = false;
        match user {
            Some(user) => {
                self.token = Some(format!("mock-jwt-token-{}", user.id));
                self.current_user = Some(user);
                self.is_authenticated = true;
                Ok(())
            }
            None => {
                self.error = Some("Login failed".to_string());
                Err(StoreError::AuthFailed("Login failed".to_string()))
            }
        }
    }

    /// Create an influencer account. New influencers start unverified
    /// until an admin approves them.
    pub async fn register_influencer(
        &mut self,
        registration: InfluencerRegistration,
    ) -> Result<(), StoreError> {
        self.is_loading = true;
        self.error = None;
        tokio::time::sleep(REGISTER_DELAY).await;

        let id = uuid::Uuid::new_v4().to_string();
        let user = User::new(id.clone(), registration.email, registration.name)
            .with_role(UserRole::Influencer)
            .with_influencer_profile(InfluencerProfile {
                bio: registration.bio,
                specialties: registration.specialties,
                followers: 0,
                rating: 0.0,
            });
        self.token = Some(format!("mock-jwt-token-{}", id));
        self.current_user = Some(user);
        self.is_authenticated = true;
        self.is_loading = false;
        Ok(())
    }

    /// Admin approval: marks the given account verified if it is the one
    /// currently signed in.
    pub async fn verify_influencer(&mut self, user_id: &str) {
        tokio::time::sleep(VERIFY_DELAY).await;
        if let Some(user) = &mut self.current_user {
            if user.id == user_id {
                user.is_verified = true;
            }
        }
    }

    pub fn logout(&mut self) {
        self.current_user = None;
        self.token = None;
        self.is_authenticated = false;
        self.error = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Merge a partial edit into the signed-in user's profile.
    pub fn update_profile(&mut self, update: &UserUpdate) -> Result<(), StoreError> {
        let user = self
            .current_user
            .as_mut()
            .ok_or_else(|| StoreError::AuthFailed("Not signed in".to_string()))?;
        update.apply(user);
        Ok(())
    }

    /// Only an influencer can edit a profile, and only their own.
    pub fn can_edit_profile(&self, profile_id: &str) -> bool {
        match &self.current_user {
            Some(user) => user.id == profile_id && user.role == UserRole::Influencer,
            None => false,
        }
    }
}
