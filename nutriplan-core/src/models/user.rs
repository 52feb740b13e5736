use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Influencer,
    Admin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::User => write!(f, "user"),
            UserRole::Influencer => write!(f, "influencer"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(UserRole::User),
            "influencer" => Ok(UserRole::Influencer),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!(
                "Invalid role '{}'. Valid options: user, influencer, admin",
                s
            )),
        }
    }
}

/// Public creator profile attached to influencer accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerProfile {
    pub bio: String,
    pub specialties: Vec<String>,
    pub followers: u32,
    pub rating: f64,
}

/// An account in the session layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub is_verified: bool,
    pub influencer_profile: Option<InfluencerProfile>,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            role: UserRole::User,
            is_verified: false,
            influencer_profile: None,
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn verified(mut self) -> Self {
        self.is_verified = true;
        self
    }

    pub fn with_influencer_profile(mut self, profile: InfluencerProfile) -> Self {
        self.influencer_profile = Some(profile);
        self
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> ({})", self.name, self.email, self.role)
    }
}

/// Partial profile edit. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
}

impl UserUpdate {
    pub fn apply(&self, user: &mut User) {
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(bio) = &self.bio {
            if let Some(profile) = &mut user.influencer_profile {
                profile.bio = bio.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_new() {
        let user = User::new("3", "user@example.com", "Regular User");
        assert_eq!(user.role, UserRole::User);
        assert!(!user.is_verified);
        assert!(user.influencer_profile.is_none());
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!(UserRole::from_str("Influencer").unwrap(), UserRole::Influencer);
        assert!(UserRole::from_str("moderator").is_err());
    }

    #[test]
    fn test_user_update_apply() {
        let mut user = User::new("1", "sarah@example.com", "Sarah Johnson")
            .with_role(UserRole::Influencer)
            .with_influencer_profile(InfluencerProfile {
                bio: "old bio".to_string(),
                specialties: vec!["Vegan".to_string()],
                followers: 125000,
                rating: 4.8,
            });
        let update = UserUpdate {
            name: Some("Sarah J.".to_string()),
            bio: Some("new bio".to_string()),
            ..Default::default()
        };
        update.apply(&mut user);
        assert_eq!(user.name, "Sarah J.");
        assert_eq!(user.email, "sarah@example.com");
        assert_eq!(user.influencer_profile.unwrap().bio, "new bio");
    }
}
