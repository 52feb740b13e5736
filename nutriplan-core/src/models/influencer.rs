use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A purchasable plan published by an influencer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluencerMealPlan {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub duration_days: u32,
    pub rating: f64,
}

impl InfluencerMealPlan {
    pub fn new(title: impl Into<String>, price: f64, duration_days: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            price,
            duration_days,
            rating: 0.0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }
}

/// A content creator in the directory.
///
/// `followers` is adjusted by one on follow/unfollow, mirroring the
/// membership list, rather than recounted from any source collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Influencer {
    pub id: Uuid,
    pub name: String,
    pub handle: String,
    pub bio: String,
    pub specialties: Vec<String>,
    pub followers: u32,
    pub rating: f64,
    pub is_verified: bool,
    pub meal_plans: Vec<InfluencerMealPlan>,
}

impl Influencer {
    pub fn new(name: impl Into<String>, handle: impl Into<String>, followers: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            handle: handle.into(),
            bio: String::new(),
            specialties: Vec::new(),
            followers,
            rating: 0.0,
            is_verified: false,
            meal_plans: Vec::new(),
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_specialties(mut self, specialties: Vec<String>) -> Self {
        self.specialties = specialties;
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn verified(mut self) -> Self {
        self.is_verified = true;
        self
    }

    pub fn with_meal_plan(mut self, plan: InfluencerMealPlan) -> Self {
        self.meal_plans.push(plan);
        self
    }
}

impl fmt::Display for Influencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let badge = if self.is_verified { " [verified]" } else { "" };
        write!(
            f,
            "@{}{} - {} ({} followers, {:.1} stars)",
            self.handle, badge, self.name, self.followers, self.rating
        )
    }
}
