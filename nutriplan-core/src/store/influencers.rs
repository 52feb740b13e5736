//! Influencer directory state: follow graph and meal-plan purchases.
//!
//! Network calls are simulated with a fixed delay; each request follows a
//! pending/fulfilled/rejected lifecycle with no retry or cancellation.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::models::{Influencer, InfluencerMealPlan};
use crate::store::error::StoreError;

const REQUEST_DELAY: Duration = Duration::from_millis(500);
const PURCHASE_DELAY: Duration = Duration::from_millis(1000);

fn seed_directory() -> Vec<Influencer> {
    vec![
        Influencer::new("Sarah Johnson", "saraheats", 125000)
            .verified()
            .with_rating(4.8)
            .with_bio("Certified nutritionist specializing in plant-based diets")
            .with_specialties(vec![
                "Vegan".to_string(),
                "Fitness".to_string(),
                "Weight Loss".to_string(),
            ])
            .with_meal_plan(
                InfluencerMealPlan::new("Plant-Powered Week", 14.99, 7)
                    .with_description("Seven days of high-protein vegan meals")
                    .with_rating(4.7),
            )
            .with_meal_plan(
                InfluencerMealPlan::new("30-Day Reset", 39.99, 30).with_rating(4.9),
            ),
        Influencer::new("Marcus Chen", "marcusfit", 89000)
            .verified()
            .with_rating(4.9)
            .with_bio("Fitness coach and nutrition expert")
            .with_specialties(vec![
                "Fitness".to_string(),
                "Muscle Building".to_string(),
                "Sports Nutrition".to_string(),
            ])
            .with_meal_plan(
                InfluencerMealPlan::new("Lean Bulk Basics", 24.99, 14).with_rating(4.8),
            ),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluencerHub {
    pub influencers: Vec<Influencer>,
    pub followed: Vec<Uuid>,
    pub purchased_plans: Vec<Uuid>,
    #[serde(skip)]
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for InfluencerHub {
    fn default() -> Self {
        Self {
            influencers: seed_directory(),
            followed: Vec::new(),
            purchased_plans: Vec::new(),
            is_loading: false,
            error: None,
        }
    }
}

impl InfluencerHub {
    pub fn is_following(&self, id: Uuid) -> bool {
        self.followed.contains(&id)
    }

    pub fn find_by_handle(&self, handle: &str) -> Option<&Influencer> {
        let handle = handle.trim_start_matches('@').to_lowercase();
        self.influencers
            .iter()
            .find(|i| i.handle.to_lowercase() == handle)
    }

    /// Follow an influencer: add to the followed list and bump their
    /// follower counter by one. The two updates move in lockstep; the
    /// counter is never recounted from a membership list.
    pub async fn follow(&mut self, id: Uuid) -> Result<u32, StoreError> {
        self.is_loading = true;
        self.error = None;
        tokio::time::sleep(REQUEST_DELAY).await;

        let Some(influencer) = self.influencers.iter_mut().find(|i| i.id == id) else {
            self.is_loading = false;
            self.error = Some("Failed to follow influencer".to_string());
            return Err(StoreError::InfluencerNotFound(id));
        };
        if !self.followed.contains(&id) {
            self.followed.push(id);
            influencer.followers += 1;
        }
        self.is_loading = false;
        Ok(influencer.followers)
    }

    /// Undo a follow: drop the membership and decrement the counter.
    pub async fn unfollow(&mut self, id: Uuid) -> Result<u32, StoreError> {
        self.is_loading = true;
        self.error = None;
        tokio::time::sleep(REQUEST_DELAY).await;

        let Some(influencer) = self.influencers.iter_mut().find(|i| i.id == id) else {
            self.is_loading = false;
            self.error = Some("Failed to unfollow influencer".to_string());
            return Err(StoreError::InfluencerNotFound(id));
        };
        if let Some(index) = self.followed.iter().position(|f| *f == id) {
            self.followed.remove(index);
            influencer.followers = influencer.followers.saturating_sub(1);
        }
        self.is_loading = false;
        Ok(influencer.followers)
    }

    /// Buy one of an influencer's plans, returning its price.
    pub async fn purchase_plan(
        &mut self,
        influencer_id: Uuid,
        plan_id: Uuid,
    ) -> Result<f64, StoreError> {
        self.is_loading = true;
        self.error = None;
        tokio::time::sleep(PURCHASE_DELAY).await;

        let plan = self
            .influencers
            .iter()
            .find(|i| i.id == influencer_id)
            .and_then(|i| i.meal_plans.iter().find(|p| p.id == plan_id));
        let Some(plan) = plan else {
            self.is_loading = false;
            self.error = Some("Failed to purchase meal plan".to_string());
            return Err(StoreError::RequestFailed(
                "Failed to purchase meal plan".to_string(),
            ));
        };
        let price = plan.price;
        if !self.purchased_plans.contains(&plan_id) {
            self.purchased_plans.push(plan_id);
        }
        self.is_loading = false;
        tracing::debug!("Purchased meal plan {} for ${:.2}", plan_id, price);
        Ok(price)
    }

    /// Reload the seeded directory, keeping follow state for influencers
    /// that are still present.
    pub async fn load_directory(&mut self) {
        self.is_loading = true;
        self.error = None;
        tokio::time::sleep(REQUEST_DELAY).await;
        if self.influencers.is_empty() {
            self.influencers = seed_directory();
        }
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_follow_unfollow_scenario() {
        let mut hub = InfluencerHub::default();
        let id = hub.find_by_handle("saraheats").unwrap().id;
        let before = hub.find_by_handle("saraheats").unwrap().followers;

        let after = hub.follow(id).await.unwrap();
        assert_eq!(after, before + 1);
        assert!(hub.is_following(id));

        let restored = hub.unfollow(id).await.unwrap();
        assert_eq!(restored, before);
        assert!(!hub.is_following(id));
    }

    #[tokio::test]
    async fn test_double_follow_counts_once() {
        let mut hub = InfluencerHub::default();
        let id = hub.find_by_handle("marcusfit").unwrap().id;
        let before = hub.find_by_handle("marcusfit").unwrap().followers;

        hub.follow(id).await.unwrap();
        hub.follow(id).await.unwrap();
        assert_eq!(hub.find_by_handle("marcusfit").unwrap().followers, before + 1);
        assert_eq!(hub.followed.len(), 1);
    }

    #[tokio::test]
    async fn test_follow_unknown_sets_error() {
        let mut hub = InfluencerHub::default();
        let result = hub.follow(Uuid::new_v4()).await;
        assert!(result.is_err());
        assert_eq!(hub.error.as_deref(), Some("Failed to follow influencer"));
        assert!(!hub.is_loading);
    }

    #[tokio::test]
    async fn test_purchase_plan() {
        let mut hub = InfluencerHub::default();
        let influencer = hub.find_by_handle("saraheats").unwrap();
        let influencer_id = influencer.id;
        let plan_id = influencer.meal_plans[0].id;

        let price = hub.purchase_plan(influencer_id, plan_id).await.unwrap();
        assert_eq!(price, 14.99);
        assert!(hub.purchased_plans.contains(&plan_id));

        // Buying again is a no-op on the owned list.
        hub.purchase_plan(influencer_id, plan_id).await.unwrap();
        assert_eq!(hub.purchased_plans.len(), 1);
    }

    #[tokio::test]
    async fn test_purchase_unknown_plan_rejected() {
        let mut hub = InfluencerHub::default();
        let influencer_id = hub.influencers[0].id;
        let result = hub.purchase_plan(influencer_id, Uuid::new_v4()).await;
        assert!(result.is_err());
        assert_eq!(hub.error.as_deref(), Some("Failed to purchase meal plan"));
    }

    #[test]
    fn test_find_by_handle_ignores_at_sign() {
        let hub = InfluencerHub::default();
        assert!(hub.find_by_handle("@SarahEats").is_some());
        assert!(hub.find_by_handle("nobody").is_none());
    }
}
