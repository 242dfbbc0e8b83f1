use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Membership plan a gym-goer is shopping for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Daily,
    Monthly,
}

/// Gym snapshot evaluated for a single ranking request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymCandidate {
    pub id: i64,
    pub daily_price: Option<f64>,
    pub monthly_price: Option<f64>,
    pub annual_price: Option<f64>,
    pub gym_type: Option<String>,
    pub equipment_ids: BTreeSet<i64>,
    pub amenity_ids: BTreeSet<i64>,
    pub has_personal_trainers: bool,
    pub has_classes: bool,
    pub is_airconditioned: bool,
    pub is_24_hours: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl GymCandidate {
    /// Price of the tier a plan type buys into
    pub fn price_for(&self, plan_type: PlanType) -> Option<f64> {
        match plan_type {
            PlanType::Daily => self.daily_price,
            PlanType::Monthly => self.monthly_price,
        }
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// Gym-goer preferences used for scoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub budget: Option<f64>,
    pub plan_type: Option<PlanType>,
    pub preferred_equipment_ids: BTreeSet<i64>,
    pub preferred_amenity_ids: BTreeSet<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl UserProfile {
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

/// Per-gym sub-scores and the composite they add up to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub budget_fit: bool,
    pub equipment_match_pct: u8,
    pub amenity_match_pct: u8,
    pub feature_bonus: u8,
    pub composite_score: u8,
}

/// Scored gym returned to the recommendation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedGym {
    pub gym_id: i64,
    pub budget_fit: bool,
    pub equipment_match_pct: u8,
    pub amenity_match_pct: u8,
    pub feature_bonus: u8,
    pub composite_score: u8,
    pub matched_equipment_ids: Vec<i64>,
    pub matched_amenity_ids: Vec<i64>,
    pub distance_km: Option<f64>,
}

impl RankedGym {
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            budget_fit: self.budget_fit,
            equipment_match_pct: self.equipment_match_pct,
            amenity_match_pct: self.amenity_match_pct,
            feature_bonus: self.feature_bonus,
            composite_score: self.composite_score,
        }
    }
}

/// How a budget is compared against a gym's price tiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetPolicy {
    /// Any tier at or under budget qualifies
    #[default]
    AnyTier,
    /// Only the tier matching the user's plan type is compared
    PlanAware,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub budget_points: f64,
    pub equipment: f64,
    pub amenity: f64,
    pub personal_trainers_bonus: u8,
    pub classes_bonus: u8,
    pub aircon_bonus: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            budget_points: 30.0,
            equipment: 0.5,
            amenity: 0.0,
            personal_trainers_bonus: 5,
            classes_bonus: 5,
            aircon_bonus: 5,
        }
    }
}

/// Per-gym feature row handed to the learned ranking model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymFeatures {
    pub gym_id: i64,
    pub distance_km: Option<f64>,
    pub price: Option<f64>,
    pub budget_score: f64,
    pub equipment_match: f64,
    pub amenity_match: f64,
    pub plan_compatible: bool,
}

/// Weights of the learned ranking model, normalised to sum to 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    pub equipment: f64,
    pub amenity: f64,
    pub travel: f64,
    pub price: f64,
    pub penalty: f64,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            equipment: 0.33,
            amenity: 0.22,
            travel: 0.20,
            price: 0.20,
            penalty: 0.05,
        }
    }
}

impl FeatureWeights {
    /// Clamp negative weights to zero and rescale so they sum to 1.
    ///
    /// A vector that sums to zero is returned as all zeros.
    pub fn normalized(self) -> Self {
        let clamp = |w: f64| if w.is_finite() { w.max(0.0) } else { 0.0 };
        let w = Self {
            equipment: clamp(self.equipment),
            amenity: clamp(self.amenity),
            travel: clamp(self.travel),
            price: clamp(self.price),
            penalty: clamp(self.penalty),
        };

        let sum = w.equipment + w.amenity + w.travel + w.price + w.penalty;
        if sum <= 0.0 {
            return w;
        }

        Self {
            equipment: w.equipment / sum,
            amenity: w.amenity / sum,
            travel: w.travel / sum,
            price: w.price / sum,
            penalty: w.penalty / sum,
        }
    }
}

/// Bounds on a single price tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    #[serde(default)]
    pub exact: Option<f64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn is_unbounded(&self) -> bool {
        self.exact.is_none() && self.min.is_none() && self.max.is_none()
    }
}

/// Catalog predicates applied before ranking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymFilter {
    #[serde(default, alias = "is_airconditioned")]
    pub is_airconditioned: Option<bool>,
    #[serde(default, alias = "has_personal_trainers")]
    pub has_personal_trainers: Option<bool>,
    #[serde(default, alias = "has_classes")]
    pub has_classes: Option<bool>,
    #[serde(default, alias = "is_24_hours")]
    pub is_24_hours: Option<bool>,
    #[serde(default, alias = "daily_price")]
    pub daily_price: PriceRange,
    #[serde(default, alias = "monthly_price")]
    pub monthly_price: PriceRange,
    #[serde(default, alias = "annual_price")]
    pub annual_price: PriceRange,
    #[serde(default, alias = "gym_type")]
    pub gym_type: Option<String>,
    #[serde(default, alias = "amenity_id")]
    pub amenity_id: Option<i64>,
    #[serde(default, alias = "equipment_id")]
    pub equipment_id: Option<i64>,
}
