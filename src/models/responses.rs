use serde::{Deserialize, Serialize};
use crate::models::domain::{FeatureWeights, GymFeatures, RankedGym};

/// Response for the rank gyms endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankGymsResponse {
    pub rankings: Vec<RankedGym>,
    pub total_candidates: usize,
    pub request_id: String,
}

/// Feature row enriched with the learned score
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredFeatures {
    #[serde(flatten)]
    pub features: GymFeatures,
    pub learned_score: f64,
}

/// Response for the features endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesResponse {
    pub weights: FeatureWeights,
    pub weights_source: String,
    pub gyms: Vec<ScoredFeatures>,
}

/// Response for the weights endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsResponse {
    pub weights: FeatureWeights,
    pub source: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
