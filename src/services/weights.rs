use crate::models::{FeatureWeights, GymFeatures};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Cache key for the global (not per-user) weights
const GLOBAL_WEIGHTS_KEY: &str = "ml:weights:global:v1";

/// Average urban travel speed used to estimate travel time from distance
const URBAN_SPEED_KMH: f64 = 30.0;

/// Errors that can occur when fetching learned weights
#[derive(Debug, Error)]
pub enum WeightsError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("ML service returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Where a set of weights came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightsSource {
    TrainedGlobal,
    Default,
}

impl WeightsSource {
    /// Source label reported by the weights service
    ///
    /// Only an explicit `"default"` means untrained weights.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("default") => WeightsSource::Default,
            _ => WeightsSource::TrainedGlobal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightsSource::TrainedGlobal => "trained_global",
            WeightsSource::Default => "default",
        }
    }
}

/// Weights together with their provenance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedWeights {
    pub weights: FeatureWeights,
    pub source: WeightsSource,
}

impl ResolvedWeights {
    pub fn fallback() -> Self {
        Self {
            weights: FeatureWeights::default(),
            source: WeightsSource::Default,
        }
    }
}

#[derive(Debug, Serialize)]
struct WeightsRequest {
    user_id: i64,
    gyms: Vec<WeightsContextRow>,
}

#[derive(Debug, Serialize)]
struct WeightsContextRow {
    gym_id: i64,
    equipment_match: f64,
    amenity_match: f64,
    travel_time_min: f64,
    price: f64,
    budget_penalty: f64,
}

impl From<&GymFeatures> for WeightsContextRow {
    fn from(features: &GymFeatures) -> Self {
        Self {
            gym_id: features.gym_id,
            equipment_match: features.equipment_match,
            amenity_match: features.amenity_match,
            travel_time_min: features
                .distance_km
                .map_or(0.0, |km| km / URBAN_SPEED_KMH * 60.0),
            price: features.price.unwrap_or(0.0),
            budget_penalty: features.budget_score,
        }
    }
}

/// Client for the learned ranking weights service
///
/// Weights are global, so one cached entry serves every user. Any failure
/// falls back to [`FeatureWeights::default`] and is cached like a success.
pub struct WeightsClient {
    base_url: String,
    client: Client,
    cache: moka::future::Cache<String, ResolvedWeights>,
}

impl WeightsClient {
    /// Create a new weights client
    pub fn new(base_url: String, timeout_secs: u64, cache_ttl_secs: u64) -> Result<Self, WeightsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        let cache = moka::future::CacheBuilder::new(1)
            .time_to_live(Duration::from_secs(cache_ttl_secs))
            .build();

        Ok(Self {
            base_url,
            client,
            cache,
        })
    }

    /// Get the current weights, from cache when fresh
    ///
    /// `rows` give the ML service context about the request; they do not
    /// affect which cache entry is used.
    pub async fn get(&self, user_id: i64, rows: &[GymFeatures]) -> ResolvedWeights {
        self.cache
            .get_with(GLOBAL_WEIGHTS_KEY.to_string(), async {
                match self.fetch(user_id, rows).await {
                    Ok(resolved) => {
                        tracing::debug!(
                            "Loaded {} weights: {:?}",
                            resolved.source.as_str(),
                            resolved.weights
                        );
                        resolved
                    }
                    Err(e) => {
                        tracing::warn!("Falling back to default weights: {}", e);
                        ResolvedWeights::fallback()
                    }
                }
            })
            .await
    }

    /// Drop the cached weights so the next call refetches
    pub async fn invalidate(&self) {
        self.cache.invalidate(GLOBAL_WEIGHTS_KEY).await;
    }

    /// Fetch weights from the ML service without caching
    pub async fn fetch(&self, user_id: i64, rows: &[GymFeatures]) -> Result<ResolvedWeights, WeightsError> {
        let url = format!("{}/weights", self.base_url.trim_end_matches('/'));

        let payload = WeightsRequest {
            user_id,
            gyms: rows.iter().map(WeightsContextRow::from).collect(),
        };

        tracing::debug!("Fetching weights from: {}", url);

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeightsError::ApiError(format!(
                "Failed to fetch weights: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;
        parse_weights(&json)
    }
}

/// Read the `weights` object and `source` label of an ML service response
///
/// Missing keys count as zero (an empty object gives all zeros); the result
/// is normalised.
fn parse_weights(json: &Value) -> Result<ResolvedWeights, WeightsError> {
    let weights = json
        .get("weights")
        .and_then(|w| w.as_object())
        .ok_or_else(|| WeightsError::InvalidResponse("Missing weights object".into()))?;

    let weight = |key: &str| weights.get(key).and_then(|v| v.as_f64()).unwrap_or(0.0);

    Ok(ResolvedWeights {
        weights: FeatureWeights {
            equipment: weight("equipment"),
            amenity: weight("amenity"),
            travel: weight("travel"),
            price: weight("price"),
            penalty: weight("penalty"),
        }
        .normalized(),
        source: WeightsSource::from_label(json.get("source").and_then(|s| s.as_str())),
    })
}
