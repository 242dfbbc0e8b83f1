use crate::core::{
    budget::{budget_score, is_plan_compatible},
    distance::distance_km,
    matching::match_percentage,
};
use crate::models::{FeatureWeights, GymCandidate, GymFeatures, PlanType, UserProfile};

/// Distance at which travel proximity decays to 1/e
const TRAVEL_DECAY_KM: f64 = 10.0;

/// Build the learned-model feature row for a gym
pub fn extract_features(profile: &UserProfile, gym: &GymCandidate) -> GymFeatures {
    GymFeatures {
        gym_id: gym.id,
        distance_km: distance_km(profile, gym),
        price: gym.price_for(profile.plan_type.unwrap_or(PlanType::Monthly)),
        budget_score: budget_score(gym, profile.budget, profile.plan_type),
        equipment_match: f64::from(match_percentage(&profile.preferred_equipment_ids, &gym.equipment_ids)) / 100.0,
        amenity_match: f64::from(match_percentage(&profile.preferred_amenity_ids, &gym.amenity_ids)) / 100.0,
        plan_compatible: is_plan_compatible(profile.plan_type, gym),
    }
}

/// Travel proximity (0-1), exponentially decaying with distance
///
/// Unknown distance scores zero.
#[inline]
pub fn travel_score(distance_km: Option<f64>) -> f64 {
    match distance_km {
        Some(d) if d >= 0.0 => (-d / TRAVEL_DECAY_KM).exp(),
        _ => 0.0,
    }
}

/// Price attractiveness of each row relative to the cheapest priced row
///
/// Cost criterion: the cheapest gym scores 1, others `cheapest / price`.
/// Rows without a price score zero.
pub fn price_scores(rows: &[GymFeatures]) -> Vec<f64> {
    let cheapest = rows
        .iter()
        .filter_map(|row| row.price)
        .filter(|price| price.is_finite() && *price >= 0.0)
        .fold(None, |min: Option<f64>, price| Some(min.map_or(price, |m| m.min(price))));

    rows.iter()
        .map(|row| match (row.price, cheapest) {
            (Some(price), Some(min)) if price.is_finite() && price > 0.0 => (min / price).clamp(0.0, 1.0),
            (Some(price), Some(_)) if price == 0.0 => 1.0,
            _ => 0.0,
        })
        .collect()
}

/// Weighted learned score (0-1) of a feature row
///
/// Each weight scales the feature it was trained on: `travel` the travel
/// proximity, `price` the price score, `penalty` the budget score (sent to
/// the weights service as `budget_penalty`).
pub fn learned_score(features: &GymFeatures, price_score: f64, weights: &FeatureWeights) -> f64 {
    let score = features.equipment_match * weights.equipment
        + features.amenity_match * weights.amenity
        + travel_score(features.distance_km) * weights.travel
        + price_score * weights.price
        + features.budget_score * weights.penalty;

    score.clamp(0.0, 1.0)
}

/// Learned scores for a request's rows, in order
pub fn learned_scores(rows: &[GymFeatures], weights: &FeatureWeights) -> Vec<f64> {
    rows.iter()
        .zip(price_scores(rows))
        .map(|(row, price_score)| learned_score(row, price_score, weights))
        .collect()
}
