use std::cmp::Ordering;

use crate::core::{budget::within_budget, matching::match_percentage};
use crate::models::{BudgetPolicy, GymCandidate, RankedGym, ScoreBreakdown, ScoringWeights, UserProfile};

/// Calculate the score breakdown (composite 0-100) for a gym
///
/// Scoring formula:
/// score = (
///     budget_points * budget_fit +          # 30 when within budget
///     equipment_pct * equipment_weight +    # up to 50
///     amenity_pct * amenity_weight +        # 0 unless configured
///     feature_bonus                         # +5 trainers, +5 classes, +5 aircon
/// )
/// composite = clamp(round(score), 0, 100)
pub fn calculate_breakdown(
    gym: &GymCandidate,
    profile: &UserProfile,
    weights: &ScoringWeights,
    policy: BudgetPolicy,
) -> ScoreBreakdown {
    let budget_fit = within_budget(gym, profile.budget, profile.plan_type, policy);
    let equipment_match_pct = match_percentage(&profile.preferred_equipment_ids, &gym.equipment_ids);
    let amenity_match_pct = match_percentage(&profile.preferred_amenity_ids, &gym.amenity_ids);
    let feature_bonus = calculate_feature_bonus(gym, weights);

    let composite_score = calculate_composite(
        budget_fit,
        equipment_match_pct,
        amenity_match_pct,
        feature_bonus,
        weights,
    );

    ScoreBreakdown {
        budget_fit,
        equipment_match_pct,
        amenity_match_pct,
        feature_bonus,
        composite_score,
    }
}

/// Flat bonus for each amenity flag the gym has
#[inline]
pub fn calculate_feature_bonus(gym: &GymCandidate, weights: &ScoringWeights) -> u8 {
    let bonus = |present: bool, points: u8| if present { points } else { 0 };

    bonus(gym.has_personal_trainers, weights.personal_trainers_bonus)
        .saturating_add(bonus(gym.has_classes, weights.classes_bonus))
        .saturating_add(bonus(gym.is_airconditioned, weights.aircon_bonus))
}

/// Combine sub-scores into the clamped 0-100 composite
#[inline]
pub fn calculate_composite(
    budget_fit: bool,
    equipment_match_pct: u8,
    amenity_match_pct: u8,
    feature_bonus: u8,
    weights: &ScoringWeights,
) -> u8 {
    let budget_points = if budget_fit { weights.budget_points } else { 0.0 };

    let total = budget_points
        + f64::from(equipment_match_pct) * weights.equipment
        + f64::from(amenity_match_pct) * weights.amenity
        + f64::from(feature_bonus);

    if !total.is_finite() {
        return 0;
    }

    total.round().clamp(0.0, 100.0) as u8
}

/// Ranking order: highest composite first, ties by ascending gym id
#[inline]
pub fn compare_ranked(a: &RankedGym, b: &RankedGym) -> Ordering {
    b.composite_score
        .cmp(&a.composite_score)
        .then_with(|| a.gym_id.cmp(&b.gym_id))
}
