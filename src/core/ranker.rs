use crate::models::{BudgetPolicy, GymCandidate, GymFilter, RankedGym, ScoringWeights, UserProfile};
use crate::core::{
    distance::distance_km,
    filters::matches_filter,
    matching::matched_ids,
    scoring::{calculate_breakdown, compare_ranked},
};

/// Result of the ranking process
#[derive(Debug)]
pub struct RankingResult {
    pub rankings: Vec<RankedGym>,
    pub total_candidates: usize,
}

/// Main ranking entry point used by the recommendation endpoint
///
/// # Pipeline Stages
/// 1. Catalog filter (optional)
/// 2. Budget, equipment and amenity evaluation
/// 3. Composite scoring
/// 4. Deterministic ordering and limit
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    weights: ScoringWeights,
    policy: BudgetPolicy,
}

impl Ranker {
    pub fn new(weights: ScoringWeights, policy: BudgetPolicy) -> Self {
        Self { weights, policy }
    }

    pub fn with_default_weights() -> Self {
        Self::default()
    }

    /// Score and order every candidate for a user
    ///
    /// Highest composite first; equal composites are ordered by ascending gym
    /// id so repeated runs give the same order.
    pub fn rank(&self, profile: &UserProfile, candidates: &[GymCandidate]) -> RankingResult {
        self.rank_filtered(profile, candidates, None, None)
    }

    /// Filter, score, order and truncate candidates
    ///
    /// # Arguments
    /// * `profile` - The user's scoring preferences
    /// * `candidates` - Gyms fetched for this request
    /// * `filter` - Catalog predicates applied before scoring
    /// * `limit` - Maximum number of gyms to return
    pub fn rank_filtered(
        &self,
        profile: &UserProfile,
        candidates: &[GymCandidate],
        filter: Option<&GymFilter>,
        limit: Option<usize>,
    ) -> RankingResult {
        let total_candidates = candidates.len();

        if total_candidates == 0 {
            tracing::warn!("Empty candidate set, nothing to rank");
            return RankingResult {
                rankings: Vec::new(),
                total_candidates,
            };
        }

        let mut rankings: Vec<RankedGym> = candidates
            .iter()
            .filter(|gym| filter.map_or(true, |f| matches_filter(gym, f)))
            .map(|gym| self.score_gym(profile, gym))
            .collect();

        rankings.sort_by(compare_ranked);

        if let Some(limit) = limit {
            rankings.truncate(limit);
        }

        tracing::debug!(
            "Ranked {} of {} candidates (policy: {:?})",
            rankings.len(),
            total_candidates,
            self.policy
        );

        RankingResult {
            rankings,
            total_candidates,
        }
    }

    fn score_gym(&self, profile: &UserProfile, gym: &GymCandidate) -> RankedGym {
        let breakdown = calculate_breakdown(gym, profile, &self.weights, self.policy);

        RankedGym {
            gym_id: gym.id,
            budget_fit: breakdown.budget_fit,
            equipment_match_pct: breakdown.equipment_match_pct,
            amenity_match_pct: breakdown.amenity_match_pct,
            feature_bonus: breakdown.feature_bonus,
            composite_score: breakdown.composite_score,
            matched_equipment_ids: matched_ids(&profile.preferred_equipment_ids, &gym.equipment_ids),
            matched_amenity_ids: matched_ids(&profile.preferred_amenity_ids, &gym.amenity_ids),
            distance_km: distance_km(profile, gym),
        }
    }
}
