// Core algorithm exports
pub mod budget;
pub mod distance;
pub mod error;
pub mod features;
pub mod filters;
pub mod matching;
pub mod normalize;
pub mod ranker;
pub mod scoring;

pub use budget::{budget_score, is_plan_compatible, within_budget};
pub use distance::{distance_km, haversine_distance};
pub use error::ScoringError;
pub use features::{extract_features, learned_score, learned_scores, price_scores, travel_score};
pub use filters::{matches_filter, matches_price};
pub use matching::{match_percentage, matched_ids};
pub use normalize::{flag_value, normalize_gym, normalize_gyms, normalize_profile};
pub use ranker::{Ranker, RankingResult};
pub use scoring::{calculate_breakdown, calculate_composite, calculate_feature_bonus, compare_ranked};
