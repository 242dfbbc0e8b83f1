// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetPolicy, FeatureWeights, GymCandidate, GymFeatures, GymFilter, PlanType, PriceRange,
    RankedGym, ScoreBreakdown, ScoringWeights, UserProfile,
};
pub use requests::{FeaturesRequest, RankGymsRequest, RawGymRecord, RawUserProfile};
pub use responses::{
    ErrorResponse, FeaturesResponse, HealthResponse, RankGymsResponse, ScoredFeatures, WeightsResponse,
};
