//! FitRank - gym fit-scoring and ranking service
//!
//! This library provides the scoring engine behind gym recommendations:
//! budget fit, equipment and amenity matching, a clamped composite score and
//! a deterministic ranking over a request's candidate gyms.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Ranker, RankingResult, ScoringError, match_percentage, within_budget};
pub use models::{GymCandidate, UserProfile, RankedGym, ScoreBreakdown, ScoringWeights, BudgetPolicy, RankGymsRequest, RankGymsResponse};
