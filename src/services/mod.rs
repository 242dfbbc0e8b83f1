// Service exports
pub mod weights;

pub use weights::{ResolvedWeights, WeightsClient, WeightsError, WeightsSource};
