use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{extract_features, learned_scores, normalize_gyms, normalize_profile, Ranker, ScoringError};
use crate::models::{
    ErrorResponse, FeaturesRequest, FeaturesResponse, GymFeatures, HealthResponse, RankGymsRequest,
    RankGymsResponse, ScoredFeatures, WeightsResponse,
};
use crate::services::WeightsClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: Ranker,
    pub weights: Arc<WeightsClient>,
}

/// Configure all gym ranking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/gyms/rank", web::post().to(rank_gyms))
        .route("/gyms/features", web::post().to(gym_features))
        .route("/weights", web::get().to(get_weights));
}

fn validation_failed(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message,
        status_code: 400,
    })
}

fn invalid_attribute(err: ScoringError) -> HttpResponse {
    tracing::info!("Rejected scoring input: {}", err);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid attribute".to_string(),
        message: err.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank gyms endpoint
///
/// POST /api/v1/gyms/rank
///
/// Request body:
/// ```json
/// {
///   "profile": { "budget": 500, "planType": "monthly", "preferredEquipmentIds": [1, 2] },
///   "gyms": [{ "id": 1, "dailyPrice": "150.00", "monthlyPrice": 1800, "equipmentIds": [1] }],
///   "filter": { "isAirconditioned": true },
///   "limit": 20
/// }
/// ```
async fn rank_gyms(state: web::Data<AppState>, req: web::Json<RankGymsRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors.to_string());
    }

    let profile = match normalize_profile(&req.profile) {
        Ok(profile) => profile,
        Err(e) => return invalid_attribute(e),
    };

    let candidates = match normalize_gyms(&req.gyms) {
        Ok(candidates) => candidates,
        Err(e) => return invalid_attribute(e),
    };

    tracing::debug!("Ranking {} gyms", candidates.len());

    let result = state.ranker.rank_filtered(
        &profile,
        &candidates,
        req.filter.as_ref(),
        req.limit.map(usize::from),
    );

    let response = RankGymsResponse {
        rankings: result.rankings,
        total_candidates: result.total_candidates,
        request_id: uuid::Uuid::new_v4().to_string(),
    };

    tracing::info!(
        "Returning {} ranked gyms (from {} candidates, request {})",
        response.rankings.len(),
        response.total_candidates,
        response.request_id
    );

    HttpResponse::Ok().json(response)
}

/// Gym features endpoint
///
/// POST /api/v1/gyms/features
///
/// Returns the learned-model feature rows for each gym together with the
/// weights in effect and the resulting learned score.
async fn gym_features(state: web::Data<AppState>, req: web::Json<FeaturesRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors.to_string());
    }

    let profile = match normalize_profile(&req.profile) {
        Ok(profile) => profile,
        Err(e) => return invalid_attribute(e),
    };

    let candidates = match normalize_gyms(&req.gyms) {
        Ok(candidates) => candidates,
        Err(e) => return invalid_attribute(e),
    };

    let rows: Vec<GymFeatures> = candidates
        .iter()
        .map(|gym| extract_features(&profile, gym))
        .collect();

    let resolved = state.weights.get(req.user_id, &rows).await;

    let scores = learned_scores(&rows, &resolved.weights);
    let gyms = rows
        .into_iter()
        .zip(scores)
        .map(|(features, learned_score)| ScoredFeatures {
            learned_score,
            features,
        })
        .collect();

    HttpResponse::Ok().json(FeaturesResponse {
        weights: resolved.weights,
        weights_source: resolved.source.as_str().to_string(),
        gyms,
    })
}

/// Current learned weights
///
/// GET /api/v1/weights?userId={userId}
async fn get_weights(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let user_id = match query.get("userId").map(|id| id.parse::<i64>()) {
        Some(Ok(id)) => id,
        Some(Err(_)) => {
            return validation_failed("userId must be an integer".to_string());
        }
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing userId parameter".to_string(),
                message: "userId query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    let resolved = state.weights.get(user_id, &[]).await;

    HttpResponse::Ok().json(WeightsResponse {
        weights: resolved.weights,
        source: resolved.source.as_str().to_string(),
    })
}
