use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::models::domain::GymFilter;

/// Gym record as sent by the catalog backend.
///
/// Prices arrive as numbers, decimal strings or null and flags as booleans
/// or 0/1, so values stay loosely typed until normalisation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGymRecord {
    #[serde(alias = "gym_id", alias = "gymId")]
    pub id: Value,
    #[serde(default, alias = "daily_price")]
    pub daily_price: Option<Value>,
    #[serde(default, alias = "monthly_price")]
    pub monthly_price: Option<Value>,
    #[serde(default, alias = "annual_price")]
    pub annual_price: Option<Value>,
    #[serde(default, alias = "gym_type")]
    pub gym_type: Option<String>,
    #[serde(default, alias = "equipment_ids")]
    pub equipment_ids: Vec<Value>,
    #[serde(default, alias = "amenity_ids")]
    pub amenity_ids: Vec<Value>,
    #[serde(default, alias = "has_personal_trainers")]
    pub has_personal_trainers: Option<Value>,
    #[serde(default, alias = "has_classes")]
    pub has_classes: Option<Value>,
    #[serde(default, alias = "is_airconditioned")]
    pub is_airconditioned: Option<Value>,
    #[serde(default, alias = "is_24_hours")]
    pub is_24_hours: Option<Value>,
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
}

/// User preference record as sent by the catalog backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserProfile {
    #[serde(default)]
    pub budget: Option<Value>,
    #[serde(default, alias = "plan_type")]
    pub plan_type: Option<String>,
    #[serde(default, alias = "preferred_equipments", alias = "preferredEquipments")]
    pub preferred_equipment_ids: Vec<Value>,
    #[serde(default, alias = "preferred_amenities", alias = "preferredAmenities")]
    pub preferred_amenity_ids: Vec<Value>,
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
}

/// Request to rank gyms for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankGymsRequest {
    #[serde(alias = "user")]
    pub profile: RawUserProfile,
    #[serde(default)]
    pub gyms: Vec<RawGymRecord>,
    #[serde(default)]
    pub filter: Option<GymFilter>,
    #[validate(range(min = 1, max = 500))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to extract learned-model features for a user's gyms
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeaturesRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: i64,
    #[serde(alias = "user")]
    pub profile: RawUserProfile,
    #[serde(default)]
    pub gyms: Vec<RawGymRecord>,
}
