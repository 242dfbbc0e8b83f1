use serde_json::Value;
use std::collections::BTreeSet;

use crate::core::error::ScoringError;
use crate::models::{GymCandidate, PlanType, RawGymRecord, RawUserProfile, UserProfile};

/// Normalise a raw gym record into a scoring candidate
///
/// Missing prices stay `None` so they never count against the gym.
pub fn normalize_gym(raw: &RawGymRecord) -> Result<GymCandidate, ScoringError> {
    let id = parse_id("id", &raw.id)?;
    let field = |name: &str| format!("gyms[{}].{}", id, name);

    Ok(GymCandidate {
        id,
        daily_price: parse_amount(&field("dailyPrice"), raw.daily_price.as_ref())?,
        monthly_price: parse_amount(&field("monthlyPrice"), raw.monthly_price.as_ref())?,
        annual_price: parse_amount(&field("annualPrice"), raw.annual_price.as_ref())?,
        gym_type: raw
            .gym_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string),
        equipment_ids: parse_id_set(&field("equipmentIds"), &raw.equipment_ids)?,
        amenity_ids: parse_id_set(&field("amenityIds"), &raw.amenity_ids)?,
        has_personal_trainers: parse_flag(&field("hasPersonalTrainers"), raw.has_personal_trainers.as_ref())?,
        has_classes: parse_flag(&field("hasClasses"), raw.has_classes.as_ref())?,
        is_airconditioned: parse_flag(&field("isAirconditioned"), raw.is_airconditioned.as_ref())?,
        is_24_hours: parse_flag(&field("is24Hours"), raw.is_24_hours.as_ref())?,
        latitude: parse_coordinate(&field("latitude"), raw.latitude.as_ref(), 90.0)?,
        longitude: parse_coordinate(&field("longitude"), raw.longitude.as_ref(), 180.0)?,
    })
}

/// Normalise a raw user preference record
pub fn normalize_profile(raw: &RawUserProfile) -> Result<UserProfile, ScoringError> {
    Ok(UserProfile {
        budget: parse_amount("profile.budget", raw.budget.as_ref())?,
        plan_type: parse_plan_type(raw.plan_type.as_deref())?,
        preferred_equipment_ids: parse_id_set("profile.preferredEquipmentIds", &raw.preferred_equipment_ids)?,
        preferred_amenity_ids: parse_id_set("profile.preferredAmenityIds", &raw.preferred_amenity_ids)?,
        latitude: parse_coordinate("profile.latitude", raw.latitude.as_ref(), 90.0)?,
        longitude: parse_coordinate("profile.longitude", raw.longitude.as_ref(), 180.0)?,
    })
}

/// Normalise every gym, failing on the first malformed record
pub fn normalize_gyms(raw: &[RawGymRecord]) -> Result<Vec<GymCandidate>, ScoringError> {
    raw.iter().map(normalize_gym).collect()
}

/// Coerce a boolean flag to 0/1
#[inline]
pub fn flag_value(flag: bool) -> u8 {
    u8::from(flag)
}

fn parse_number(field: &str, value: &Value) -> Result<Option<f64>, ScoringError> {
    let number = match value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => return Ok(None),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(ScoringError::invalid(field, format!("expected a number, got {}", value))),
    }
}

fn parse_amount(field: &str, value: Option<&Value>) -> Result<Option<f64>, ScoringError> {
    let Some(value) = value else {
        return Ok(None);
    };

    match parse_number(field, value)? {
        Some(n) if n < 0.0 => Err(ScoringError::invalid(field, format!("must be non-negative, got {}", n))),
        amount => Ok(amount),
    }
}

fn parse_coordinate(field: &str, value: Option<&Value>, limit: f64) -> Result<Option<f64>, ScoringError> {
    let Some(value) = value else {
        return Ok(None);
    };

    match parse_number(field, value)? {
        Some(c) if c.abs() > limit => Err(ScoringError::invalid(field, format!("out of range: {}", c))),
        coordinate => Ok(coordinate),
    }
}

fn parse_flag(field: &str, value: Option<&Value>) -> Result<bool, ScoringError> {
    let Some(value) = value else {
        return Ok(false);
    };

    match value {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(ScoringError::invalid(field, format!("expected 0 or 1, got {}", n))),
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "false" => Ok(false),
            "1" | "true" => Ok(true),
            other => Err(ScoringError::invalid(field, format!("expected a boolean, got \"{}\"", other))),
        },
        other => Err(ScoringError::invalid(field, format!("expected a boolean, got {}", other))),
    }
}

fn parse_id(field: &str, value: &Value) -> Result<i64, ScoringError> {
    let id = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    id.ok_or_else(|| ScoringError::invalid(field, format!("expected an integer identifier, got {}", value)))
}

fn parse_id_set(field: &str, values: &[Value]) -> Result<BTreeSet<i64>, ScoringError> {
    values.iter().map(|v| parse_id(field, v)).collect()
}

fn parse_plan_type(value: Option<&str>) -> Result<Option<PlanType>, ScoringError> {
    match value.map(|s| s.trim().to_ascii_lowercase()) {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) if s == "daily" => Ok(Some(PlanType::Daily)),
        Some(s) if s == "monthly" => Ok(Some(PlanType::Monthly)),
        Some(other) => Err(ScoringError::invalid(
            "profile.planType",
            format!("expected daily or monthly, got \"{}\"", other),
        )),
    }
}
