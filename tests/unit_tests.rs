// Unit tests for FitRank

use fitrank::core::{
    budget::within_budget,
    matching::match_percentage,
    normalize::{normalize_gym, normalize_profile},
    scoring::{calculate_breakdown, calculate_composite},
};
use fitrank::models::{BudgetPolicy, GymCandidate, RawGymRecord, RawUserProfile, ScoringWeights, UserProfile};
use std::collections::BTreeSet;

fn ids(values: &[i64]) -> BTreeSet<i64> {
    values.iter().copied().collect()
}

#[test]
fn test_vacuous_match_for_any_owned_set() {
    for owned in [ids(&[]), ids(&[1]), ids(&[1, 2, 3, 4, 5])] {
        assert_eq!(match_percentage(&ids(&[]), &owned), 100);
    }
}

#[test]
fn test_match_percentage_bounds() {
    let owned_sets = [ids(&[]), ids(&[2]), ids(&[1, 3, 5]), ids(&[1, 2, 3, 4, 5, 6])];
    let required_sets = [ids(&[1]), ids(&[1, 2]), ids(&[1, 2, 3]), ids(&[2, 4, 6, 8, 10, 12, 14])];

    for required in &required_sets {
        assert_eq!(match_percentage(required, required), 100, "Self match should be full");
        for owned in &owned_sets {
            let pct = match_percentage(required, owned);
            assert!(pct <= 100, "Percentage {} out of range", pct);
        }
    }
}

#[test]
fn test_match_percentage_asymmetry() {
    let a = ids(&[1, 2, 3, 4]);
    let b = ids(&[1]);

    assert_eq!(match_percentage(&a, &b), 25);
    assert_eq!(match_percentage(&b, &a), 100);
    assert_ne!(match_percentage(&a, &b), match_percentage(&b, &a));
}

#[test]
fn test_scenario_daily_tier_within_budget() {
    let gym = GymCandidate {
        id: 1,
        daily_price: Some(300.0),
        monthly_price: Some(2000.0),
        ..Default::default()
    };

    assert!(within_budget(&gym, Some(500.0), None, BudgetPolicy::AnyTier));
}

#[test]
fn test_scenario_no_budget_always_fits() {
    let gyms = [
        GymCandidate { id: 1, ..Default::default() },
        GymCandidate {
            id: 2,
            daily_price: Some(1_000_000.0),
            monthly_price: Some(1_000_000.0),
            ..Default::default()
        },
    ];

    for gym in &gyms {
        assert!(within_budget(gym, None, None, BudgetPolicy::AnyTier));
    }
}

#[test]
fn test_scenario_partial_equipment() {
    assert_eq!(match_percentage(&ids(&[10, 20, 30]), &ids(&[10, 20])), 67);
}

#[test]
fn test_scenario_all_flags_full_match() {
    let gym = GymCandidate {
        id: 1,
        monthly_price: Some(1000.0),
        equipment_ids: ids(&[1, 2]),
        has_personal_trainers: true,
        has_classes: true,
        is_airconditioned: true,
        ..Default::default()
    };
    let profile = UserProfile {
        budget: Some(1000.0),
        preferred_equipment_ids: ids(&[1, 2]),
        ..Default::default()
    };

    let breakdown = calculate_breakdown(&gym, &profile, &ScoringWeights::default(), BudgetPolicy::AnyTier);

    assert!(breakdown.budget_fit);
    assert_eq!(breakdown.equipment_match_pct, 100);
    assert_eq!(breakdown.composite_score, 95);
}

#[test]
fn test_composite_always_in_range() {
    let weights = ScoringWeights::default();

    for budget_fit in [false, true] {
        for equipment in [0u8, 1, 33, 50, 67, 99, 100] {
            for amenity in [0u8, 50, 100] {
                for bonus in [0u8, 5, 10, 15] {
                    let score = calculate_composite(budget_fit, equipment, amenity, bonus, &weights);
                    assert!(score <= 100, "Composite {} out of range", score);
                }
            }
        }
    }

    assert_eq!(calculate_composite(true, 100, 100, 15, &weights), 95);
    assert_eq!(calculate_composite(false, 0, 0, 0, &weights), 0);
}

#[test]
fn test_missing_prices_not_penalized_without_budget() {
    let raw: RawGymRecord = serde_json::from_value(serde_json::json!({
        "id": 3,
        "daily_price": null,
        "monthly_price": null
    }))
    .unwrap();

    let gym = normalize_gym(&raw).unwrap();
    let profile = normalize_profile(&RawUserProfile::default()).unwrap();
    let breakdown = calculate_breakdown(&gym, &profile, &ScoringWeights::default(), BudgetPolicy::AnyTier);

    assert!(breakdown.budget_fit);
    assert_eq!(breakdown.equipment_match_pct, 100);
    assert_eq!(breakdown.amenity_match_pct, 100);
    assert_eq!(breakdown.composite_score, 80);
}
