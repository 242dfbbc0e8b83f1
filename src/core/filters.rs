use crate::models::{GymCandidate, GymFilter, PriceRange};

/// Check if a gym passes the catalog filter
///
/// Flag and gym type predicates require an exact match. A price predicate on a tier the
/// gym does not price fails.
#[inline]
pub fn matches_filter(gym: &GymCandidate, filter: &GymFilter) -> bool {
    let flag_matches = |wanted: Option<bool>, actual: bool| wanted.map_or(true, |w| w == actual);

    if !flag_matches(filter.is_airconditioned, gym.is_airconditioned)
        || !flag_matches(filter.has_personal_trainers, gym.has_personal_trainers)
        || !flag_matches(filter.has_classes, gym.has_classes)
        || !flag_matches(filter.is_24_hours, gym.is_24_hours)
    {
        return false;
    }

    if let Some(gym_type) = filter.gym_type.as_deref() {
        if gym.gym_type.as_deref() != Some(gym_type) {
            return false;
        }
    }

    if !matches_price(gym.daily_price, &filter.daily_price)
        || !matches_price(gym.monthly_price, &filter.monthly_price)
        || !matches_price(gym.annual_price, &filter.annual_price)
    {
        return false;
    }

    if let Some(amenity_id) = filter.amenity_id {
        if !gym.amenity_ids.contains(&amenity_id) {
            return false;
        }
    }

    if let Some(equipment_id) = filter.equipment_id {
        if !gym.equipment_ids.contains(&equipment_id) {
            return false;
        }
    }

    true
}

/// Check a single price tier against its range
#[inline]
pub fn matches_price(price: Option<f64>, range: &PriceRange) -> bool {
    if range.is_unbounded() {
        return true;
    }

    let Some(price) = price else {
        return false;
    };

    range.exact.map_or(true, |exact| price == exact)
        && range.min.map_or(true, |min| price >= min)
        && range.max.map_or(true, |max| price <= max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn create_test_gym() -> GymCandidate {
        GymCandidate {
            id: 1,
            daily_price: Some(150.0),
            monthly_price: Some(1500.0),
            annual_price: None,
            gym_type: Some("General".to_string()),
            equipment_ids: BTreeSet::from([1, 2]),
            amenity_ids: BTreeSet::from([7]),
            has_personal_trainers: true,
            has_classes: false,
            is_airconditioned: true,
            is_24_hours: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_filter_passes() {
        assert!(matches_filter(&create_test_gym(), &GymFilter::default()));
    }

    #[test]
    fn test_flag_filters() {
        let gym = create_test_gym();

        let wants_aircon = GymFilter {
            is_airconditioned: Some(true),
            ..Default::default()
        };
        assert!(matches_filter(&gym, &wants_aircon));

        let wants_classes = GymFilter {
            has_classes: Some(true),
            ..Default::default()
        };
        assert!(!matches_filter(&gym, &wants_classes));

        let wants_no_24h = GymFilter {
            is_24_hours: Some(false),
            ..Default::default()
        };
        assert!(matches_filter(&gym, &wants_no_24h));
    }

    #[test]
    fn test_price_filters() {
        let gym = create_test_gym();

        let range = |min, max| GymFilter {
            monthly_price: PriceRange { exact: None, min, max },
            ..Default::default()
        };
        assert!(matches_filter(&gym, &range(Some(1000.0), Some(2000.0))));
        assert!(matches_filter(&gym, &range(None, Some(1500.0))));
        assert!(!matches_filter(&gym, &range(Some(1600.0), None)));

        let exact_daily = GymFilter {
            daily_price: PriceRange {
                exact: Some(150.0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches_filter(&gym, &exact_daily));
    }

    #[test]
    fn test_price_filter_on_unpriced_tier_fails() {
        let gym = create_test_gym();
        let annual = GymFilter {
            annual_price: PriceRange {
                max: Some(20_000.0),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(!matches_filter(&gym, &annual));
    }

    #[test]
    fn test_membership_filters() {
        let gym = create_test_gym();

        let amenity = |id| GymFilter {
            amenity_id: Some(id),
            ..Default::default()
        };
        assert!(matches_filter(&gym, &amenity(7)));
        assert!(!matches_filter(&gym, &amenity(8)));

        let equipment = GymFilter {
            equipment_id: Some(3),
            ..Default::default()
        };
        assert!(!matches_filter(&gym, &equipment));
    }

    #[test]
    fn test_gym_type_filter() {
        let gym = create_test_gym();
        let of_type = |gym_type: &str| GymFilter {
            gym_type: Some(gym_type.to_string()),
            ..Default::default()
        };

        assert!(matches_filter(&gym, &of_type("General")));
        assert!(!matches_filter(&gym, &of_type("CrossFit")));

        let untyped = GymCandidate {
            gym_type: None,
            ..create_test_gym()
        };
        assert!(!matches_filter(&untyped, &of_type("General")));
    }
}
