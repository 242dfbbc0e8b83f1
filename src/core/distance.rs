use geo::{HaversineDistance, Point};

use crate::models::{GymCandidate, UserProfile};

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let from = Point::new(lon1, lat1);
    let to = Point::new(lon2, lat2);

    from.haversine_distance(&to) / 1000.0
}

/// Distance from the user to a gym, rounded to 2 decimals
///
/// `None` when either side has no coordinates.
pub fn distance_km(profile: &UserProfile, gym: &GymCandidate) -> Option<f64> {
    let (user_lat, user_lon) = profile.coordinates()?;
    let (gym_lat, gym_lon) = gym.coordinates()?;

    let km = haversine_distance(user_lat, user_lon, gym_lat, gym_lon);
    Some((km * 100.0).round() / 100.0)
}
