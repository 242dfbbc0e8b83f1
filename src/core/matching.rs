use std::collections::BTreeSet;

/// Percentage (0-100) of the required identifiers the owner has
///
/// An empty requirement is a full match. Rounds half up, computed in
/// integers: round(100 * m / n) == (200 * m + n) / (2 * n).
#[inline]
pub fn match_percentage(required: &BTreeSet<i64>, owned: &BTreeSet<i64>) -> u8 {
    let total = required.len();
    if total == 0 {
        return 100;
    }

    let matched = required.intersection(owned).count();
    let pct = (200 * matched + total) / (2 * total);

    // matched <= total, so pct <= 100
    pct as u8
}

/// Required identifiers the owner has, ascending
pub fn matched_ids(required: &BTreeSet<i64>, owned: &BTreeSet<i64>) -> Vec<i64> {
    required.intersection(owned).copied().collect()
}
