use crate::core::distance::Contributions;
use crate::models::MatchExplanation;

/// Highest possible compatibility score
pub const MAX_SCORE: f64 = 100.0;

/// Convert a weighted distance into a compatibility score in (0, 100]
///
/// score = 100 / (1 + distance), rounded to two decimals.
///
/// A negative distance cannot come out of `weighted_distance`; it is mapped
/// to a perfect score instead of producing a value above 100.
#[inline]
pub fn compatibility_score(distance: f64) -> f64 {
    if distance < 0.0 {
        return MAX_SCORE;
    }

    round_to_cents(MAX_SCORE / (1.0 + distance))
}

#[inline]
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pick the three best aligned and two worst aligned dimensions
///
/// `contributions` must be sorted ascending (see `dimension_contributions`).
/// `best` is the first three entries, `worst` the last two with the single
/// worst dimension first.
pub fn why_best_worst(contributions: &Contributions) -> MatchExplanation {
    let last = contributions.len() - 1;

    MatchExplanation {
        best: [contributions[0].0, contributions[1].0, contributions[2].0],
        worst: [contributions[last].0, contributions[last - 1].0],
    }
}
