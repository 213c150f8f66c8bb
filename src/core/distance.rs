use crate::core::dimensions::{Dimension, DIMENSION_COUNT};
use crate::models::Persona;

/// Per-dimension weighted contributions, sorted ascending
pub type Contributions = [(Dimension, f64); DIMENSION_COUNT];

/// Weighted contribution of a single dimension to the distance
#[inline]
pub fn dimension_contribution(student: &Persona, teacher: &Persona, dimension: Dimension) -> f64 {
    dimension.weight() * (student.get(dimension) - teacher.get(dimension)).abs()
}

/// Weighted Manhattan distance between a student and a teacher persona
///
/// Sums `weight * |student - teacher|` over all 24 dimensions, reading
/// unspecified dimensions as 0.5 on either side. Zero iff the two personas
/// agree on every dimension.
#[inline]
pub fn weighted_distance(student: &Persona, teacher: &Persona) -> f64 {
    Dimension::ALL
        .iter()
        .map(|&dim| dimension_contribution(student, teacher, dim))
        .sum()
}

/// Per-dimension contributions sorted from smallest to largest
///
/// The sort is stable, so dimensions with equal contributions stay in
/// canonical order.
pub fn dimension_contributions(student: &Persona, teacher: &Persona) -> Contributions {
    let mut contributions =
        Dimension::ALL.map(|dim| (dim, dimension_contribution(student, teacher, dim)));
    contributions.sort_by(|a, b| a.1.total_cmp(&b.1));
    contributions
}
