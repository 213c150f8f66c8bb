// Core algorithm exports
pub mod dimensions;
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use dimensions::{Dimension, UnknownDimension, DIMENSION_COUNT};
pub use distance::{dimension_contribution, dimension_contributions, weighted_distance, Contributions};
pub use filters::{filter_by_subject, matches_subject};
pub use matcher::{rank_teachers, score_teacher};
pub use scoring::{compatibility_score, why_best_worst, MAX_SCORE};
