//! Unitinder Algo - Weighted persona matching for students and teachers
//!
//! This library ranks teachers by how closely their teaching persona matches
//! a student's learning persona. Personas are points in a fixed
//! 24-dimensional space; compatibility is derived from a weighted Manhattan
//! distance and every match is explained by its best and worst aligned
//! dimensions.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{rank_teachers, weighted_distance, compatibility_score, Dimension};
pub use models::{Persona, Teacher, MatchResult, MatchExplanation, MatchRequest, MatchResponse};
pub use services::{load_teachers, parse_teachers, CorpusError, CorpusStore};
