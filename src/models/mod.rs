// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{MatchExplanation, MatchResult, Persona, Teacher, NEUTRAL_VALUE};
pub use requests::{MatchRequest, TeachersQuery};
pub use responses::{
    DimensionWeight, DimensionsResponse, ErrorResponse, HealthResponse, MatchResponse,
    ReloadResponse, TeachersResponse,
};
