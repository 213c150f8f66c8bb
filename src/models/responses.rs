use crate::core::Dimension;
use crate::models::domain::{MatchResult, Teacher};
use serde::{Deserialize, Serialize};

/// Response for the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub ranked: Vec<MatchResult>,
    /// Number of ranked teachers before `limit` was applied
    pub total_results: usize,
}

/// Response for the teacher listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeachersResponse {
    pub teachers: Vec<Teacher>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub teachers: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// One entry of the dimension table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionWeight {
    pub dimension: Dimension,
    pub weight: f64,
}

/// Response for the dimensions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionsResponse {
    pub dimensions: Vec<DimensionWeight>,
}

impl DimensionsResponse {
    /// The full weight table in canonical order
    pub fn canonical() -> Self {
        Self {
            dimensions: Dimension::ALL
                .iter()
                .map(|&dimension| DimensionWeight {
                    dimension,
                    weight: dimension.weight(),
                })
                .collect(),
        }
    }
}

/// Corpus reload response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub success: bool,
    pub teachers: usize,
}
