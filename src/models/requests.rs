use crate::models::Persona;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request to rank teachers for a student
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(custom(function = "validate_persona_range"))]
    #[serde(
        alias = "student_persona",
        rename = "studentPersona",
        deserialize_with = "Persona::deserialize_mapping"
    )]
    pub student_persona: Persona,
    #[serde(default)]
    pub subject: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Query string for listing teachers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeachersQuery {
    #[serde(default)]
    pub subject: Option<String>,
}

/// Every supplied dimension must be a finite number in [0, 1]
fn validate_persona_range(persona: &Persona) -> Result<(), ValidationError> {
    for (dim, value) in persona.specified() {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            let mut error = ValidationError::new("persona_range");
            error.message = Some(
                format!("dimension `{}` must be between 0 and 1, got {}", dim, value).into(),
            );
            return Err(error);
        }
    }
    Ok(())
}
