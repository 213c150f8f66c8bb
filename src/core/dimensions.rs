use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of persona dimensions
pub const DIMENSION_COUNT: usize = 24;

/// One axis of the persona space
///
/// The declaration order is the canonical order used for iteration and for
/// breaking ties when dimensions are sorted by contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Pace,
    Structure,
    Abstraction,
    Interactivity,
    VisualDependency,
    VerbalDensity,
    RepetitionNeed,
    Formality,
    HumorReceptivity,
    FeedbackStyle,
    Autonomy,
    CognitiveLoadTolerance,
    AttentionSpan,
    MotivationType,
    ErrorTolerance,
    SocialPreference,
    RealWorldNeed,
    EmotionalSensitivity,
    QuestionComfort,
    NoteTakingStyle,
    ChallengePreference,
    ContextNeed,
    StorytellingAffinity,
    RevisionStyle,
}

impl Dimension {
    /// All dimensions in canonical order
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::Pace,
        Dimension::Structure,
        Dimension::Abstraction,
        Dimension::Interactivity,
        Dimension::VisualDependency,
        Dimension::VerbalDensity,
        Dimension::RepetitionNeed,
        Dimension::Formality,
        Dimension::HumorReceptivity,
        Dimension::FeedbackStyle,
        Dimension::Autonomy,
        Dimension::CognitiveLoadTolerance,
        Dimension::AttentionSpan,
        Dimension::MotivationType,
        Dimension::ErrorTolerance,
        Dimension::SocialPreference,
        Dimension::RealWorldNeed,
        Dimension::EmotionalSensitivity,
        Dimension::QuestionComfort,
        Dimension::NoteTakingStyle,
        Dimension::ChallengePreference,
        Dimension::ContextNeed,
        Dimension::StorytellingAffinity,
        Dimension::RevisionStyle,
    ];

    /// Position of this dimension in [`Dimension::ALL`]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Weight of this dimension in the distance metric
    ///
    /// - 3.0: pace, cognitive load tolerance, verbal density, structure
    /// - 2.0: interactivity, abstraction, feedback style, autonomy,
    ///   real world need, attention span
    /// - 1.0: everything else
    #[inline]
    pub const fn weight(self) -> f64 {
        match self {
            Dimension::Pace
            | Dimension::CognitiveLoadTolerance
            | Dimension::VerbalDensity
            | Dimension::Structure => 3.0,

            Dimension::Interactivity
            | Dimension::Abstraction
            | Dimension::FeedbackStyle
            | Dimension::Autonomy
            | Dimension::RealWorldNeed
            | Dimension::AttentionSpan => 2.0,

            _ => 1.0,
        }
    }

    /// Wire name, e.g. `cognitive_load_tolerance`
    pub const fn as_str(self) -> &'static str {
        match self {
            Dimension::Pace => "pace",
            Dimension::Structure => "structure",
            Dimension::Abstraction => "abstraction",
            Dimension::Interactivity => "interactivity",
            Dimension::VisualDependency => "visual_dependency",
            Dimension::VerbalDensity => "verbal_density",
            Dimension::RepetitionNeed => "repetition_need",
            Dimension::Formality => "formality",
            Dimension::HumorReceptivity => "humor_receptivity",
            Dimension::FeedbackStyle => "feedback_style",
            Dimension::Autonomy => "autonomy",
            Dimension::CognitiveLoadTolerance => "cognitive_load_tolerance",
            Dimension::AttentionSpan => "attention_span",
            Dimension::MotivationType => "motivation_type",
            Dimension::ErrorTolerance => "error_tolerance",
            Dimension::SocialPreference => "social_preference",
            Dimension::RealWorldNeed => "real_world_need",
            Dimension::EmotionalSensitivity => "emotional_sensitivity",
            Dimension::QuestionComfort => "question_comfort",
            Dimension::NoteTakingStyle => "note_taking_style",
            Dimension::ChallengePreference => "challenge_preference",
            Dimension::ContextNeed => "context_need",
            Dimension::StorytellingAffinity => "storytelling_affinity",
            Dimension::RevisionStyle => "revision_style",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of the 24 dimensions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown persona dimension: {0}")]
pub struct UnknownDimension(pub String);

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDimension(s.to_string()))
    }
}
