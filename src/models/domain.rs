use crate::core::dimensions::{Dimension, DIMENSION_COUNT};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Value read for any dimension a persona leaves unspecified
pub const NEUTRAL_VALUE: f64 = 0.5;

/// A point in the 24-dimensional learning style space
///
/// Values are stored per dimension; unspecified dimensions read as
/// [`NEUTRAL_VALUE`] through [`Persona::get`]. Deserializes from a JSON object
/// keyed by dimension wire name, ignoring unknown keys. `null` reads as an
/// empty persona.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Persona {
    values: [Option<f64>; DIMENSION_COUNT],
}

impl Persona {
    /// Persona with no dimension specified
    pub fn new() -> Self {
        Self::default()
    }

    /// Persona with every dimension set to `value`
    pub fn uniform(value: f64) -> Self {
        Self {
            values: [Some(value); DIMENSION_COUNT],
        }
    }

    /// Build a persona from `(dimension, value)` pairs; later pairs win
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Dimension, f64)>,
    {
        pairs
            .into_iter()
            .fold(Self::new(), |persona, (dim, value)| persona.with(dim, value))
    }

    /// Copy of this persona with `dimension` set to `value`
    #[must_use]
    pub fn with(mut self, dimension: Dimension, value: f64) -> Self {
        self.values[dimension.index()] = Some(value);
        self
    }

    /// Value for `dimension`, or 0.5 if unspecified
    #[inline]
    pub fn get(&self, dimension: Dimension) -> f64 {
        self.values[dimension.index()].unwrap_or(NEUTRAL_VALUE)
    }

    /// Raw value for `dimension`, `None` if unspecified
    #[inline]
    pub fn raw(&self, dimension: Dimension) -> Option<f64> {
        self.values[dimension.index()]
    }

    /// Iterate over the specified dimensions in canonical order
    pub fn specified(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL
            .iter()
            .filter_map(move |&dim| self.raw(dim).map(|value| (dim, value)))
    }

    /// Number of specified dimensions
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for Persona {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (dim, value) in self.specified() {
            map.serialize_entry(dim.as_str(), &value)?;
        }
        map.end()
    }
}

struct PersonaVisitor;

impl<'de> Visitor<'de> for PersonaVisitor {
    type Value = Persona;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a mapping of persona dimension names to numbers")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Persona, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut persona = Persona::new();
        while let Some(key) = access.next_key::<String>()? {
            match key.parse::<Dimension>() {
                Ok(dim) => {
                    let value = access.next_value::<f64>().map_err(|e| {
                        <A::Error as de::Error>::custom(format!("dimension `{}`: {}", key, e))
                    })?;
                    persona = persona.with(dim, value);
                }
                Err(_) => {
                    access.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(persona)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Persona, E> {
        Ok(Persona::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Persona, E> {
        Ok(Persona::new())
    }
}

impl<'de> Deserialize<'de> for Persona {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PersonaVisitor)
    }
}

impl Persona {
    /// Strict form of [`Persona`]'s `Deserialize`: only a mapping is accepted,
    /// `null` is an error
    pub fn deserialize_mapping<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PersonaVisitor)
    }
}

/// Teacher record from the corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub teacher_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub archetype: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tagline: String,
    /// Fallback descriptive text
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,
    #[serde(default)]
    pub persona: Persona,
    /// Fields the ranking ignores (voice ids, video urls, ...), kept so they
    /// are served back unchanged
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Display fields read `null` the same as a missing field
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Dimensions explaining a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchExplanation {
    /// Closest aligned dimensions, best first
    pub best: [Dimension; 3],
    /// Furthest apart dimensions, worst first
    pub worst: [Dimension; 2],
}

/// Scored teacher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub teacher_id: String,
    pub name: String,
    pub subject: String,
    pub archetype: String,
    pub tagline: String,
    pub summary: String,
    pub compatibility_score: f64,
    pub why: MatchExplanation,
}
