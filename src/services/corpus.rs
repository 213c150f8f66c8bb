use crate::models::Teacher;
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur while loading the teacher corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to read corpus file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in corpus: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed corpus: {0}")]
    Shape(String),

    #[error("Malformed teacher record at index {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate teacher_id `{teacher_id}` at index {index}")]
    DuplicateId { teacher_id: String, index: usize },
}

/// Parse a teacher corpus from a JSON document
///
/// Accepts either `{ "teachers": [...] }` or a bare array of teacher objects.
/// Each record is checked individually so errors point at the offending
/// index; a persona that is not a mapping fails the whole corpus rather
/// than silently reading as neutral.
pub fn parse_teachers(json: &str) -> Result<Vec<Teacher>, CorpusError> {
    let document: Value = serde_json::from_str(json)?;

    let records = match document {
        Value::Array(records) => records,
        Value::Object(mut map) => match map.remove("teachers") {
            Some(Value::Array(records)) => records,
            Some(_) => {
                return Err(CorpusError::Shape(
                    "`teachers` must be an array".to_string(),
                ))
            }
            None => {
                return Err(CorpusError::Shape(
                    "expected an array of teachers or an object with a `teachers` array"
                        .to_string(),
                ))
            }
        },
        _ => {
            return Err(CorpusError::Shape(
                "expected an array of teachers or an object with a `teachers` array".to_string(),
            ))
        }
    };

    let mut seen = HashSet::with_capacity(records.len());
    let mut teachers = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let teacher: Teacher = serde_json::from_value(record)
            .map_err(|source| CorpusError::Record { index, source })?;

        if !seen.insert(teacher.teacher_id.clone()) {
            return Err(CorpusError::DuplicateId {
                teacher_id: teacher.teacher_id,
                index,
            });
        }

        teachers.push(teacher);
    }

    Ok(teachers)
}

/// Load a teacher corpus from a JSON file
pub async fn load_teachers<P: AsRef<Path>>(path: P) -> Result<Vec<Teacher>, CorpusError> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let teachers = parse_teachers(&json)?;
    tracing::info!("Loaded {} teachers from {}", teachers.len(), path.display());
    Ok(teachers)
}

/// Holds the current corpus snapshot
///
/// Readers take an `Arc` to an immutable snapshot and keep it for the
/// duration of a ranking call; `reload` swaps in a new snapshot only when
/// the file parses cleanly.
pub struct CorpusStore {
    path: PathBuf,
    snapshot: RwLock<Arc<[Teacher]>>,
}

impl CorpusStore {
    /// Create a store by loading the corpus at `path`
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, CorpusError> {
        let path = path.into();
        let teachers = load_teachers(&path).await?;

        Ok(Self {
            path,
            snapshot: RwLock::new(teachers.into()),
        })
    }

    /// Create a store from an in-memory corpus; `reload` reads `path`
    pub fn from_teachers<P: Into<PathBuf>>(path: P, teachers: Vec<Teacher>) -> Self {
        Self {
            path: path.into(),
            snapshot: RwLock::new(teachers.into()),
        }
    }

    /// Current corpus snapshot
    pub async fn snapshot(&self) -> Arc<[Teacher]> {
        Arc::clone(&*self.snapshot.read().await)
    }

    /// Re-read the corpus file; on error the previous snapshot stays active
    pub async fn reload(&self) -> Result<usize, CorpusError> {
        let teachers = load_teachers(&self.path).await?;
        let count = teachers.len();

        *self.snapshot.write().await = teachers.into();

        tracing::info!("Corpus reloaded ({} teachers)", count);
        Ok(count)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
