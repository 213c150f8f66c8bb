// Service exports
pub mod corpus;

pub use corpus::{load_teachers, parse_teachers, CorpusError, CorpusStore};
