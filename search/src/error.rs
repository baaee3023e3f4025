//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Once a search starts it
//! always runs to frontier exhaustion; finding no route is an empty
//! [`crate::search::SearchResult`], not an error.

/// Typed failure for pre-flight search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A frontier discipline name did not match `stack` or `queue`.
    UnknownDiscipline { name: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownDiscipline { name } => {
                write!(f, "unknown frontier discipline {name:?} (expected stack or queue)")
            }
        }
    }
}

impl std::error::Error for SearchError {}
