//! Recommender error types.

use thiserror::Error;

/// Errors from building or querying a recommender.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// The catalog cannot be indexed (empty, duplicate titles, bad ratings).
    #[error("Invalid catalog: {0}")]
    Configuration(String),

    /// No movie has the requested title.
    #[error("Movie not found: {0}")]
    NotFound(String),
}

impl RecommendError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
