//! Recommendation handler.
//!
//! Takes the most similar movies from the candidate pool, applies the genre
//! and rating filters, then keeps the requested count.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use marquee_core::{Movie, MovieFilter, Recommendations};
use serde::{Deserialize, Serialize};

use super::handlers::ErrorResponse;
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub title: String,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub min_rating: Option<f64>,
    /// Genre substring; absent or empty means any genre.
    #[serde(default)]
    pub genre: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub reference: Movie,
    pub recommendations: Vec<ScoredEntry>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ScoredEntry {
    pub movie: Movie,
    pub score: f64,
}

impl From<Recommendations<'_>> for RecommendationResponse {
    fn from(result: Recommendations<'_>) -> Self {
        let recommendations: Vec<ScoredEntry> = result
            .recommendations
            .into_iter()
            .map(|r| ScoredEntry {
                movie: r.movie.clone(),
                score: r.score,
            })
            .collect();
        Self {
            reference: result.reference.clone(),
            total: recommendations.len(),
            recommendations,
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/recommendations?title=&count=&min_rating=&genre=
pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecommendationParams>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let defaults = state.query_defaults();

    let count = params.count.unwrap_or(defaults.default_count);
    if count == 0 || count > defaults.max_count {
        return Err(error(
            StatusCode::BAD_REQUEST,
            format!("count must be between 1 and {}", defaults.max_count),
        ));
    }

    let filter = MovieFilter::new(
        params.min_rating.unwrap_or(defaults.default_min_rating),
        params.genre.unwrap_or_default(),
    );

    let result = state
        .recommender()
        .recommendations(&params.title, state.candidate_pool())
        .map_err(|e| error(StatusCode::NOT_FOUND, e.to_string()))?
        .filter_truncate(&filter, count);

    Ok(Json(RecommendationResponse::from(result)))
}
