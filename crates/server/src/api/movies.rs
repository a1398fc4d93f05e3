//! Catalog browsing handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use marquee_core::Movie;
use serde::Serialize;

use super::handlers::ErrorResponse;
use crate::state::AppState;

// ============================================================================
// Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub movies: Vec<Movie>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct GenreListResponse {
    pub genres: Vec<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/movies
///
/// List every movie in catalog order.
pub async fn list_movies(State(state): State<Arc<AppState>>) -> Json<MovieListResponse> {
    let movies = state.recommender().catalog().movies().to_vec();
    let total = movies.len();
    Json(MovieListResponse { movies, total })
}

/// GET /api/v1/movies/{id}
///
/// Get a single movie's details.
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<usize>,
) -> Result<Json<Movie>, impl IntoResponse> {
    match state.recommender().catalog().get(id) {
        Some(movie) => Ok(Json(movie.clone())),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Movie not found: {}", id),
            }),
        )),
    }
}

/// GET /api/v1/genres
///
/// Distinct genre tags, sorted.
pub async fn list_genres(State(state): State<Arc<AppState>>) -> Json<GenreListResponse> {
    Json(GenreListResponse {
        genres: state.recommender().catalog().genres(),
    })
}
