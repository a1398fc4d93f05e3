//! Post-filters for recommendation results.

use serde::{Deserialize, Serialize};

use super::ScoredMovie;
use crate::catalog::Movie;

/// Rating and genre constraints applied after ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieFilter {
    /// Keep movies rated at least this much.
    #[serde(default)]
    pub min_rating: f64,
    /// Case-sensitive substring of the movie's genre label; empty keeps all.
    #[serde(default)]
    pub genre: String,
}

impl MovieFilter {
    pub fn new(min_rating: f64, genre: impl Into<String>) -> Self {
        Self {
            min_rating,
            genre: genre.into(),
        }
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        movie.rating >= self.min_rating
            && (self.genre.is_empty() || movie.genre_label().contains(&self.genre))
    }

    /// Keep matching movies, preserving order.
    pub fn apply<'a, I>(&self, movies: I) -> Vec<&'a Movie>
    where
        I: IntoIterator<Item = &'a Movie>,
    {
        movies.into_iter().filter(|m| self.matches(m)).collect()
    }

    /// Keep scored results whose movie matches, preserving order.
    pub fn apply_scored<'a>(&self, results: Vec<ScoredMovie<'a>>) -> Vec<ScoredMovie<'a>> {
        results
            .into_iter()
            .filter(|r| self.matches(r.movie))
            .collect()
    }
}

/// Keep `items` rated at least `min_rating` whose genres contain `genre`.
///
/// An empty `genre` disables the genre constraint. Order is preserved and
/// nothing is re-sorted.
pub fn filter_results<'a, I>(items: I, min_rating: f64, genre: &str) -> Vec<&'a Movie>
where
    I: IntoIterator<Item = &'a Movie>,
{
    MovieFilter::new(min_rating, genre).apply(items)
}
