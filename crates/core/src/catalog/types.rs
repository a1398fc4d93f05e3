//! Types for the movie catalog.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A raw catalog row, as written in catalog files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    /// Comma-separated genre tags (e.g., "Action, Sci-Fi").
    #[serde(default)]
    pub genre: String,
    pub year: i32,
    pub rating: f64,
    #[serde(default)]
    pub description: String,
}

/// A movie in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Position in the catalog, assigned at load.
    pub id: usize,
    /// Display title, the lookup key for recommendations.
    pub title: String,
    /// Genre tags in source order, without duplicates.
    pub genres: Vec<String>,
    pub year: i32,
    /// Rating on a 0-10 scale.
    pub rating: f64,
    /// Free-text synopsis used for similarity.
    pub description: String,
}

impl Movie {
    /// Build a movie from a raw record, splitting the genre field.
    pub fn from_record(id: usize, record: MovieRecord) -> Self {
        Self {
            id,
            genres: split_genres(&record.genre),
            title: record.title,
            year: record.year,
            rating: record.rating,
            description: record.description,
        }
    }

    /// Genres serialized back into a single comma-separated label.
    pub fn genre_label(&self) -> String {
        self.genres.join(", ")
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// Split a comma-separated genre field into trimmed, unique tags.
pub fn split_genres(field: &str) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for tag in field.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !genres.iter().any(|g| g == tag) {
            genres.push(tag.to_string());
        }
    }
    genres
}

/// An ordered, immutable sequence of movies.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Build a catalog, assigning ids in record order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = MovieRecord>,
    {
        let movies = records
            .into_iter()
            .enumerate()
            .map(|(id, record)| Movie::from_record(id, record))
            .collect();
        Self { movies }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// First movie whose title matches exactly.
    pub fn find_by_title(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.title == title)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn titles(&self) -> Vec<&str> {
        self.movies.iter().map(|m| m.title.as_str()).collect()
    }

    /// Distinct genre tags across the catalog, sorted.
    pub fn genres(&self) -> Vec<String> {
        self.movies
            .iter()
            .flat_map(|m| m.genres.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

/// Errors for catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}
