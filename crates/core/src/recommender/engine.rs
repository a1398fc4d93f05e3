//! Content-based movie recommender.

use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use super::error::RecommendError;
use super::filter::MovieFilter;
use super::index::SimilarityIndex;
use super::vectorizer::{TfidfOptions, TfidfVectorizer};
use crate::catalog::{Catalog, Movie};
use crate::metrics;

/// A recommended movie with its similarity to the reference movie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredMovie<'a> {
    pub movie: &'a Movie,
    pub score: f64,
}

/// Ranked results for one reference movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations<'a> {
    pub reference: &'a Movie,
    pub recommendations: Vec<ScoredMovie<'a>>,
}

impl Recommendations<'_> {
    /// Drop results that `filter` rejects, then keep at most `count`.
    pub fn filter_truncate(mut self, filter: &MovieFilter, count: usize) -> Self {
        self.recommendations = filter.apply_scored(self.recommendations);
        self.recommendations.truncate(count);
        self
    }
}

/// Ranks catalog movies by description similarity to a reference title.
///
/// Built once from an immutable catalog; every query is a pure read.
#[derive(Debug, Clone)]
pub struct SimilarityRecommender {
    catalog: Catalog,
    index: SimilarityIndex,
}

impl SimilarityRecommender {
    /// Build with default TF-IDF options (English stop words, smoothed idf).
    pub fn build(catalog: Catalog) -> Result<Self, RecommendError> {
        Self::build_with_options(catalog, TfidfOptions::default())
    }

    /// Validate the catalog, vectorize descriptions and compute all pairwise scores.
    pub fn build_with_options(
        catalog: Catalog,
        options: TfidfOptions,
    ) -> Result<Self, RecommendError> {
        validate_catalog(&catalog)?;

        let start = Instant::now();
        let vectors = TfidfVectorizer::new(options)
            .fit_transform(catalog.iter().map(|m| m.description.as_str()));
        let index = SimilarityIndex::new(vectors);
        let elapsed = start.elapsed();

        metrics::INDEX_BUILDS.inc();
        metrics::INDEX_BUILD_DURATION.observe(elapsed.as_secs_f64());
        metrics::CATALOG_SIZE.set(catalog.len() as i64);

        info!(
            movies = catalog.len(),
            vocabulary = index.vocabulary_size(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "Built similarity index"
        );

        Ok(Self { catalog, index })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &SimilarityIndex {
        &self.index
    }

    /// Up to `limit` movies most similar to `title`, most similar first.
    ///
    /// The reference movie is never included. Equal scores keep catalog order.
    pub fn recommend(&self, title: &str, limit: usize) -> Result<Vec<&Movie>, RecommendError> {
        Ok(self
            .recommend_scored(title, limit)?
            .into_iter()
            .map(|r| r.movie)
            .collect())
    }

    /// Like [`recommend`](Self::recommend), paired with similarity scores.
    pub fn recommend_scored(
        &self,
        title: &str,
        limit: usize,
    ) -> Result<Vec<ScoredMovie<'_>>, RecommendError> {
        Ok(self.recommendations(title, limit)?.recommendations)
    }

    /// Ranked recommendations together with the reference movie they are for.
    pub fn recommendations(
        &self,
        title: &str,
        limit: usize,
    ) -> Result<Recommendations<'_>, RecommendError> {
        let reference = self.find(title).inspect_err(|_| {
            metrics::RECOMMENDATIONS
                .with_label_values(&["not_found"])
                .inc();
            debug!(title, "Reference title not in catalog");
        })?;
        let row = self
            .index
            .row(reference.id)
            .ok_or_else(|| RecommendError::NotFound(title.to_string()))?;

        let mut ranked: Vec<ScoredMovie<'_>> = self
            .catalog
            .iter()
            .filter(|m| m.id != reference.id)
            .map(|movie| ScoredMovie {
                movie,
                score: row[movie.id],
            })
            .collect();
        // Stable sort keeps catalog order among equal scores.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(limit);

        metrics::RECOMMENDATIONS.with_label_values(&["ok"]).inc();
        debug!(
            title = %reference.title,
            limit,
            returned = ranked.len(),
            "Computed recommendations"
        );

        Ok(Recommendations {
            reference,
            recommendations: ranked,
        })
    }

    /// Similarity between two titled movies.
    pub fn similarity(&self, title_a: &str, title_b: &str) -> Result<f64, RecommendError> {
        let a = self.find(title_a)?;
        let b = self.find(title_b)?;
        self.index
            .score(a.id, b.id)
            .ok_or_else(|| RecommendError::NotFound(title_b.to_string()))
    }

    /// Movie with exactly this title.
    pub fn find(&self, title: &str) -> Result<&Movie, RecommendError> {
        self.catalog
            .find_by_title(title)
            .ok_or_else(|| RecommendError::NotFound(title.to_string()))
    }
}

/// Reject catalogs the index cannot serve unambiguously.
fn validate_catalog(catalog: &Catalog) -> Result<(), RecommendError> {
    if catalog.is_empty() {
        return Err(RecommendError::Configuration(
            "catalog is empty".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(catalog.len());
    for movie in catalog {
        if !seen.insert(movie.title.as_str()) {
            return Err(RecommendError::Configuration(format!(
                "duplicate title: {}",
                movie.title
            )));
        }
        if !movie.rating.is_finite() || !(0.0..=10.0).contains(&movie.rating) {
            return Err(RecommendError::Configuration(format!(
                "rating {} of '{}' is outside 0-10",
                movie.rating, movie.title
            )));
        }
    }

    Ok(())
}
