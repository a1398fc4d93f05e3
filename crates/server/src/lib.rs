//! HTTP front end for the movie recommender.

pub mod api;
pub mod metrics;
pub mod state;

use anyhow::{Context, Result};
use tracing::info;

use marquee_core::{load_catalog, sample_catalog, Config, SimilarityRecommender, TfidfOptions};

/// Load the configured catalog (or the sample one) and build the recommender.
pub fn build_recommender(config: &Config) -> Result<SimilarityRecommender> {
    let catalog = match &config.catalog.path {
        Some(path) => {
            info!("Loading catalog from {:?}", path);
            load_catalog(path)
                .with_context(|| format!("Failed to load catalog from {:?}", path))?
        }
        None => {
            info!("No catalog configured, using built-in sample catalog");
            sample_catalog()
        }
    };

    SimilarityRecommender::build_with_options(catalog, TfidfOptions::from(&config.recommender))
        .context("Failed to build recommender")
}
