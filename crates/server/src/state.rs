use marquee_core::{Config, QueryConfig, SimilarityRecommender};
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    config: Config,
    recommender: Arc<SimilarityRecommender>,
}

impl AppState {
    pub fn new(config: Config, recommender: Arc<SimilarityRecommender>) -> Self {
        Self {
            config,
            recommender,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn query_defaults(&self) -> &QueryConfig {
        &self.config.query
    }

    pub fn candidate_pool(&self) -> usize {
        self.config.recommender.candidate_pool
    }

    pub fn recommender(&self) -> &SimilarityRecommender {
        self.recommender.as_ref()
    }
}
