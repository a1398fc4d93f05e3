pub mod catalog;
pub mod config;
pub mod metrics;
pub mod recommender;
pub mod text;

pub use catalog::{
    load_catalog, parse_catalog, sample_catalog, Catalog, CatalogError, CatalogFormat, Movie,
    MovieRecord,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    QueryConfig, RecommenderConfig, ServerConfig, StopWordsSetting,
};
pub use recommender::{
    filter_results, MovieFilter, RecommendError, Recommendations, ScoredMovie, SimilarityIndex,
    SimilarityRecommender, TfidfMatrix, TfidfOptions, TfidfVectorizer,
};
pub use text::{tokenize, StopWords, Tokenizer};
