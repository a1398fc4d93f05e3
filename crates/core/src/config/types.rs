use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub recommender: RecommenderConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Where the movie catalog comes from.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Catalog file (TOML, or JSON when the extension is `.json`).
    /// The built-in sample catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Which stop list the vectorizer ignores.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopWordsSetting {
    #[default]
    English,
    None,
}

/// Similarity index configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommenderConfig {
    #[serde(default)]
    pub stop_words: StopWordsSetting,
    /// Additional words to ignore on top of the selected stop list.
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
    /// Add one to document frequencies, as if an extra document contained every term.
    #[serde(default = "default_true")]
    pub smooth_idf: bool,
    /// Replace raw term counts with `1 + ln(count)`.
    #[serde(default)]
    pub sublinear_tf: bool,
    /// Number of most-similar movies taken before filters are applied.
    #[serde(default = "default_candidate_pool")]
    pub candidate_pool: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            stop_words: StopWordsSetting::default(),
            extra_stop_words: Vec::new(),
            smooth_idf: true,
            sublinear_tf: false,
            candidate_pool: default_candidate_pool(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_candidate_pool() -> usize {
    10
}

/// Defaults for recommendation queries that omit parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    #[serde(default = "default_count")]
    pub default_count: usize,
    #[serde(default = "default_max_count")]
    pub max_count: usize,
    #[serde(default = "default_min_rating")]
    pub default_min_rating: f64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            max_count: default_max_count(),
            default_min_rating: default_min_rating(),
        }
    }
}

fn default_count() -> usize {
    5
}

fn default_max_count() -> usize {
    10
}

fn default_min_rating() -> f64 {
    7.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9000

[catalog]
path = "movies.json"

[recommender]
stop_words = "english"
extra_stop_words = ["film", "movie"]
smooth_idf = false
sublinear_tf = true
candidate_pool = 20

[query]
default_count = 4
max_count = 8
default_min_rating = 6.5
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
        assert_eq!(config.catalog.path.unwrap().to_str().unwrap(), "movies.json");
        assert_eq!(config.recommender.stop_words, StopWordsSetting::English);
        assert_eq!(config.recommender.extra_stop_words, vec!["film", "movie"]);
        assert!(!config.recommender.smooth_idf);
        assert!(config.recommender.sublinear_tf);
        assert_eq!(config.recommender.candidate_pool, 20);
        assert_eq!(config.query.default_count, 4);
        assert_eq!(config.query.max_count, 8);
        assert_eq!(config.query.default_min_rating, 6.5);
    }

    #[test]
    fn test_deserialize_with_default_sections() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host.to_string(), "0.0.0.0");
        assert!(config.catalog.path.is_none());
        assert_eq!(config.recommender.stop_words, StopWordsSetting::English);
        assert!(config.recommender.smooth_idf);
        assert!(!config.recommender.sublinear_tf);
        assert_eq!(config.recommender.candidate_pool, 10);
        assert_eq!(config.query.default_count, 5);
        assert_eq!(config.query.max_count, 10);
        assert_eq!(config.query.default_min_rating, 7.0);
    }

    #[test]
    fn test_unknown_stop_words_setting_fails() {
        let toml = r#"
[recommender]
stop_words = "klingon"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_omits_unset_catalog_path() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert!(json["catalog"].get("path").is_none());
        assert_eq!(json["recommender"]["stop_words"], "english");
    }
}
