use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Candidate pool and max count are positive
/// - Default count lies within 1..=max_count
/// - Default minimum rating lies within the rating scale
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.recommender.candidate_pool == 0 {
        return Err(ConfigError::ValidationError(
            "recommender.candidate_pool must be at least 1".to_string(),
        ));
    }

    let query = &config.query;
    if query.max_count == 0 {
        return Err(ConfigError::ValidationError(
            "query.max_count must be at least 1".to_string(),
        ));
    }
    if query.default_count == 0 || query.default_count > query.max_count {
        return Err(ConfigError::ValidationError(format!(
            "query.default_count must be between 1 and {}",
            query.max_count
        )));
    }
    if !(0.0..=10.0).contains(&query.default_min_rating) {
        return Err(ConfigError::ValidationError(
            "query.default_min_rating must be between 0 and 10".to_string(),
        ));
    }

    Ok(())
}
