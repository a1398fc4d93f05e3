//! Catalog file loading.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::types::{Catalog, CatalogError, MovieRecord};

/// On-disk catalog layout: a list of movie records under `movies`.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    movies: Vec<MovieRecord>,
}

/// Catalog file encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// `.json` files are JSON, everything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Load a catalog from a TOML or JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&content, CatalogFormat::from_path(path))?;
    debug!(path = %path.display(), movies = catalog.len(), "Loaded catalog file");
    Ok(catalog)
}

/// Parse catalog records from a string.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = match format {
        CatalogFormat::Toml => {
            toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?
        }
        CatalogFormat::Json => {
            serde_json::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?
        }
    };

    Ok(Catalog::from_records(file.movies))
}
