//! Movie catalog - the fixed, ordered collection of recommendable movies.
//!
//! A catalog is built once from raw records and never mutated. Records can
//! come from a TOML/JSON file or from the built-in sample set.

mod loader;
mod sample;
mod types;

pub use loader::{load_catalog, parse_catalog, CatalogFormat};
pub use sample::sample_catalog;
pub use types::*;
