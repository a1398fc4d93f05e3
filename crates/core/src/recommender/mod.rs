//! Content-based recommendation: TF-IDF vectors over movie descriptions,
//! a pairwise cosine similarity index, and rating/genre post-filters.

mod engine;
mod error;
mod filter;
mod index;
mod vectorizer;

pub use engine::{Recommendations, ScoredMovie, SimilarityRecommender};
pub use error::RecommendError;
pub use filter::{filter_results, MovieFilter};
pub use index::SimilarityIndex;
pub use vectorizer::{sparse_dot, SparseVector, TfidfMatrix, TfidfOptions, TfidfVectorizer};
