//! Pairwise similarity over a TF-IDF matrix.

use super::vectorizer::{sparse_dot, TfidfMatrix};

/// Read-only cosine similarity matrix, built once and never mutated.
///
/// Rows of the underlying TF-IDF matrix are L2-normalized, so cosine
/// similarity reduces to a dot product. Each unordered pair is computed once
/// and mirrored, which keeps the matrix exactly symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityIndex {
    vectors: TfidfMatrix,
    /// Dense row-major N x N scores.
    scores: Vec<f64>,
    size: usize,
}

impl SimilarityIndex {
    pub fn new(vectors: TfidfMatrix) -> Self {
        let size = vectors.num_documents();
        let mut scores = vec![0.0; size * size];
        let rows = vectors.rows();

        for i in 0..size {
            // Self-similarity is the maximum, including for empty descriptions.
            scores[i * size + i] = 1.0;
            for j in (i + 1)..size {
                let sim = sparse_dot(&rows[i], &rows[j]).clamp(0.0, 1.0);
                scores[i * size + j] = sim;
                scores[j * size + i] = sim;
            }
        }

        Self {
            vectors,
            scores,
            size,
        }
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectors.vocabulary().len()
    }

    pub fn vectors(&self) -> &TfidfMatrix {
        &self.vectors
    }

    /// Score between items `a` and `b`, or `None` if either is out of range.
    pub fn score(&self, a: usize, b: usize) -> Option<f64> {
        (a < self.size && b < self.size).then(|| self.scores[a * self.size + b])
    }

    /// All scores for item `id`, indexed by the other item's id.
    pub fn row(&self, id: usize) -> Option<&[f64]> {
        (id < self.size).then(|| &self.scores[id * self.size..(id + 1) * self.size])
    }
}
