//! TF-IDF vectorization of free text.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::config::{RecommenderConfig, StopWordsSetting};
use crate::text::{StopWords, Tokenizer};

/// Weighting options for [`TfidfVectorizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct TfidfOptions {
    pub stop_words: StopWords,
    /// Add one to document frequencies, as if an extra document contained every term.
    pub smooth_idf: bool,
    /// Replace raw term counts with `1 + ln(count)`.
    pub sublinear_tf: bool,
}

impl Default for TfidfOptions {
    fn default() -> Self {
        Self {
            stop_words: StopWords::english(),
            smooth_idf: true,
            sublinear_tf: false,
        }
    }
}

impl From<&RecommenderConfig> for TfidfOptions {
    fn from(config: &RecommenderConfig) -> Self {
        let base = match config.stop_words {
            StopWordsSetting::English => StopWords::english(),
            StopWordsSetting::None => StopWords::none(),
        };
        Self {
            stop_words: base.with_extra(&config.extra_stop_words),
            smooth_idf: config.smooth_idf,
            sublinear_tf: config.sublinear_tf,
        }
    }
}

/// Sparse row: `(term_id, weight)` pairs sorted by term id.
pub type SparseVector = Vec<(usize, f64)>;

/// Result of fitting a vectorizer: one L2-normalized row per document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfMatrix {
    vocabulary: Vec<String>,
    rows: Vec<SparseVector>,
}

impl TfidfMatrix {
    /// Terms in lexicographic order; a term's position is its id.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn term_id(&self, term: &str) -> Option<usize> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    pub fn row(&self, doc: usize) -> Option<&SparseVector> {
        self.rows.get(doc)
    }

    pub fn num_documents(&self) -> usize {
        self.rows.len()
    }

    /// Weight of `term` in document `doc`, zero when absent.
    pub fn weight(&self, doc: usize, term: &str) -> f64 {
        let (Some(row), Some(id)) = (self.rows.get(doc), self.term_id(term)) else {
            return 0.0;
        };
        row.binary_search_by_key(&id, |&(t, _)| t)
            .map(|i| row[i].1)
            .unwrap_or(0.0)
    }
}

/// Dot product of two sparse rows sorted by term id.
pub fn sparse_dot(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

/// Turns documents into term-frequency / inverse-document-frequency vectors.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
    options: TfidfOptions,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(TfidfOptions::default())
    }
}

impl TfidfVectorizer {
    pub fn new(options: TfidfOptions) -> Self {
        Self {
            tokenizer: Tokenizer::new(options.stop_words.clone()),
            options,
        }
    }

    pub fn options(&self) -> &TfidfOptions {
        &self.options
    }

    /// Learn the vocabulary of `documents` and weight each of them.
    pub fn fit_transform<I, S>(&self, documents: I) -> TfidfMatrix
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let counts: Vec<BTreeMap<String, usize>> = documents
            .into_iter()
            .map(|doc| {
                let mut tf = BTreeMap::new();
                for token in self.tokenizer.tokens(doc.as_ref()) {
                    *tf.entry(token).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let vocabulary: Vec<String> = counts
            .iter()
            .flat_map(|tf| tf.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut df = vec![0usize; vocabulary.len()];
        let index_of = |term: &str| {
            vocabulary
                .binary_search_by(|t| t.as_str().cmp(term))
                .unwrap_or_else(|_| unreachable!("term collected into vocabulary"))
        };
        for tf in &counts {
            for term in tf.keys() {
                df[index_of(term)] += 1;
            }
        }

        let n = counts.len() as f64;
        let idf: Vec<f64> = df.iter().map(|&d| self.idf(n, d as f64)).collect();

        let rows = counts
            .iter()
            .map(|tf| {
                // BTreeMap iteration is sorted, so term ids come out ascending.
                let mut row: SparseVector = tf
                    .iter()
                    .map(|(term, &count)| {
                        let id = index_of(term);
                        (id, self.tf(count) * idf[id])
                    })
                    .collect();
                normalize(&mut row);
                row
            })
            .collect();

        TfidfMatrix { vocabulary, rows }
    }

    fn tf(&self, count: usize) -> f64 {
        if self.options.sublinear_tf {
            1.0 + (count as f64).ln()
        } else {
            count as f64
        }
    }

    fn idf(&self, n: f64, df: f64) -> f64 {
        if self.options.smooth_idf {
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        } else {
            (n / df).ln() + 1.0
        }
    }
}

/// Scale a row to unit L2 norm; all-zero rows are left untouched.
fn normalize(row: &mut SparseVector) {
    let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in row.iter_mut() {
            *w /= norm;
        }
    }
}
