//! Text preprocessing for description similarity.

mod stopwords;
mod tokenize;

pub use stopwords::{StopWords, ENGLISH_STOP_WORDS};
pub use tokenize::{tokenize, Tokenizer};
