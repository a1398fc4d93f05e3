//! Word tokenization.

use super::stopwords::StopWords;

/// Word characters: any Unicode letter or digit, plus underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lowercase `text` and split it into word tokens.
///
/// A token is a run of two or more word characters, in any script. Single
/// characters are dropped and punctuation separates tokens, so
/// "dream-sharing" yields `["dream", "sharing"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|t| t.chars().nth(1).is_some())
        .map(str::to_string)
        .collect()
}

/// Tokenizer that drops stop words.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stop_words: StopWords,
}

impl Tokenizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Tokens of `text` that are not stop words, in order of appearance.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .filter(|t| !self.stop_words.contains(t))
            .collect()
    }
}
