// Tf-idf vectorization stage, reconstructed from artifact parameters.
//
// The vocabulary and idf weights are fixed at training time; this module
// only reproduces the transform: tokenize, build word n-grams, count the
// grams that exist in the vocabulary, multiply by idf, and L2-normalize the
// row. Terms outside the vocabulary contribute nothing.

use std::collections::{HashMap, HashSet};

use anyhow::Result;
use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

use super::artifact::VectorizerParams;

/// One non-zero entry of a sparse term-weight vector.
#[derive(Debug, Clone, PartialEq)]
pub struct TermWeight {
    /// Position of the term in the artifact vocabulary.
    pub index: usize,
    /// Non-negative tf-idf weight of the term in the input text.
    pub weight: f64,
}

/// The runtime form of the vectorizer: artifact parameters plus the lookup
/// structures built once at load time.
pub struct Vectorizer {
    vocabulary: Vec<String>,
    term_index: HashMap<String, usize>,
    idf: Vec<f64>,
    ngram_range: (usize, usize),
    lowercase: bool,
    stop_words: Option<HashSet<String>>,
    token_pattern: Regex,
}

impl Vectorizer {
    /// Build the vectorizer from artifact parameters.
    /// Assumes the artifact already passed structural validation.
    pub fn new(params: VectorizerParams) -> Result<Self> {
        let term_index: HashMap<String, usize> = params
            .vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        let stop_words = if params.strip_stop_words {
            Some(get(LANGUAGE::English).into_iter().collect())
        } else {
            None
        };

        // Word tokens of at least two word characters, the same token
        // pattern the training-side vectorizer used.
        let token_pattern = Regex::new(r"\b\w\w+\b")?;

        Ok(Self {
            vocabulary: params.vocabulary,
            term_index,
            idf: params.idf,
            ngram_range: params.ngram_range,
            lowercase: params.lowercase,
            stop_words,
            token_pattern,
        })
    }

    /// Number of terms in the fixed vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// The ordered vocabulary; a term's position is its index.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Look up a term string by vocabulary index.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.vocabulary.get(index).map(String::as_str)
    }

    /// Inclusive n-gram range the vectorizer was trained with.
    pub fn ngram_range(&self) -> (usize, usize) {
        self.ngram_range
    }

    /// Split text into word tokens, applying lowercasing and stop-word
    /// removal the way training did.
    fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let mut tokens: Vec<String> = self
            .token_pattern
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect();

        if let Some(stop) = &self.stop_words {
            tokens.retain(|t| !stop.contains(t));
        }

        tokens
    }

    /// Transform text into its sparse tf-idf vector.
    ///
    /// Entries are returned in ascending vocabulary-index order with strictly
    /// positive weights; the row is L2-normalized. An empty result means no
    /// token of the text (or n-gram of its tokens) exists in the vocabulary.
    pub fn transform(&self, text: &str) -> Vec<TermWeight> {
        let tokens = self.tokenize(text);

        // Count occurrences of every in-vocabulary n-gram.
        let mut counts: HashMap<usize, usize> = HashMap::new();
        let (lo, hi) = self.ngram_range;
        for n in lo..=hi {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                let gram = window.join(" ");
                if let Some(&index) = self.term_index.get(&gram) {
                    *counts.entry(index).or_insert(0) += 1;
                }
            }
        }

        let mut weights: Vec<TermWeight> = counts
            .into_iter()
            .map(|(index, count)| TermWeight {
                index,
                weight: count as f64 * self.idf[index],
            })
            .filter(|tw| tw.weight > 0.0)
            .collect();
        weights.sort_by_key(|tw| tw.index);

        // L2 normalization, matching the training-side transform.
        let norm = weights
            .iter()
            .map(|tw| tw.weight * tw.weight)
            .sum::<f64>()
            .sqrt();
        if norm > 0.0 {
            for tw in &mut weights {
                tw.weight /= norm;
            }
        }

        weights
    }
}
