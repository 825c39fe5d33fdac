// The classifier artifact and its inference math.
//
// The model is trained and serialized elsewhere; this module loads the
// artifact once at startup and answers exactly two questions about a text:
// what is the positive-class probability, and which vocabulary terms carry
// weight in it.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

pub mod artifact;
pub mod bayes;
pub mod vectorizer;

use artifact::ModelArtifact;
use bayes::NaiveBayes;
use vectorizer::{TermWeight, Vectorizer};

/// The loaded classifier: tf-idf vectorization plus multinomial naive
/// Bayes. Immutable after construction and shared read-only across all
/// requests, so no locking is needed anywhere.
pub struct SentimentModel {
    vectorizer: Vectorizer,
    classifier: NaiveBayes,
}

impl SentimentModel {
    /// Load the artifact from disk and build the inference structures.
    pub fn load(path: &Path) -> Result<Self> {
        let artifact = ModelArtifact::load(path)?;
        let model = Self::from_artifact(artifact)?;
        debug!(
            vocabulary = model.vocabulary_size(),
            "Loaded classifier artifact from {}",
            path.display()
        );
        Ok(model)
    }

    /// Build the model from an already-deserialized artifact.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        artifact.validate()?;
        Ok(Self {
            vectorizer: Vectorizer::new(artifact.vectorizer)?,
            classifier: NaiveBayes::new(artifact.classifier),
        })
    }

    /// Probability that the text expresses positive sentiment.
    pub fn positive_probability(&self, text: &str) -> f64 {
        let x = self.vectorizer.transform(text);
        self.classifier.positive_probability(&x)
    }

    /// Sparse term-weight vector of the text under the fixed vocabulary.
    /// Entries arrive in ascending vocabulary-index order.
    pub fn term_weights(&self, text: &str) -> Vec<TermWeight> {
        self.vectorizer.transform(text)
    }

    /// Look up a term string by vocabulary index.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.vectorizer.term(index)
    }

    /// The ordered vocabulary.
    pub fn vocabulary(&self) -> &[String] {
        self.vectorizer.vocabulary()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    /// Inclusive word n-gram range the vectorizer was trained with.
    pub fn ngram_range(&self) -> (usize, usize) {
        self.vectorizer.ngram_range()
    }
}
