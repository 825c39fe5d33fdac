// On-disk format of the classifier artifact.
//
// The artifact is a JSON document exported by the training side. It carries
// exactly the parameters inference needs: the vectorizer's vocabulary and
// idf weights, and the multinomial naive Bayes log-space parameters. Class
// order is fixed as [negative, positive].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Index of the negative class in `class_log_prior` / `feature_log_prob`.
pub const CLASS_NEGATIVE: usize = 0;
/// Index of the positive class.
pub const CLASS_POSITIVE: usize = 1;

/// The full serialized model: vectorizer parameters plus classifier weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub vectorizer: VectorizerParams,
    pub classifier: NaiveBayesParams,
}

/// Parameters of the tf-idf vectorization stage.
///
/// `vocabulary` is ordered: a term's position is its index everywhere else
/// (idf, feature_log_prob columns, and the sparse vectors produced at
/// inference time).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerParams {
    pub vocabulary: Vec<String>,
    pub idf: Vec<f64>,
    /// Inclusive word n-gram range, e.g. [1, 2] for unigrams and bigrams.
    pub ngram_range: (usize, usize),
    pub lowercase: bool,
    /// Whether training removed English stop words before building n-grams.
    pub strip_stop_words: bool,
}

/// Multinomial naive Bayes parameters, both in log space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaiveBayesParams {
    /// Log prior per class: [negative, positive].
    pub class_log_prior: Vec<f64>,
    /// Log conditional probability per class per term; 2 rows, each
    /// `vocabulary.len()` wide.
    pub feature_log_prob: Vec<Vec<f64>>,
}

impl ModelArtifact {
    /// Read and validate an artifact from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read classifier artifact: {}", path.display()))?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse classifier artifact: {}", path.display()))?;
        artifact
            .validate()
            .with_context(|| format!("Invalid classifier artifact: {}", path.display()))?;
        Ok(artifact)
    }

    /// Structural consistency checks. A model that fails any of these could
    /// only produce garbage, so loading aborts instead of serving.
    pub fn validate(&self) -> Result<()> {
        let vocab_len = self.vectorizer.vocabulary.len();
        if vocab_len == 0 {
            anyhow::bail!("vocabulary is empty");
        }
        if self.vectorizer.idf.len() != vocab_len {
            anyhow::bail!(
                "idf length {} does not match vocabulary length {vocab_len}",
                self.vectorizer.idf.len()
            );
        }
        let (lo, hi) = self.vectorizer.ngram_range;
        if lo == 0 || lo > hi {
            anyhow::bail!("ngram_range ({lo}, {hi}) is not a valid inclusive range");
        }
        if self.classifier.class_log_prior.len() != 2 {
            anyhow::bail!(
                "expected 2 classes (negative, positive), got {}",
                self.classifier.class_log_prior.len()
            );
        }
        if self.classifier.feature_log_prob.len() != 2 {
            anyhow::bail!(
                "expected 2 feature_log_prob rows, got {}",
                self.classifier.feature_log_prob.len()
            );
        }
        for (class, row) in self.classifier.feature_log_prob.iter().enumerate() {
            if row.len() != vocab_len {
                anyhow::bail!(
                    "feature_log_prob row {class} has length {}, expected {vocab_len}",
                    row.len()
                );
            }
        }
        Ok(())
    }
}
