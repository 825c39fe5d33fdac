// Probability-to-score mapping and the model-backed scorer.
//
// The score is a linear rescale of the positive-class probability into
// [-100, 100]. Keyword extraction reuses the same term-weight vector the
// classifier saw, so one vectorizer pass serves both outputs.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::model::SentimentModel;
use crate::output::truncate_chars;

use super::keywords::select_keywords;
use super::traits::{Analysis, SentimentScorer};

/// Map a positive-class probability in [0, 1] onto the integer score range
/// [-100, 100]: `round(-100 + 200 * p)`.
///
/// Rounding convention: ties round half away from zero (`f64::round`), so a
/// raw score of 50.5 becomes 51 and -50.5 becomes -51.
pub fn scale_score(p: f64) -> i32 {
    (-100.0 + 200.0 * p).round() as i32
}

/// Scorer backed by the loaded classifier artifact.
///
/// Holds the model behind `Arc` so inference can move to `spawn_blocking`
/// without cloning the vocabulary; the model itself is read-only, so the
/// same instance serves every request concurrently.
pub struct ModelScorer {
    model: Arc<SentimentModel>,
}

impl ModelScorer {
    pub fn new(model: Arc<SentimentModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl SentimentScorer for ModelScorer {
    /// Vectorize once, score, and optionally rank keywords. The CPU-bound
    /// work runs on a blocking thread so the async runtime stays responsive.
    async fn analyze(&self, text: &str, include_keywords: bool) -> Result<Analysis> {
        let model = Arc::clone(&self.model);
        let text = text.to_string();

        tokio::task::spawn_blocking(move || {
            let p = model.positive_probability(&text);
            let score = scale_score(p);

            let keywords = if include_keywords {
                let weights = model.term_weights(&text);
                select_keywords(&weights, model.vocabulary())
            } else {
                Vec::new()
            };

            debug!(
                score,
                positive_probability = p,
                keywords = keywords.len(),
                text_preview = %truncate_chars(&text, 50),
                "Scored text"
            );

            Ok(Analysis { score, keywords })
        })
        .await
        .context("spawn_blocking panicked")?
    }
}
