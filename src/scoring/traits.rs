// Sentiment scorer trait — the swap-ready abstraction.
//
// The production implementation wraps the loaded classifier artifact; web
// tests substitute a stub so the HTTP surface can be exercised without a
// model on disk.

use anyhow::Result;
use async_trait::async_trait;

/// The result of analyzing a single text.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Bounded sentiment score, -100 (negative) to 100 (positive).
    pub score: i32,
    /// Terms that most influenced the score, heaviest first.
    /// Empty when keywords were not requested or no vocabulary term
    /// appears in the text.
    pub keywords: Vec<String>,
}

/// Trait for scoring text sentiment. Async so implementations can offload
/// CPU-bound inference without blocking the server's request tasks.
#[async_trait]
pub trait SentimentScorer: Send + Sync {
    /// Score a single text, optionally extracting keywords.
    async fn analyze(&self, text: &str, include_keywords: bool) -> Result<Analysis>;
}
