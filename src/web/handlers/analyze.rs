// POST /analyze — score a text and return keywords.
//
// The body is parsed leniently: anything that isn't a JSON object with a
// non-empty string `tweet` field — malformed JSON included — is the same
// client error. Extra keys are ignored.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::web::error::ApiError;
use crate::web::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub score: i32,
    pub keywords: Vec<String>,
}

pub async fn analyze(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let payload: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();

    let tweet = payload
        .get("tweet")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .unwrap_or("");

    if tweet.is_empty() {
        return Err(ApiError::Validation("No tweet".to_string()));
    }

    match state.scorer.analyze(tweet, true).await {
        Ok(analysis) => Ok(Json(AnalyzeResponse {
            score: analysis.score,
            keywords: analysis.keywords,
        })),
        Err(e) => {
            error!(error = ?e, "Analysis failed");
            Err(ApiError::Internal)
        }
    }
}
