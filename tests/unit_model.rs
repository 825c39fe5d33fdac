// Unit tests for the classifier artifact and inference math, exercised
// through a small hand-built model with obvious polarity: three clearly
// positive terms, three clearly negative ones, symmetric priors.

use std::sync::Arc;

use litmus::model::artifact::{ModelArtifact, NaiveBayesParams, VectorizerParams};
use litmus::model::SentimentModel;
use litmus::scoring::sentiment::ModelScorer;
use litmus::scoring::traits::SentimentScorer;

/// Vocabulary in sorted order, the way a training-side vectorizer emits it.
const VOCAB: [&str; 6] = ["awful", "boring", "great", "love", "terrible", "wonderful"];

fn tiny_artifact() -> ModelArtifact {
    // Negative class likes awful/boring/terrible; positive likes the rest.
    let negative = vec![-0.5, -0.5, -3.0, -3.0, -0.5, -3.0];
    let positive = vec![-3.0, -3.0, -0.5, -0.5, -3.0, -0.5];

    ModelArtifact {
        vectorizer: VectorizerParams {
            vocabulary: VOCAB.iter().map(|s| s.to_string()).collect(),
            idf: vec![1.0; VOCAB.len()],
            ngram_range: (1, 1),
            lowercase: true,
            strip_stop_words: false,
        },
        classifier: NaiveBayesParams {
            class_log_prior: vec![(0.5f64).ln(), (0.5f64).ln()],
            feature_log_prob: vec![negative, positive],
        },
    }
}

fn tiny_model() -> SentimentModel {
    SentimentModel::from_artifact(tiny_artifact()).unwrap()
}

// ============================================================
// Probability behavior
// ============================================================

#[test]
fn positive_text_scores_high() {
    let model = tiny_model();
    let p = model.positive_probability("I love this wonderful great thing");
    assert!(p > 0.9, "expected strongly positive, got {p}");
}

#[test]
fn negative_text_scores_low() {
    let model = tiny_model();
    let p = model.positive_probability("awful boring terrible experience");
    assert!(p < 0.1, "expected strongly negative, got {p}");
}

#[test]
fn mixed_text_lands_between() {
    let model = tiny_model();
    let p = model.positive_probability("love it but awful ending");
    assert!(p > 0.1 && p < 0.9, "mixed text should be uncertain, got {p}");
}

#[test]
fn out_of_vocabulary_text_recovers_prior() {
    let model = tiny_model();
    // No token is in the vocabulary, so only the symmetric priors speak
    let p = model.positive_probability("completely unrelated words here");
    assert!((p - 0.5).abs() < 1e-12);
}

#[test]
fn probability_always_in_unit_interval() {
    let model = tiny_model();
    for text in [
        "",
        "   ",
        "love love love love love love love",
        "awful awful awful awful awful awful",
        "the and of to in",
        "日本語のテキスト",
    ] {
        let p = model.positive_probability(text);
        assert!((0.0..=1.0).contains(&p), "p={p} for {text:?}");
    }
}

#[test]
fn identical_input_identical_output() {
    let model = tiny_model();
    let text = "I love this great but boring movie";
    let first = (model.positive_probability(text), model.term_weights(text));
    let second = (model.positive_probability(text), model.term_weights(text));
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}

// ============================================================
// Term weights and vocabulary lookup
// ============================================================

#[test]
fn term_weights_cover_exactly_present_terms() {
    let model = tiny_model();
    let weights = model.term_weights("I love this great movie");
    let terms: Vec<&str> = weights
        .iter()
        .filter_map(|tw| model.term(tw.index))
        .collect();
    assert_eq!(terms, vec!["great", "love"]);
}

#[test]
fn term_weights_empty_for_out_of_vocabulary_text() {
    let model = tiny_model();
    assert!(model.term_weights("nothing recognizable").is_empty());
}

#[test]
fn term_lookup_past_vocabulary_is_none() {
    let model = tiny_model();
    assert_eq!(model.term(VOCAB.len()), None);
}

#[test]
fn vocabulary_size_matches_artifact() {
    assert_eq!(tiny_model().vocabulary_size(), VOCAB.len());
}

// ============================================================
// Artifact loading from disk
// ============================================================

#[test]
fn artifact_loads_from_json_file() {
    let json = r#"{
        "vectorizer": {
            "vocabulary": ["awful", "great"],
            "idf": [1.2, 1.1],
            "ngram_range": [1, 2],
            "lowercase": true,
            "strip_stop_words": false
        },
        "classifier": {
            "class_log_prior": [-0.693147, -0.693147],
            "feature_log_prob": [[-0.5, -3.0], [-3.0, -0.5]]
        }
    }"#;

    let path = std::env::temp_dir().join("litmus_test_artifact.json");
    std::fs::write(&path, json).unwrap();

    let artifact = ModelArtifact::load(&path).unwrap();
    assert_eq!(artifact.vectorizer.ngram_range, (1, 2));

    let model = SentimentModel::from_artifact(artifact).unwrap();
    assert!(model.positive_probability("great") > 0.5);
    assert!(model.positive_probability("awful") < 0.5);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_artifact_file_is_an_error() {
    let path = std::env::temp_dir().join("litmus_no_such_artifact.json");
    assert!(ModelArtifact::load(&path).is_err());
}

#[test]
fn malformed_artifact_json_is_an_error() {
    let path = std::env::temp_dir().join("litmus_bad_artifact.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(ModelArtifact::load(&path).is_err());
    let _ = std::fs::remove_file(&path);
}

// ============================================================
// ModelScorer — the async production path
// ============================================================

#[tokio::test]
async fn scorer_maps_probability_to_score_range() {
    let scorer = ModelScorer::new(Arc::new(tiny_model()));
    let analysis = scorer
        .analyze("I love this wonderful great thing", true)
        .await
        .unwrap();
    assert!(analysis.score > 50, "got {}", analysis.score);
    assert!(analysis.score <= 100);
}

#[tokio::test]
async fn scorer_returns_keywords_heaviest_first() {
    let scorer = ModelScorer::new(Arc::new(tiny_model()));
    let analysis = scorer
        .analyze("love love love this great movie", true)
        .await
        .unwrap();
    // "love" appears three times, "great" once: both present, love first
    assert_eq!(analysis.keywords, vec!["love", "great"]);
}

#[tokio::test]
async fn scorer_skips_keywords_when_not_requested() {
    let scorer = ModelScorer::new(Arc::new(tiny_model()));
    let analysis = scorer.analyze("love this great movie", false).await.unwrap();
    assert!(analysis.keywords.is_empty());
    assert!(analysis.score > 0);
}

#[tokio::test]
async fn scorer_handles_out_of_vocabulary_text() {
    let scorer = ModelScorer::new(Arc::new(tiny_model()));
    let analysis = scorer.analyze("nothing recognizable here", true).await.unwrap();
    // Symmetric priors: probability 0.5 maps to score 0
    assert_eq!(analysis.score, 0);
    assert!(analysis.keywords.is_empty());
}
