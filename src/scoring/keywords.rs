// Keyword extraction from the classifier's term weights.
//
// The vectorizer already assigns every present vocabulary term a tf-idf
// weight; extraction is just ranking those terms and slicing the top 10%,
// floored at 3 and capped at the number of present terms.

use crate::model::vectorizer::TermWeight;

/// How many keywords to keep for `n` present terms:
/// `min(max(ceil(0.10 * n), 3), n)`. Zero terms means zero keywords.
pub fn top_k_count(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let tenth = (0.10 * n as f64).ceil() as usize;
    tenth.max(3).min(n)
}

/// Rank terms by weight descending. Equal weights fall back to ascending
/// vocabulary index so the ordering is deterministic across calls.
pub fn rank_terms(terms: &[TermWeight]) -> Vec<TermWeight> {
    let mut ranked = terms.to_vec();
    ranked.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    ranked
}

/// Pick the keyword strings for a text's term-weight vector.
///
/// `vocabulary` is the artifact's ordered term list; indices outside it
/// cannot occur for vectors the model produced, but are skipped rather
/// than panicking.
pub fn select_keywords(terms: &[TermWeight], vocabulary: &[String]) -> Vec<String> {
    let top_k = top_k_count(terms.len());
    rank_terms(terms)
        .into_iter()
        .take(top_k)
        .filter_map(|tw| vocabulary.get(tw.index).cloned())
        .collect()
}
