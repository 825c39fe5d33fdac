// Multinomial naive Bayes inference over sparse tf-idf vectors.
//
// The classifier parameters arrive pre-trained in log space. Scoring a text
// is one dot product per class plus a log-sum-exp normalization, so the
// output is a proper probability distribution over [negative, positive].

use super::artifact::{NaiveBayesParams, CLASS_POSITIVE};
use super::vectorizer::TermWeight;

/// The runtime form of the classifier stage.
pub struct NaiveBayes {
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
}

impl NaiveBayes {
    /// Build the classifier from artifact parameters.
    /// Assumes the artifact already passed structural validation.
    pub fn new(params: NaiveBayesParams) -> Self {
        Self {
            class_log_prior: params.class_log_prior,
            feature_log_prob: params.feature_log_prob,
        }
    }

    /// Joint log likelihood of the input under each class:
    /// `class_log_prior[c] + Σ x_i · feature_log_prob[c][i]`.
    fn joint_log_likelihood(&self, x: &[TermWeight]) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, row)| {
                prior
                    + x.iter()
                        .map(|tw| tw.weight * row[tw.index])
                        .sum::<f64>()
            })
            .collect()
    }

    /// Probability distribution over [negative, positive] for the input.
    pub fn predict_proba(&self, x: &[TermWeight]) -> Vec<f64> {
        let jll = self.joint_log_likelihood(x);
        log_sum_exp_normalize(&jll)
    }

    /// Probability that the input belongs to the positive class.
    pub fn positive_probability(&self, x: &[TermWeight]) -> f64 {
        self.predict_proba(x)[CLASS_POSITIVE]
    }
}

/// Exponentiate and normalize a vector of log likelihoods.
///
/// Subtracting the max first keeps every exponent non-positive, so the sum
/// cannot overflow even for widely separated log likelihoods.
fn log_sum_exp_normalize(log_values: &[f64]) -> Vec<f64> {
    let max = log_values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = log_values.iter().map(|&v| (v - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}
