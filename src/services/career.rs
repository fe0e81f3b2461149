//! Job-offer comparison
//!
//! Scores each offer against a shared criteria weight vector and picks the
//! best one. The comparison is driven entirely by the score matrix; the
//! monetary fields on [`JobOffer`] are carried through for reporting and
//! future use but do not affect the ranking.

use crate::formulas::{self, FormulaError};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

fn default_probability() -> f64 {
    1.0
}

/// Errors raised while comparing job offers
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CareerError {
    /// The score matrix must have exactly one row per offer
    #[error("score matrix has {rows} rows for {offers} offers")]
    DimensionMismatch { offers: usize, rows: usize },

    /// A score row did not match the criteria weights
    #[error(transparent)]
    Formula(#[from] FormulaError),
}

/// A single job offer under consideration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOffer {
    /// Display label; should be unique for the result to be unambiguous,
    /// though uniqueness is not enforced
    pub label: String,

    /// Base annual compensation
    pub compensation: f64,

    /// Reserved: estimated annual equity value
    #[serde(default)]
    pub equity_value: f64,

    /// Reserved: expected annual bonus
    #[serde(default)]
    pub bonus: f64,

    /// Reserved: probability the offer pays out as stated
    #[serde(default = "default_probability")]
    pub probability: f64,
}

/// Inputs for the job-offer comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOfferComparisonInput {
    /// Offers under consideration, in presentation order
    pub offers: Vec<JobOffer>,

    /// One weight per criterion, shared across all offers
    pub criteria_weights: Vec<f64>,

    /// Score matrix: one row per offer, one column per criterion
    pub criteria_scores: Vec<Vec<f64>>,
}

/// Result of the job-offer comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOfferComparisonResult {
    /// Weighted score per offer, in the same order as the input offers
    pub weighted_scores: Vec<f64>,

    /// Label of the highest-scoring offer
    pub best_offer: String,
}

/// Score every offer and pick the best one.
///
/// Each score row is reduced with [`formulas::weighted_score`] against the
/// shared criteria weights. The winner is the left-to-right maximum, so the
/// first of any tied offers wins. The matrix must have one row per offer;
/// an empty offer list is rejected the same way since there is no best
/// offer to name.
pub fn compare_job_offers(
    params: &JobOfferComparisonInput,
) -> Result<JobOfferComparisonResult, CareerError> {
    if params.offers.len() != params.criteria_scores.len() || params.offers.is_empty() {
        return Err(CareerError::DimensionMismatch {
            offers: params.offers.len(),
            rows: params.criteria_scores.len(),
        });
    }

    let mut weighted_scores = Vec::with_capacity(params.criteria_scores.len());
    for row in &params.criteria_scores {
        weighted_scores.push(formulas::weighted_score(row, &params.criteria_weights)?);
    }

    // Left-to-right maximum scan: first occurrence wins on ties
    let mut best_index = 0;
    for (i, &score) in weighted_scores.iter().enumerate() {
        if score > weighted_scores[best_index] {
            best_index = i;
        }
    }
    let best_offer = params.offers[best_index].label.clone();

    debug!(
        "compare_job_offers: {} offers, best={} ({:.4})",
        params.offers.len(),
        best_offer,
        weighted_scores[best_index]
    );

    Ok(JobOfferComparisonResult {
        weighted_scores,
        best_offer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn offer(label: &str, compensation: f64) -> JobOffer {
        JobOffer {
            label: label.to_string(),
            compensation,
            equity_value: 0.0,
            bonus: 0.0,
            probability: 1.0,
        }
    }

    #[test]
    fn test_two_offer_comparison() {
        let input = JobOfferComparisonInput {
            offers: vec![offer("Acme", 180_000.0), offer("Globex", 195_000.0)],
            criteria_weights: vec![0.6, 0.4],
            criteria_scores: vec![vec![8.0, 7.0], vec![9.0, 5.0]],
        };

        let result = compare_job_offers(&input).unwrap();
        assert_abs_diff_eq!(result.weighted_scores[0], 7.6, epsilon = 1e-9);
        assert_abs_diff_eq!(result.weighted_scores[1], 7.4, epsilon = 1e-9);
        assert_eq!(result.best_offer, "Acme");
    }

    #[test]
    fn test_scores_preserve_input_order() {
        let input = JobOfferComparisonInput {
            offers: vec![
                offer("A", 1.0),
                offer("B", 1.0),
                offer("C", 1.0),
            ],
            criteria_weights: vec![1.0],
            criteria_scores: vec![vec![2.0], vec![9.0], vec![5.0]],
        };

        let result = compare_job_offers(&input).unwrap();
        assert_eq!(result.weighted_scores, vec![2.0, 9.0, 5.0]);
        assert_eq!(result.best_offer, "B");
    }

    #[test]
    fn test_tie_goes_to_first_offer() {
        let input = JobOfferComparisonInput {
            offers: vec![offer("First", 1.0), offer("Second", 1.0)],
            criteria_weights: vec![0.5, 0.5],
            criteria_scores: vec![vec![6.0, 8.0], vec![8.0, 6.0]],
        };

        let result = compare_job_offers(&input).unwrap();
        assert_eq!(result.best_offer, "First");
    }

    #[test]
    fn test_row_count_mismatch() {
        let input = JobOfferComparisonInput {
            offers: vec![offer("Only", 1.0)],
            criteria_weights: vec![1.0],
            criteria_scores: vec![vec![5.0], vec![6.0]],
        };

        let err = compare_job_offers(&input).unwrap_err();
        assert_eq!(err, CareerError::DimensionMismatch { offers: 1, rows: 2 });
    }

    #[test]
    fn test_no_offers_is_an_error() {
        let input = JobOfferComparisonInput {
            offers: vec![],
            criteria_weights: vec![0.5, 0.5],
            criteria_scores: vec![],
        };

        let err = compare_job_offers(&input).unwrap_err();
        assert_eq!(err, CareerError::DimensionMismatch { offers: 0, rows: 0 });
    }

    #[test]
    fn test_row_length_mismatch_propagates() {
        let input = JobOfferComparisonInput {
            offers: vec![offer("Short", 1.0)],
            criteria_weights: vec![0.6, 0.4],
            criteria_scores: vec![vec![8.0]],
        };

        let err = compare_job_offers(&input).unwrap_err();
        assert!(matches!(err, CareerError::Formula(_)));
    }

    #[test]
    fn test_offer_json_defaults() {
        let offer: JobOffer =
            serde_json::from_str(r#"{"label": "Initech", "compensation": 150000}"#).unwrap();
        assert_eq!(offer.equity_value, 0.0);
        assert_eq!(offer.bonus, 0.0);
        assert_eq!(offer.probability, 1.0);
    }

    #[test]
    fn test_input_json_round_trip() {
        let json = r#"{
            "offers": [
                {"label": "Acme", "compensation": 180000, "equity_value": 20000},
                {"label": "Globex", "compensation": 195000}
            ],
            "criteria_weights": [0.6, 0.4],
            "criteria_scores": [[8, 7], [9, 5]]
        }"#;

        let input: JobOfferComparisonInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.offers.len(), 2);
        assert_eq!(input.offers[0].equity_value, 20_000.0);

        let result = compare_job_offers(&input).unwrap();
        assert_eq!(result.best_offer, "Acme");
    }
}
