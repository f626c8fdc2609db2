//! Candidate classification, ROC sweep, and area under curve.

use crate::config::TisConfig;
use crate::constants::{SWEEP_THRESHOLD_MAX, SWEEP_THRESHOLD_MIN, SWEEP_THRESHOLD_STEP};
use crate::types::GeneStartCandidate;

/// Candidates partitioned by correctness at a fixed threshold.
///
/// A candidate is positive when its score strictly exceeds the threshold;
/// positives at the known start offset are true, all others false.
#[derive(Debug, Clone)]
pub struct Classification {
    /// Positives whose start index equals the known start offset.
    pub true_positives: Vec<GeneStartCandidate>,
    /// Positives anywhere else in their sequence.
    pub false_positives: Vec<GeneStartCandidate>,
}

/// Classify candidates against a score threshold.
#[must_use]
pub fn classify(
    candidates: &[GeneStartCandidate],
    threshold: f64,
    config: &TisConfig,
) -> Classification {
    let mut true_positives = Vec::new();
    let mut false_positives = Vec::new();

    for candidate in candidates {
        if candidate.score > threshold {
            if candidate.start_index == config.start_offset {
                true_positives.push(candidate.clone());
            } else {
                false_positives.push(candidate.clone());
            }
        }
    }

    Classification {
        true_positives,
        false_positives,
    }
}

/// One point of an ROC curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocPoint {
    /// False positives over the negative population size.
    pub false_positive_rate: f64,
    /// True positives over the positive population size.
    pub true_positive_rate: f64,
}

/// An ROC curve produced by a descending threshold sweep.
///
/// Points are stored in sweep order (decreasing threshold, equivalently
/// non-decreasing false positive rate).
#[derive(Debug, Clone)]
pub struct RocCurve {
    /// Curve points in sweep order.
    pub points: Vec<RocPoint>,
}

impl RocCurve {
    /// Area under the curve via trapezoidal integration over the points
    /// sorted by false positive rate ascending.
    #[must_use]
    pub fn area_under_curve(&self) -> f64 {
        let mut sorted = self.points.clone();
        sorted.sort_by(|a, b| a.false_positive_rate.total_cmp(&b.false_positive_rate));

        sorted
            .windows(2)
            .map(|pair| {
                let width = pair[1].false_positive_rate - pair[0].false_positive_rate;
                width * (pair[0].true_positive_rate + pair[1].true_positive_rate) / 2.0
            })
            .sum()
    }
}

/// The default descending sweep: thresholds from +100 down to -100 in steps
/// of 0.1.
#[must_use]
pub fn default_threshold_sweep() -> Vec<f64> {
    let steps = ((SWEEP_THRESHOLD_MAX - SWEEP_THRESHOLD_MIN) / SWEEP_THRESHOLD_STEP).round() as usize;
    (0..=steps)
        .map(|step| SWEEP_THRESHOLD_MAX - step as f64 * SWEEP_THRESHOLD_STEP)
        .collect()
}

/// Sweep thresholds in descending order and record the rate pair at each.
///
/// `positive_count` is the number of sequences in the evaluated set (one
/// true start each); `negative_count` is the total number of start-codon
/// occurrences in the set minus `positive_count`. Both must be non-zero for
/// the rates to be defined.
#[must_use]
pub fn roc_curve(
    candidates: &[GeneStartCandidate],
    positive_count: usize,
    negative_count: usize,
    thresholds: &[f64],
    config: &TisConfig,
) -> RocCurve {
    let points = thresholds
        .iter()
        .map(|&threshold| {
            let classification = classify(candidates, threshold, config);
            RocPoint {
                false_positive_rate: classification.false_positives.len() as f64
                    / negative_count as f64,
                true_positive_rate: classification.true_positives.len() as f64
                    / positive_count as f64,
            }
        })
        .collect();

    RocCurve { points }
}
