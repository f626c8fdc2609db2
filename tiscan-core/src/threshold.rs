//! Score threshold estimation from the true-positive score distribution.

use crate::config::TisConfig;
use crate::types::{GeneStartCandidate, TisError};

/// Linear-interpolation percentile over an unsorted slice of values.
///
/// Uses the same semantics as numpy's default `percentile`: the value at
/// fractional rank `percent / 100 * (n - 1)`, interpolated between the two
/// nearest order statistics. `percentile(&[1..=10], 50.0)` is `5.5`.
///
/// # Errors
///
/// [`TisError::NoTruePositives`] on an empty slice,
/// [`TisError::InvalidPercentile`] for a percent outside `0..=100`.
pub fn percentile(values: &[f64], percent: f64) -> Result<f64, TisError> {
    if values.is_empty() {
        return Err(TisError::NoTruePositives);
    }
    if !(0.0..=100.0).contains(&percent) {
        return Err(TisError::InvalidPercentile(percent));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = percent / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let fraction = rank - lower as f64;
    if lower + 1 < sorted.len() {
        Ok(sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower]))
    } else {
        Ok(sorted[lower])
    }
}

/// Estimate a score threshold for a target sensitivity.
///
/// Filters the candidates down to those at the known true start offset and
/// returns the `sensitivity_percent` percentile of their scores: the cutoff
/// below which that share of true-positive scores falls.
///
/// # Errors
///
/// [`TisError::NoTruePositives`] when no candidate sits at
/// `config.start_offset`; [`TisError::InvalidPercentile`] for a sensitivity
/// outside `0..=100`.
pub fn estimate_threshold(
    candidates: &[GeneStartCandidate],
    sensitivity_percent: f64,
    config: &TisConfig,
) -> Result<f64, TisError> {
    let true_positive_scores: Vec<f64> = candidates
        .iter()
        .filter(|candidate| candidate.start_index == config.start_offset)
        .map(|candidate| candidate.score)
        .collect();

    percentile(&true_positive_scores, sensitivity_percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(start_index: usize, score: f64) -> GeneStartCandidate {
        GeneStartCandidate {
            sample_index: 0,
            start_index,
            score,
        }
    }

    #[test]
    fn test_percentile_median_interpolates() {
        let scores: Vec<f64> = (1..=10).map(f64::from).collect();
        assert!((percentile(&scores, 50.0).unwrap() - 5.5).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_extremes() {
        let scores = [3.0, 1.0, 2.0];
        assert_eq!(percentile(&scores, 0.0).unwrap(), 1.0);
        assert_eq!(percentile(&scores, 100.0).unwrap(), 3.0);
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile(&[7.0], 50.0).unwrap(), 7.0);
    }

    #[test]
    fn test_percentile_rejects_empty_and_out_of_range() {
        assert!(matches!(
            percentile(&[], 50.0),
            Err(TisError::NoTruePositives)
        ));
        assert!(matches!(
            percentile(&[1.0], 101.0),
            Err(TisError::InvalidPercentile(_))
        ));
        assert!(matches!(
            percentile(&[1.0], -0.5),
            Err(TisError::InvalidPercentile(_))
        ));
    }

    #[test]
    fn test_threshold_uses_only_known_offset_candidates() {
        let config = TisConfig::default();
        let mut candidates: Vec<_> = (1..=10)
            .map(|i| candidate(config.start_offset, f64::from(i)))
            .collect();
        // Decoys away from the known offset must not influence the estimate
        candidates.push(candidate(40, 1000.0));
        candidates.push(candidate(150, -1000.0));

        let threshold = estimate_threshold(&candidates, 50.0, &config).unwrap();
        assert!((threshold - 5.5).abs() < 1e-12);
    }

    #[test]
    fn test_threshold_fails_without_true_positives() {
        let config = TisConfig::default();
        let candidates = vec![candidate(40, 1.0), candidate(60, 2.0)];
        assert!(matches!(
            estimate_threshold(&candidates, 50.0, &config),
            Err(TisError::NoTruePositives)
        ));
    }
}
