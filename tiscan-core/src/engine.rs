//! Analysis facade tying the pipeline stages together.

use crate::config::TisConfig;
use crate::evaluation::{classify, default_threshold_sweep, roc_curve};
use crate::matrix::WeightMatrix;
use crate::results::{DatasetInfo, TisResults};
use crate::scan::{count_codon_types, count_start_codons};
use crate::score::score_candidates;
use crate::sequence::SampleSet;
use crate::threshold::estimate_threshold;
use crate::types::{GeneStartCandidate, TisError};

/// High-level driver for the start-site scoring pipeline.
///
/// Runs matrix estimation, candidate scoring, threshold estimation, and the
/// ROC sweep in one pass, either on the whole set or with a training/
/// validation holdout split.
///
/// # Examples
///
/// ```rust,no_run
/// use tiscan_core::{TisAnalyzer, config::TisConfig, sequence::SampleSet};
/// use tiscan_core::sequence::io::read_plain_sequences;
///
/// let config = TisConfig::default();
/// let samples = SampleSet::new(read_plain_sequences("tis.txt")?, &config)?;
///
/// let analyzer = TisAnalyzer::new(config)?;
/// let results = analyzer.analyze_with_holdout(&samples, 400)?;
/// println!("AUC: {:.4}", results.area_under_curve);
/// # Ok::<(), tiscan_core::types::TisError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TisAnalyzer {
    /// Pipeline configuration; validated on construction.
    pub config: TisConfig,
}

impl TisAnalyzer {
    /// Create an analyzer with a validated configuration.
    ///
    /// # Errors
    ///
    /// [`TisError::InvalidConfig`] when the configuration is inconsistent.
    pub fn new(config: TisConfig) -> Result<Self, TisError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Train on the full sample set and evaluate on the same set.
    ///
    /// # Errors
    ///
    /// Propagates estimation failures; [`TisError::NoTruePositives`] if no
    /// candidate sits at the known start offset,
    /// [`TisError::NoNegatives`] if the set holds no codon occurrences
    /// beyond the known starts.
    pub fn analyze(&self, samples: &SampleSet) -> Result<TisResults, TisError> {
        let pwm = WeightMatrix::estimate(samples, &self.config)?;
        let candidates = score_candidates(samples, &pwm);
        let threshold = estimate_threshold(
            &candidates,
            self.config.sensitivity_percent,
            &self.config,
        )?;
        self.evaluate(samples, pwm, candidates, threshold, None)
    }

    /// Train on the leading `training_count` sequences and evaluate on the
    /// remainder.
    ///
    /// The weight matrix and the score threshold both come from the training
    /// half; candidates, classification, and the ROC sweep come from the
    /// validation half.
    ///
    /// # Errors
    ///
    /// [`TisError::EmptyHoldout`] when the split leaves either side empty,
    /// plus the failures of [`TisAnalyzer::analyze`].
    pub fn analyze_with_holdout(
        &self,
        samples: &SampleSet,
        training_count: usize,
    ) -> Result<TisResults, TisError> {
        let (training, validation) = samples.split_at(training_count)?;

        let pwm = WeightMatrix::estimate(&training, &self.config)?;
        let training_candidates = score_candidates(&training, &pwm);
        let threshold = estimate_threshold(
            &training_candidates,
            self.config.sensitivity_percent,
            &self.config,
        )?;

        let validation_candidates = score_candidates(&validation, &pwm);
        self.evaluate(
            &validation,
            pwm,
            validation_candidates,
            threshold,
            Some(training_count),
        )
    }

    fn evaluate(
        &self,
        samples: &SampleSet,
        pwm: WeightMatrix,
        candidates: Vec<GeneStartCandidate>,
        threshold: f64,
        training_count: Option<usize>,
    ) -> Result<TisResults, TisError> {
        let classification = classify(&candidates, threshold, &self.config);

        let codon_occurrences = count_start_codons(samples);
        // One true start per sequence; every other codon occurrence counts
        // as a negative (see DESIGN.md on this denominator).
        let positive_count = samples.len();
        let negative_count = codon_occurrences.saturating_sub(positive_count);
        if negative_count == 0 {
            return Err(TisError::NoNegatives);
        }

        let sweep = default_threshold_sweep();
        let roc = roc_curve(
            &candidates,
            positive_count,
            negative_count,
            &sweep,
            &self.config,
        );
        let area_under_curve = roc.area_under_curve();

        Ok(TisResults {
            dataset: DatasetInfo {
                sample_count: samples.len(),
                sequence_length: samples.sequence_length(),
                codon_occurrences,
                codon_type_counts: count_codon_types(samples),
            },
            weight_matrix: pwm,
            threshold,
            true_positives: classification.true_positives.len(),
            false_positives: classification.false_positives.len(),
            roc,
            area_under_curve,
            training_count,
        })
    }
}
