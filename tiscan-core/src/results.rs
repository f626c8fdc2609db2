use crate::constants::NUM_CODON_TYPES;
use crate::evaluation::RocCurve;
use crate::matrix::WeightMatrix;

/// Metadata about the evaluated sample set.
#[derive(Debug, Clone)]
pub struct DatasetInfo {
    /// Number of sequences scored during evaluation.
    pub sample_count: usize,
    /// Common length of the sequences.
    pub sequence_length: usize,
    /// Total start-codon occurrences in the evaluated set, overlapping
    /// matches included.
    pub codon_occurrences: usize,
    /// Occurrence counts broken down by codon type (ATG, GTG, TTG order).
    pub codon_type_counts: [usize; NUM_CODON_TYPES],
}

/// Results of a full start-site analysis run.
///
/// Carries the trained matrix and computed curves so external consumers
/// (heatmap and ROC plotters) can render them.
///
/// # Examples
///
/// ```rust,no_run
/// use tiscan_core::{TisAnalyzer, config::TisConfig, sequence::SampleSet};
///
/// let config = TisConfig::default();
/// let samples = SampleSet::new(vec![/* ... */], &config)?;
/// let results = TisAnalyzer::new(config)?.analyze(&samples)?;
///
/// println!("start codons: {}", results.dataset.codon_occurrences);
/// println!("threshold:    {:.3}", results.threshold);
/// println!("TP/FP:        {}/{}", results.true_positives, results.false_positives);
/// println!("AUC:          {:.4}", results.area_under_curve);
/// # Ok::<(), tiscan_core::types::TisError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TisResults {
    /// Metadata for the evaluated set (the validation half under holdout).
    pub dataset: DatasetInfo,
    /// The trained position weight matrix.
    pub weight_matrix: WeightMatrix,
    /// Score threshold estimated at the configured target sensitivity.
    pub threshold: f64,
    /// Positive candidates at the known start offset.
    pub true_positives: usize,
    /// Positive candidates elsewhere.
    pub false_positives: usize,
    /// ROC curve from the descending threshold sweep.
    pub roc: RocCurve,
    /// Trapezoidal area under the ROC curve.
    pub area_under_curve: f64,
    /// Size of the training half when a holdout split was used.
    pub training_count: Option<usize>,
}
