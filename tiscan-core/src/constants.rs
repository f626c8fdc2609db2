// =============================================================================
// =============================================================================

/// Number of distinct bases in the alphabet (matrix rows)
pub const NUM_BASES: usize = 4;

/// Length of a codon in base pairs
pub const CODON_LENGTH: usize = 3;

/// Number of recognized start codon types (ATG, GTG, TTG)
pub const NUM_CODON_TYPES: usize = 3;

// =============================================================================
// =============================================================================

/// Default upstream window length used for matrix estimation
pub const DEFAULT_WINDOW_LENGTH: usize = 30;

/// Default offset of the known true start codon within each sample
pub const DEFAULT_START_OFFSET: usize = 100;

/// Default pseudocount added to every frequency-matrix cell
pub const DEFAULT_PSEUDOCOUNT: f64 = 1.0;

/// Default uniform background probability per base
pub const DEFAULT_BACKGROUND: f64 = 0.25;

/// Default target sensitivity (percent) for threshold estimation
pub const DEFAULT_SENSITIVITY_PERCENT: f64 = 50.0;

// =============================================================================
// =============================================================================

/// Upper bound of the default ROC threshold sweep
pub const SWEEP_THRESHOLD_MAX: f64 = 100.0;

/// Lower bound of the default ROC threshold sweep
pub const SWEEP_THRESHOLD_MIN: f64 = -100.0;

/// Step size of the default ROC threshold sweep
pub const SWEEP_THRESHOLD_STEP: f64 = 0.1;
