use crate::constants::{
    DEFAULT_BACKGROUND, DEFAULT_PSEUDOCOUNT, DEFAULT_SENSITIVITY_PERCENT, DEFAULT_START_OFFSET,
    DEFAULT_WINDOW_LENGTH,
};
use crate::types::TisError;

/// Configuration for start-site matrix estimation and scoring.
///
/// Every estimator and scorer takes the configuration explicitly; there is
/// no process-wide state. The defaults reproduce the standard analysis of
/// aligned E. coli start-site extracts: a 30-base upstream window before a
/// start codon planted at offset 100.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use tiscan_core::config::TisConfig;
///
/// let config = TisConfig::default();
/// assert_eq!(config.window_length, 30);
/// ```
///
/// ## Custom window
///
/// ```rust
/// use tiscan_core::config::TisConfig;
///
/// let config = TisConfig {
///     window_length: 20,
///     sensitivity_percent: 90.0,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TisConfig {
    /// Length of the upstream window scored against the weight matrix.
    ///
    /// **Default**: `30`
    pub window_length: usize,

    /// Offset of the known true start codon within every training sample.
    ///
    /// The window of `window_length` bases immediately preceding this offset
    /// is the training alignment. Must be at least `window_length`.
    ///
    /// **Default**: `100`
    pub start_offset: usize,

    /// Pseudocount added uniformly to every frequency-matrix cell.
    ///
    /// Must be greater than zero so that no probability is ever zero before
    /// the log transform.
    ///
    /// **Default**: `1.0`
    pub pseudocount: f64,

    /// Background probability per base, for the log-odds denominator.
    ///
    /// **Default**: `0.25` (uniform)
    pub background: f64,

    /// Target sensitivity (percent of true positives retained) used when
    /// estimating the score threshold.
    ///
    /// **Default**: `50.0`
    pub sensitivity_percent: f64,

    /// Suppress informational output on stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}

impl Default for TisConfig {
    fn default() -> Self {
        Self {
            window_length: DEFAULT_WINDOW_LENGTH,
            start_offset: DEFAULT_START_OFFSET,
            pseudocount: DEFAULT_PSEUDOCOUNT,
            background: DEFAULT_BACKGROUND,
            sensitivity_percent: DEFAULT_SENSITIVITY_PERCENT,
            quiet: false,
        }
    }
}

impl TisConfig {
    /// Check the configuration for internally consistent values.
    ///
    /// # Errors
    ///
    /// Returns [`TisError::InvalidConfig`] when the window is empty, the
    /// start offset cannot accommodate the window, the pseudocount is not
    /// positive, or the background probability is outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), TisError> {
        if self.window_length == 0 {
            return Err(TisError::InvalidConfig(
                "window length must be at least 1".to_string(),
            ));
        }
        if self.start_offset < self.window_length {
            return Err(TisError::InvalidConfig(format!(
                "start offset {} cannot fit a {}-base upstream window",
                self.start_offset, self.window_length
            )));
        }
        if self.pseudocount <= 0.0 {
            return Err(TisError::InvalidConfig(format!(
                "pseudocount must be positive, got {}",
                self.pseudocount
            )));
        }
        if !(self.background > 0.0 && self.background <= 1.0) {
            return Err(TisError::InvalidConfig(format!(
                "background probability must lie in (0, 1], got {}",
                self.background
            )));
        }
        if !(0.0..=100.0).contains(&self.sensitivity_percent) {
            return Err(TisError::InvalidConfig(format!(
                "sensitivity must lie in 0..=100, got {}",
                self.sensitivity_percent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_pseudocount() {
        let config = TisConfig {
            pseudocount: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_window_larger_than_offset() {
        let config = TisConfig {
            window_length: 50,
            start_offset: 40,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_sensitivity() {
        let config = TisConfig {
            sensitivity_percent: 101.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
