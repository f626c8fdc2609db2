//! Position frequency and weight matrix estimation.
//!
//! Both matrix types are explicit 4×L tables addressed by
//! `(Nucleotide, column)` rather than bare row/column conventions, so a
//! transposed access does not typecheck.

use crate::config::TisConfig;
use crate::constants::NUM_BASES;
use crate::sequence::SampleSet;
use crate::types::{Nucleotide, TisError};

/// Position frequency matrix: raw symbol counts per upstream window column.
///
/// Mutable only during estimation; callers receive it fully counted.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyMatrix {
    cells: Vec<f64>,
    window_length: usize,
}

impl FrequencyMatrix {
    fn zeros(window_length: usize) -> Self {
        Self {
            cells: vec![0.0; NUM_BASES * window_length],
            window_length,
        }
    }

    /// Count symbol occurrences over the aligned upstream windows of a
    /// sample set.
    ///
    /// For each sample, the `window_length` bases immediately preceding
    /// `config.start_offset` are tallied into `(base, column)` cells. The
    /// window is guaranteed in bounds by [`SampleSet`] validation.
    #[must_use]
    pub fn estimate(samples: &SampleSet, config: &TisConfig) -> Self {
        let window_length = config.window_length;
        let window_start = config.start_offset - window_length;
        let mut matrix = Self::zeros(window_length);

        for sequence in samples.iter() {
            for (column, &symbol) in sequence[window_start..config.start_offset]
                .iter()
                .enumerate()
            {
                // SampleSet only admits ACTG, so decoding cannot fail here.
                if let Ok(base) = Nucleotide::from_symbol(symbol) {
                    *matrix.cell_mut(base, column) += 1.0;
                }
            }
        }

        matrix
    }

    /// Number of columns (upstream window length).
    #[must_use]
    pub const fn window_length(&self) -> usize {
        self.window_length
    }

    /// Count at `(base, column)`.
    #[must_use]
    pub fn get(&self, base: Nucleotide, column: usize) -> f64 {
        self.cells[base.row_index() * self.window_length + column]
    }

    fn cell_mut(&mut self, base: Nucleotide, column: usize) -> &mut f64 {
        &mut self.cells[base.row_index() * self.window_length + column]
    }

    /// Sum of all counts in one column.
    #[must_use]
    pub fn column_sum(&self, column: usize) -> f64 {
        Nucleotide::ALL
            .iter()
            .map(|&base| self.get(base, column))
            .sum()
    }
}

/// Position weight matrix: per-cell log2-odds against a uniform background.
///
/// Derived deterministically from a [`FrequencyMatrix`], a pseudocount, and
/// the background probability; immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    cells: Vec<f64>,
    window_length: usize,
}

impl WeightMatrix {
    /// Estimate a weight matrix from aligned upstream windows.
    ///
    /// 1. Count a frequency matrix and add `config.pseudocount` to every
    ///    cell.
    /// 2. Normalize each cell by `sample_count + 4 * pseudocount`, treating
    ///    the pseudocount as inflating the effective sample count uniformly
    ///    across the four bases; each column then sums to one.
    /// 3. Take `log2(probability) - log2(background)`.
    ///
    /// The estimate has no hidden state: calling it twice on the same input
    /// produces identical matrices.
    ///
    /// # Errors
    ///
    /// Returns [`TisError::InvalidConfig`] if the configuration fails
    /// validation (a non-positive pseudocount would make the log transform
    /// undefined).
    pub fn estimate(samples: &SampleSet, config: &TisConfig) -> Result<Self, TisError> {
        config.validate()?;

        let frequencies = FrequencyMatrix::estimate(samples, config);
        let effective_count = samples.len() as f64 + config.pseudocount * NUM_BASES as f64;
        let log_background = config.background.log2();

        let cells = frequencies
            .cells
            .iter()
            .map(|&count| {
                let probability = (count + config.pseudocount) / effective_count;
                probability.log2() - log_background
            })
            .collect();

        Ok(Self {
            cells,
            window_length: frequencies.window_length,
        })
    }

    /// Number of columns (upstream window length).
    #[must_use]
    pub const fn window_length(&self) -> usize {
        self.window_length
    }

    /// Log-odds score at `(base, column)`.
    #[must_use]
    pub fn get(&self, base: Nucleotide, column: usize) -> f64 {
        self.cells[base.row_index() * self.window_length + column]
    }
}
