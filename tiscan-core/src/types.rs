use std::fmt;

use thiserror::Error;

/// The four unambiguous DNA bases, in matrix-row order.
///
/// The row order A, C, T, G is fixed; every frequency and weight matrix in
/// this crate uses it, as do the row labels of the exported heatmap data.
///
/// # Examples
///
/// ```rust
/// use tiscan_core::types::Nucleotide;
///
/// assert_eq!(Nucleotide::from_symbol(b'T').unwrap().row_index(), 2);
/// assert!(Nucleotide::from_symbol(b'N').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nucleotide {
    /// Adenine
    A,
    /// Cytosine
    C,
    /// Thymine
    T,
    /// Guanine
    G,
}

impl Nucleotide {
    /// All bases in matrix-row order.
    pub const ALL: [Self; 4] = [Self::A, Self::C, Self::T, Self::G];

    /// Decode a single sequence byte.
    ///
    /// # Errors
    ///
    /// Returns [`TisError::InvalidSymbol`] for anything outside `ACTG`.
    /// Ambiguous bases such as `N` are not supported.
    pub fn from_symbol(symbol: u8) -> Result<Self, TisError> {
        match symbol {
            b'A' => Ok(Self::A),
            b'C' => Ok(Self::C),
            b'T' => Ok(Self::T),
            b'G' => Ok(Self::G),
            other => Err(TisError::InvalidSymbol(other as char)),
        }
    }

    /// Stable matrix-row index in `0..4`.
    #[must_use]
    pub const fn row_index(self) -> usize {
        match self {
            Self::A => 0,
            Self::C => 1,
            Self::T => 2,
            Self::G => 3,
        }
    }

    /// The base as an uppercase character.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::T => 'T',
            Self::G => 'G',
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The start codons recognized when scanning for gene start candidates.
///
/// Prokaryotic genes initiate almost exclusively at ATG, GTG, or TTG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodonType {
    /// ATG start codon
    Atg,
    /// GTG start codon
    Gtg,
    /// TTG start codon
    Ttg,
}

impl CodonType {
    /// Match a triplet against the start codon set.
    #[must_use]
    pub const fn from_triplet(triplet: &[u8; 3]) -> Option<Self> {
        match triplet {
            b"ATG" => Some(Self::Atg),
            b"GTG" => Some(Self::Gtg),
            b"TTG" => Some(Self::Ttg),
            _ => None,
        }
    }

    /// Convert codon type to array index for tallying.
    #[must_use]
    pub const fn to_index(self) -> usize {
        match self {
            Self::Atg => 0,
            Self::Gtg => 1,
            Self::Ttg => 2,
        }
    }
}

impl fmt::Display for CodonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atg => write!(f, "ATG"),
            Self::Gtg => write!(f, "GTG"),
            Self::Ttg => write!(f, "TTG"),
        }
    }
}

/// A possible gene start, found by scanning a sequence for start codons and
/// scored against a trained weight matrix.
///
/// Candidates are value objects: created once during scoring, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneStartCandidate {
    /// Index of the originating sequence within its sample set.
    pub sample_index: usize,
    /// 0-based offset of the start codon within the sequence.
    pub start_index: usize,
    /// Log-odds score of the upstream window under the weight matrix.
    pub score: f64,
}

/// Error types for the start-site scoring pipeline.
#[derive(Error, Debug)]
pub enum TisError {
    /// A sequence contained a character outside the `ACTG` alphabet.
    #[error("Invalid symbol in sequence: {0:?}")]
    InvalidSymbol(char),
    /// A sequence was too short for the configured window and start offset.
    #[error("Sequence too short: {length} bases (at least {required} required)")]
    SequenceTooShort { length: usize, required: usize },
    /// Sample sets must contain sequences of a single fixed length.
    #[error("Mismatched sequence length: expected {expected}, found {found}")]
    MismatchedLength { expected: usize, found: usize },
    /// An empty sample set cannot be analyzed.
    #[error("Sample set is empty")]
    EmptySampleSet,
    /// Threshold estimation requires at least one true-positive candidate.
    #[error("No candidates at the known start offset; cannot estimate a threshold")]
    NoTruePositives,
    /// ROC rates are undefined when the evaluated set has no negative codon
    /// occurrences.
    #[error("No negative codon occurrences; false positive rate is undefined")]
    NoNegatives,
    /// Percentiles are only defined for 0..=100.
    #[error("Invalid percentile: {0} (must be within 0..=100)")]
    InvalidPercentile(f64),
    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// A holdout split left the training or validation side empty.
    #[error("Invalid holdout split: {training_count} training sequences of {total}")]
    EmptyHoldout { training_count: usize, total: usize },
    /// File I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing input data.
    #[error("Parse error: {0}")]
    Parse(String),
}
