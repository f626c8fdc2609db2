//! Validated, fixed-length DNA sample sets.
//!
//! A [`SampleSet`] is the only entry point for sequence data into the
//! pipeline. Construction validates the alphabet and the fixed length up
//! front, so matrix estimation and scoring never have to bounds-check the
//! upstream window.

pub mod io;

use crate::config::TisConfig;
use crate::constants::CODON_LENGTH;
use crate::types::{Nucleotide, TisError};

/// An ordered set of fixed-length DNA sequences.
///
/// Order is significant: the position of a sequence within the set is the
/// `sample_index` carried by every candidate scored from it.
#[derive(Debug, Clone)]
pub struct SampleSet {
    sequences: Vec<Vec<u8>>,
    sequence_length: usize,
}

impl SampleSet {
    /// Build a sample set from raw sequences, validating against `config`.
    ///
    /// Every sequence must consist solely of `ACTG`, have the same length as
    /// the first, and be long enough to hold the start codon at
    /// `config.start_offset` (which in turn guarantees the upstream window
    /// is in bounds, since `start_offset >= window_length` is enforced by
    /// [`TisConfig::validate`]).
    ///
    /// # Errors
    ///
    /// [`TisError::EmptySampleSet`], [`TisError::SequenceTooShort`],
    /// [`TisError::MismatchedLength`], or [`TisError::InvalidSymbol`].
    pub fn new(sequences: Vec<Vec<u8>>, config: &TisConfig) -> Result<Self, TisError> {
        config.validate()?;
        if sequences.is_empty() {
            return Err(TisError::EmptySampleSet);
        }

        let sequence_length = sequences[0].len();
        let required = config.start_offset + CODON_LENGTH;
        if sequence_length < required {
            return Err(TisError::SequenceTooShort {
                length: sequence_length,
                required,
            });
        }

        for sequence in &sequences {
            if sequence.len() != sequence_length {
                return Err(TisError::MismatchedLength {
                    expected: sequence_length,
                    found: sequence.len(),
                });
            }
            for &symbol in sequence.iter() {
                Nucleotide::from_symbol(symbol)?;
            }
        }

        Ok(Self {
            sequences,
            sequence_length,
        })
    }

    /// Number of sequences in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Whether the set holds no sequences. Never true for a constructed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// The common length of every sequence in the set.
    #[must_use]
    pub const fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    /// Iterate over the sequences in sample order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.sequences.iter().map(Vec::as_slice)
    }

    /// Split into a leading training set and a trailing validation set.
    ///
    /// Sample indices restart at zero within each half.
    ///
    /// # Errors
    ///
    /// [`TisError::EmptyHoldout`] if either half would be empty.
    pub fn split_at(&self, training_count: usize) -> Result<(Self, Self), TisError> {
        if training_count == 0 || training_count >= self.len() {
            return Err(TisError::EmptyHoldout {
                training_count,
                total: self.len(),
            });
        }
        let (training, validation) = self.sequences.split_at(training_count);
        Ok((
            Self {
                sequences: training.to_vec(),
                sequence_length: self.sequence_length,
            },
            Self {
                sequences: validation.to_vec(),
                sequence_length: self.sequence_length,
            },
        ))
    }
}
