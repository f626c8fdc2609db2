//! Candidate enumeration and log-odds scoring.

use crate::matrix::WeightMatrix;
use crate::sequence::SampleSet;
use crate::types::{GeneStartCandidate, Nucleotide};

/// Find every start-codon occurrence in a sample set and score its upstream
/// window against a trained weight matrix.
///
/// A match only yields a candidate when the full window of
/// `pwm.window_length()` bases before it lies within the sequence; matches
/// too close to the sequence start are silently skipped. The score of a
/// candidate is the sum of the matrix cells selected by the window's bases.
///
/// Candidates are returned in sample order, then ascending start offset.
#[must_use]
pub fn score_candidates(samples: &SampleSet, pwm: &WeightMatrix) -> Vec<GeneStartCandidate> {
    let window_length = pwm.window_length();
    let mut candidates = Vec::new();

    for (sample_index, sequence) in samples.iter().enumerate() {
        for (start_index, _codon) in crate::scan::start_codons(sequence) {
            if start_index < window_length {
                continue;
            }
            let window = &sequence[start_index - window_length..start_index];
            let score = window
                .iter()
                .enumerate()
                .map(|(column, &symbol)| {
                    // SampleSet validation guarantees ACTG.
                    Nucleotide::from_symbol(symbol)
                        .map(|base| pwm.get(base, column))
                        .unwrap_or_default()
                })
                .sum();
            candidates.push(GeneStartCandidate {
                sample_index,
                start_index,
                score,
            });
        }
    }

    candidates
}
