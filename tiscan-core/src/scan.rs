//! Overlapping start-codon scanning.
//!
//! An explicit sliding-window scan over the fixed pattern set {ATG, GTG,
//! TTG}. Unlike a naive regex search, every overlapping occurrence is
//! reported: scanning `ATGTG` yields a match at offset 0 and another at
//! offset 2.

use crate::constants::{CODON_LENGTH, NUM_CODON_TYPES};
use crate::sequence::SampleSet;
use crate::types::CodonType;

/// Lazy iterator over every start-codon occurrence in a sequence.
///
/// Yields `(offset, codon)` pairs with 0-based offsets, in ascending order.
/// The iterator borrows the sequence and can be recreated cheaply to restart
/// the scan.
///
/// # Examples
///
/// ```rust
/// use tiscan_core::scan::start_codons;
/// use tiscan_core::types::CodonType;
///
/// let matches: Vec<_> = start_codons(b"ATGATG").collect();
/// assert_eq!(matches, vec![(0, CodonType::Atg), (3, CodonType::Atg)]);
/// ```
#[derive(Debug, Clone)]
pub struct StartCodonMatches<'a> {
    sequence: &'a [u8],
    offset: usize,
}

impl<'a> Iterator for StartCodonMatches<'a> {
    type Item = (usize, CodonType);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(triplet) = self.sequence[self.offset..].first_chunk::<CODON_LENGTH>() {
            let offset = self.offset;
            self.offset += 1;
            if let Some(codon) = CodonType::from_triplet(triplet) {
                return Some((offset, codon));
            }
        }
        None
    }
}

/// Scan a sequence for all overlapping start-codon occurrences.
#[must_use]
pub fn start_codons(sequence: &[u8]) -> StartCodonMatches<'_> {
    StartCodonMatches {
        sequence,
        offset: 0,
    }
}

/// Total number of start-codon occurrences across a whole sample set,
/// overlapping matches included.
#[must_use]
pub fn count_start_codons(samples: &SampleSet) -> usize {
    samples
        .iter()
        .map(|sequence| start_codons(sequence).count())
        .sum()
}

/// Occurrence counts per codon type (ATG, GTG, TTG order) across a sample
/// set.
#[must_use]
pub fn count_codon_types(samples: &SampleSet) -> [usize; NUM_CODON_TYPES] {
    let mut counts = [0; NUM_CODON_TYPES];
    for sequence in samples.iter() {
        for (_, codon) in start_codons(sequence) {
            counts[codon.to_index()] += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TisConfig;

    #[test]
    fn test_finds_overlapping_matches() {
        let matches: Vec<_> = start_codons(b"ATGATG").collect();
        assert_eq!(matches, vec![(0, CodonType::Atg), (3, CodonType::Atg)]);
    }

    #[test]
    fn test_overlap_within_five_bases() {
        // ATG at 0 and GTG at 2 share the G
        let matches: Vec<_> = start_codons(b"ATGTG").collect();
        assert_eq!(matches, vec![(0, CodonType::Atg), (2, CodonType::Gtg)]);
    }

    #[test]
    fn test_hand_enumerated_mixed_fixture() {
        // AATGTGG: triplets AAT, ATG, TGT, GTG, TGG
        let matches: Vec<_> = start_codons(b"AATGTGG").collect();
        assert_eq!(matches, vec![(1, CodonType::Atg), (3, CodonType::Gtg)]);
    }

    #[test]
    fn test_all_three_codon_types() {
        let matches: Vec<_> = start_codons(b"TTGCCGTGCCATG").collect();
        assert_eq!(
            matches,
            vec![
                (0, CodonType::Ttg),
                (5, CodonType::Gtg),
                (10, CodonType::Atg)
            ]
        );
    }

    #[test]
    fn test_no_matches_and_short_input() {
        assert_eq!(start_codons(b"CCCCCC").count(), 0);
        assert_eq!(start_codons(b"AT").count(), 0);
        assert_eq!(start_codons(b"").count(), 0);
    }

    #[test]
    fn test_scan_matches_exhaustive_enumeration() {
        // Cross-check against naive per-offset triplet comparison so no
        // window position can be skipped.
        let sequence = b"ATGGTGTTGATGCATGAATTGGTGCC";
        let expected: Vec<_> = (0..=sequence.len() - CODON_LENGTH)
            .filter_map(|offset| {
                sequence[offset..offset + CODON_LENGTH]
                    .try_into()
                    .ok()
                    .and_then(CodonType::from_triplet)
                    .map(|codon| (offset, codon))
            })
            .collect();
        assert_eq!(start_codons(sequence).collect::<Vec<_>>(), expected);
        assert!(expected.len() >= 6);
    }

    #[test]
    fn test_scan_is_restartable() {
        let sequence = b"ATGATG";
        let first: Vec<_> = start_codons(sequence).collect();
        let second: Vec<_> = start_codons(sequence).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_count_across_sample_set() {
        let config = TisConfig {
            window_length: 3,
            start_offset: 3,
            ..Default::default()
        };
        let samples = SampleSet::new(
            vec![b"ATGATG".to_vec(), b"CCCCCC".to_vec(), b"AATGTG".to_vec()],
            &config,
        )
        .unwrap();
        // 2 + 0 + 2 (ATG at 1, GTG at 3)
        assert_eq!(count_start_codons(&samples), 4);
        assert_eq!(count_codon_types(&samples), [3, 1, 0]);
    }
}
