use crate::types::TisError;
use bio::io::fasta;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read one raw sequence per line from a plain text file.
///
/// This is the native format of aligned start-site extracts: no header, no
/// delimiter beyond the newline. Trailing `\r` is stripped and blank lines
/// are skipped; the content is not validated here (see
/// [`SampleSet::new`](crate::sequence::SampleSet::new)).
pub fn read_plain_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>, TisError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut sequences = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            continue;
        }
        sequences.push(trimmed.as_bytes().to_vec());
    }

    Ok(sequences)
}

/// Read raw sequences from a FASTA file using rust-bio.
///
/// Record identifiers are discarded; only sample order matters downstream.
pub fn read_fasta_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>, TisError> {
    let file = File::open(path)?;
    let reader = fasta::Reader::new(file);
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| TisError::Parse(e.to_string()))?;
        sequences.push(record.seq().to_vec());
    }

    Ok(sequences)
}
