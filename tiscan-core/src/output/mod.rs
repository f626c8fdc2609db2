//! Report and plot-data writers.
//!
//! The pipeline itself only computes matrices and curves; these writers
//! serialize them for the textual report and for external plotting tools
//! (PWM heatmap, ROC curve).

use std::io::Write;

use crate::evaluation::RocCurve;
use crate::matrix::WeightMatrix;
use crate::results::TisResults;
use crate::types::{Nucleotide, TisError};

/// Write the textual analysis report.
///
/// # Errors
///
/// Propagates I/O failures from the writer.
pub fn write_report<W: Write>(writer: &mut W, results: &TisResults) -> Result<(), TisError> {
    if let Some(training_count) = results.training_count {
        writeln!(
            writer,
            "Mode: holdout ({} training / {} validation sequences)",
            training_count, results.dataset.sample_count
        )?;
    } else {
        writeln!(
            writer,
            "Mode: training set equals validation set ({} sequences)",
            results.dataset.sample_count
        )?;
    }
    writeln!(writer, "Sequence length: {}", results.dataset.sequence_length)?;
    writeln!(
        writer,
        "Start codon occurrences: {}",
        results.dataset.codon_occurrences
    )?;
    writeln!(
        writer,
        "ATG/GTG/TTG occurrences: {}/{}/{}",
        results.dataset.codon_type_counts[0],
        results.dataset.codon_type_counts[1],
        results.dataset.codon_type_counts[2]
    )?;
    writeln!(writer, "Score threshold: {:.6}", results.threshold)?;
    writeln!(
        writer,
        "True/false positive candidates: {}/{}",
        results.true_positives, results.false_positives
    )?;
    writeln!(writer, "Area under curve: {:.6}", results.area_under_curve)?;
    Ok(())
}

/// Write a weight matrix as TSV heatmap data: one labeled row per base
/// (A, C, T, G order), one column per upstream window position.
///
/// # Errors
///
/// Propagates I/O failures from the writer.
pub fn write_pwm_tsv<W: Write>(writer: &mut W, pwm: &WeightMatrix) -> Result<(), TisError> {
    write!(writer, "base")?;
    for column in 0..pwm.window_length() {
        write!(writer, "\t{column}")?;
    }
    writeln!(writer)?;

    for &base in &Nucleotide::ALL {
        write!(writer, "{base}")?;
        for column in 0..pwm.window_length() {
            write!(writer, "\t{:.6}", pwm.get(base, column))?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Write ROC curve points as TSV, one `fpr\ttpr` pair per line in sweep
/// order.
///
/// # Errors
///
/// Propagates I/O failures from the writer.
pub fn write_roc_tsv<W: Write>(writer: &mut W, roc: &RocCurve) -> Result<(), TisError> {
    writeln!(writer, "fpr\ttpr")?;
    for point in &roc.points {
        writeln!(
            writer,
            "{:.6}\t{:.6}",
            point.false_positive_rate, point.true_positive_rate
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TisConfig;
    use crate::evaluation::RocPoint;
    use crate::sequence::SampleSet;

    fn small_pwm() -> WeightMatrix {
        let config = TisConfig {
            window_length: 2,
            start_offset: 2,
            ..Default::default()
        };
        let samples = SampleSet::new(vec![b"ACTGC".to_vec()], &config).unwrap();
        WeightMatrix::estimate(&samples, &config).unwrap()
    }

    #[test]
    fn test_pwm_tsv_layout() {
        let mut buffer = Vec::new();
        write_pwm_tsv(&mut buffer, &small_pwm()).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "base\t0\t1");
        assert!(lines[1].starts_with("A\t"));
        assert!(lines[2].starts_with("C\t"));
        assert!(lines[3].starts_with("T\t"));
        assert!(lines[4].starts_with("G\t"));
        for line in &lines[1..] {
            assert_eq!(line.split('\t').count(), 3);
        }
    }

    #[test]
    fn test_roc_tsv_layout() {
        let roc = RocCurve {
            points: vec![
                RocPoint {
                    false_positive_rate: 0.0,
                    true_positive_rate: 0.5,
                },
                RocPoint {
                    false_positive_rate: 1.0,
                    true_positive_rate: 1.0,
                },
            ],
        };
        let mut buffer = Vec::new();
        write_roc_tsv(&mut buffer, &roc).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "fpr\ttpr\n0.000000\t0.500000\n1.000000\t1.000000\n"
        );
    }
}
