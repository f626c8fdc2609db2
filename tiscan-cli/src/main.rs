//! # tiscan CLI - Start-Site Scoring Pipeline
//!
//! Command-line interface for the tiscan translation-initiation-site
//! scoring pipeline.
//!
//! ## Usage
//!
//! ```bash
//! # Analyze aligned start-site extracts, training and validating on the
//! # whole set
//! tiscan -i TIS-Ecoli.txt
//!
//! # Hold out the first 400 sequences for training, validate on the rest
//! tiscan -i TIS-Ecoli.txt --holdout 400
//!
//! # Export heatmap and ROC data for external plotting
//! tiscan -i TIS-Ecoli.txt --pwm-out pwm.tsv --roc-out roc.tsv
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: input sequences, one per line (or FASTA)
//! - `-f, --format <FORMAT>`: input format: plain or fasta (default: plain)
//! - `-o, --output <FILE>`: report file (default: stdout)
//! - `-s, --sensitivity <PERCENT>`: target sensitivity (default: 50)
//! - `--holdout <N>`: train on the first N sequences, validate on the rest
//! - `--pwm-out <FILE>`: write weight-matrix heatmap data as TSV
//! - `--roc-out <FILE>`: write ROC curve points as TSV
//! - `-q, --quiet`: suppress the stderr summary

use clap::{Arg, ArgAction, Command};
use std::fs::File;
use std::io::{self, BufWriter, Write};

use tiscan_core::config::TisConfig;
use tiscan_core::output::{write_pwm_tsv, write_report, write_roc_tsv};
use tiscan_core::sequence::io::{read_fasta_sequences, read_plain_sequences};
use tiscan_core::sequence::SampleSet;
use tiscan_core::TisAnalyzer;

/// Parse command-line arguments, run the pipeline, and write the report and
/// any requested plot-data artifacts.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("tiscan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translation initiation site scoring with position weight matrices")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .required(true)
                .help("Input sequence file"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Input format: plain or fasta")
                .default_value("plain"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Report file (default: stdout)"),
        )
        .arg(
            Arg::new("sensitivity")
                .short('s')
                .long("sensitivity")
                .value_name("PERCENT")
                .help("Target sensitivity for the score threshold")
                .default_value("50"),
        )
        .arg(
            Arg::new("holdout")
                .long("holdout")
                .value_name("N")
                .help("Train on the first N sequences, validate on the rest"),
        )
        .arg(
            Arg::new("pwm-out")
                .long("pwm-out")
                .value_name("FILE")
                .help("Write weight-matrix heatmap data as TSV"),
        )
        .arg(
            Arg::new("roc-out")
                .long("roc-out")
                .value_name("FILE")
                .help("Write ROC curve points as TSV"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .get_matches();

    let sensitivity_percent: f64 = matches
        .get_one::<String>("sensitivity")
        .map(|s| s.parse())
        .transpose()
        .map_err(|_| "Invalid sensitivity percentage")?
        .unwrap_or(50.0);

    let config = TisConfig {
        sensitivity_percent,
        quiet: matches.get_flag("quiet"),
        ..Default::default()
    };

    let input = matches
        .get_one::<String>("input")
        .expect("input is a required argument");
    let sequences = match matches.get_one::<String>("format").map(String::as_str) {
        Some("plain") | None => read_plain_sequences(input)?,
        Some("fasta") => read_fasta_sequences(input)?,
        Some(other) => return Err(format!("Invalid input format: {other}").into()),
    };
    let samples = SampleSet::new(sequences, &config)?;

    let analyzer = TisAnalyzer::new(config.clone())?;
    let results = if let Some(holdout) = matches.get_one::<String>("holdout") {
        let training_count: usize = holdout.parse().map_err(|_| "Invalid holdout count")?;
        analyzer.analyze_with_holdout(&samples, training_count)?
    } else {
        analyzer.analyze(&samples)?
    };

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    write_report(&mut writer, &results)?;
    writer.flush()?;

    if let Some(path) = matches.get_one::<String>("pwm-out") {
        let mut pwm_writer = BufWriter::new(File::create(path)?);
        write_pwm_tsv(&mut pwm_writer, &results.weight_matrix)?;
    }
    if let Some(path) = matches.get_one::<String>("roc-out") {
        let mut roc_writer = BufWriter::new(File::create(path)?);
        write_roc_tsv(&mut roc_writer, &results.roc)?;
    }

    if !config.quiet {
        eprintln!(
            "Analysis complete: {} candidates above threshold in {} sequences (AUC {:.4}).",
            results.true_positives + results.false_positives,
            results.dataset.sample_count,
            results.area_under_curve
        );
    }

    Ok(())
}
