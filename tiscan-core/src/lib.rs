//! # tiscan - Translation Initiation Site Scoring
//!
//! A statistical pipeline for detecting translation start sites in
//! prokaryotic DNA with a position weight matrix (PWM).
//!
//! ## Overview
//!
//! Given a set of fixed-length sequences aligned around a known start codon,
//! tiscan estimates a position frequency matrix over the upstream window,
//! converts it to log2-odds against a uniform background, scores every
//! start-codon occurrence (ATG/GTG/TTG, overlapping matches included) in the
//! set, derives a score threshold from the true-positive score distribution
//! at a target sensitivity, and sweeps thresholds to produce an ROC curve
//! with its area.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tiscan_core::{TisAnalyzer, config::TisConfig, sequence::SampleSet};
//! use tiscan_core::sequence::io::read_plain_sequences;
//!
//! let config = TisConfig::default();
//! let samples = SampleSet::new(read_plain_sequences("TIS-Ecoli.txt")?, &config)?;
//!
//! let analyzer = TisAnalyzer::new(config)?;
//! let results = analyzer.analyze(&samples)?;
//!
//! println!("threshold {:.3}, AUC {:.4}", results.threshold, results.area_under_curve);
//! # Ok::<(), tiscan_core::types::TisError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: explicit pipeline configuration (window, offset, pseudocount)
//! - [`types`]: bases, codons, candidates, and the error enum
//! - [`sequence`]: validated sample sets and file loading
//! - [`scan`]: overlapping start-codon scanning
//! - [`matrix`]: frequency and weight matrix estimation
//! - [`score`]: candidate enumeration and log-odds scoring
//! - [`threshold`]: percentile-based threshold estimation
//! - [`evaluation`]: classification, ROC sweep, area under curve
//! - [`engine`]: the [`TisAnalyzer`] facade
//! - [`results`]: analysis results
//! - [`output`]: report and plot-data writers
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, TisError>`](types::TisError).
//! Invalid symbols and malformed sample sets are rejected at construction;
//! candidates whose upstream window would run off the sequence start are
//! silently skipped rather than treated as errors.

pub mod config;
pub mod constants;
pub mod engine;
pub mod evaluation;
pub mod matrix;
pub mod output;
pub mod results;
pub mod scan;
pub mod score;
pub mod sequence;
pub mod threshold;
pub mod types;

pub use engine::TisAnalyzer;
pub use results::TisResults;
