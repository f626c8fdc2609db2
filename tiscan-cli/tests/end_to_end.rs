use assert_cmd::Command;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

/// A 150-base sequence with an A-rich window before an ATG at offset 100;
/// decoy variants add a pair of overlapping ATGs in a T-rich context.
fn synthetic_sequence(with_decoy: bool) -> String {
    let mut sequence = vec![b'C'; 150];
    sequence[70..100].fill(b'A');
    sequence[100..103].copy_from_slice(b"ATG");
    if with_decoy {
        sequence[20..50].fill(b'T');
        sequence[50..56].copy_from_slice(b"ATGATG");
    }
    String::from_utf8(sequence).unwrap()
}

fn write_dataset() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for i in 0..10 {
        writeln!(file, "{}", synthetic_sequence(i >= 5)).unwrap();
    }
    file
}

#[test]
fn reports_counts_threshold_and_auc() {
    let input = write_dataset();

    let output = Command::cargo_bin("tiscan")
        .unwrap()
        .args(["-i", input.path().to_str().unwrap(), "-q"])
        .assert()
        .success();

    let report = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(report.contains("Mode: training set equals validation set (10 sequences)"));
    assert!(report.contains("Sequence length: 150"));
    assert!(report.contains("Start codon occurrences: 20"));
    assert!(report.contains("ATG/GTG/TTG occurrences: 20/0/0"));
    assert!(report.contains("Area under curve: 1.000000"));
}

#[test]
fn holdout_mode_validates_on_remainder() {
    let input = write_dataset();

    let output = Command::cargo_bin("tiscan")
        .unwrap()
        .args([
            "-i",
            input.path().to_str().unwrap(),
            "--holdout",
            "5",
            "-q",
        ])
        .assert()
        .success();

    let report = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert!(report.contains("Mode: holdout (5 training / 5 validation sequences)"));
    assert!(report.contains("Start codon occurrences: 15"));
    assert!(report.contains("Area under curve: 1.000000"));
}

#[test]
fn writes_plot_data_artifacts() {
    let input = write_dataset();
    let dir = tempdir().unwrap();
    let pwm_path = dir.path().join("pwm.tsv");
    let roc_path = dir.path().join("roc.tsv");

    Command::cargo_bin("tiscan")
        .unwrap()
        .args([
            "-i",
            input.path().to_str().unwrap(),
            "--pwm-out",
            pwm_path.to_str().unwrap(),
            "--roc-out",
            roc_path.to_str().unwrap(),
            "-q",
        ])
        .assert()
        .success();

    let pwm = std::fs::read_to_string(&pwm_path).unwrap();
    let pwm_lines: Vec<&str> = pwm.lines().collect();
    // Header plus one row per base, 30 window columns each
    assert_eq!(pwm_lines.len(), 5);
    assert!(pwm_lines[1].starts_with("A\t"));
    assert_eq!(pwm_lines[1].split('\t').count(), 31);

    let roc = std::fs::read_to_string(&roc_path).unwrap();
    assert!(roc.starts_with("fpr\ttpr\n"));
    // Default sweep runs from +100 down to -100 in steps of 0.1
    assert_eq!(roc.lines().count(), 2002);
}

#[test]
fn rejects_invalid_sequences() {
    let mut input = NamedTempFile::new().unwrap();
    writeln!(input, "{}", "N".repeat(150)).unwrap();

    Command::cargo_bin("tiscan")
        .unwrap()
        .args(["-i", input.path().to_str().unwrap(), "-q"])
        .assert()
        .failure();
}

#[test]
fn rejects_missing_input_file() {
    Command::cargo_bin("tiscan")
        .unwrap()
        .args(["-i", "no_such_file.txt", "-q"])
        .assert()
        .failure();
}
