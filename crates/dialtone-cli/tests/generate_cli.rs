//! End-to-end tests for the generate command.

use clap::Parser;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::process::ExitCode;

use dialtone_cli::cli_args::Cli;
use dialtone_cli::commands::generate::run;
use dialtone_cli::report::GenerateReport;
use dialtone_cli::usage::USAGE;

fn cli(output: PathBuf, tone_length: &str, digits: &str) -> Cli {
    Cli {
        output,
        tone_length: tone_length.to_string(),
        digits: digits.to_string(),
        json: false,
    }
}

#[test]
fn generate_writes_expected_file_for_single_digit() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("out.wav");

    let code = run(&cli(out.clone(), "0.2", "5")).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let wav = std::fs::read(&out).unwrap();
    // 44-byte header + 2 bytes per sample * (44100 * 0.2) samples
    assert_eq!(wav.len(), 44 + 2 * 8820);
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");

    let sample_rate = u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]);
    assert_eq!(sample_rate, 44100);
}

#[test]
fn generate_writes_all_zero_payload_for_silence() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("quiet.wav");

    let code = run(&cli(out.clone(), "0.3", "--")).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let wav = std::fs::read(&out).unwrap();
    assert_eq!(wav.len(), 44 + 2 * 2 * 13230);
    assert!(wav[44..].iter().all(|&b| b == 0));
}

#[test]
fn generate_accepts_boundary_tone_lengths() {
    let tmp = tempfile::tempdir().unwrap();

    for (name, length) in [("low.wav", "0.1"), ("high.wav", "1.0")] {
        let out = tmp.path().join(name);
        let code = run(&cli(out.clone(), length, "1")).unwrap();
        assert_eq!(code, ExitCode::SUCCESS, "tone length {}", length);
        assert!(out.exists());
    }
}

#[test]
fn generate_rejects_out_of_range_tone_lengths() {
    let tmp = tempfile::tempdir().unwrap();

    for length in ["0.05", "1.5", "0", "-0.3"] {
        let out = tmp.path().join("rejected.wav");
        let code = run(&cli(out.clone(), length, "1")).unwrap();
        assert_eq!(code, ExitCode::FAILURE, "tone length {}", length);
        assert!(!out.exists(), "no partial file for tone length {}", length);
    }
}

#[test]
fn generate_rejects_unparseable_tone_length() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("rejected.wav");

    let code = run(&cli(out.clone(), "fast", "1")).unwrap();
    assert_eq!(code, ExitCode::FAILURE);
    assert!(!out.exists());
}

#[test]
fn generate_rejects_invalid_digit_string() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("rejected.wav");

    for digits in ["12a3", "", "555+"] {
        let code = run(&cli(out.clone(), "0.3", digits)).unwrap();
        assert_eq!(code, ExitCode::FAILURE, "digits {:?}", digits);
        assert!(!out.exists());
    }
}

#[test]
fn generate_fails_for_unwritable_output_path() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("missing-dir").join("out.wav");

    let err = run(&cli(out, "0.3", "123")).unwrap_err();
    assert!(err.to_string().contains("failed to write"));
}

#[test]
fn argument_count_is_exactly_three() {
    assert!(Cli::try_parse_from(["dialtone"]).is_err());
    assert!(Cli::try_parse_from(["dialtone", "out.wav"]).is_err());
    assert!(Cli::try_parse_from(["dialtone", "out.wav", "0.3"]).is_err());
    assert!(Cli::try_parse_from(["dialtone", "out.wav", "0.3", "123", "extra"]).is_err());
    assert!(Cli::try_parse_from(["dialtone", "out.wav", "0.3", "123", "4", "5"]).is_err());

    let cli = Cli::try_parse_from(["dialtone", "out.wav", "0.3", "123-3831"]).unwrap();
    assert_eq!(cli.output, PathBuf::from("out.wav"));
    assert_eq!(cli.tone_length, "0.3");
    assert_eq!(cli.digits, "123-3831");
    assert!(!cli.json);
}

#[test]
fn digit_string_may_start_with_a_silence_dash() {
    let cli = Cli::try_parse_from(["dialtone", "out.wav", "0.3", "-123"]).unwrap();
    assert_eq!(cli.digits, "-123");
}

#[test]
fn usage_text_matches_the_frozen_contract() {
    let lines: Vec<&str> = USAGE.lines().collect();
    assert_eq!(
        lines,
        vec![
            "",
            "Usage: ./dialtone X Y Z",
            "",
            " Where X is the name of the Wave file to create",
            " Where Y is the duration (in seconds) of each dtmf tone,",
            "         valid range is 0.1 - 1.0",
            " Where Z is the string of digits to create tones for, valid",
            "         digits are 0-9, #, * and - for a duration of silence",
            "",
            "Example: ./dialtone wavy.wav 0.3 123-3831",
            "",
        ]
    );
}

#[test]
fn json_report_carries_generation_metadata() {
    let config = dialtone_audio::ToneConfig::default();
    let result = dialtone_audio::generate("123", 0.5, &config).unwrap();
    let report = GenerateReport::new(std::path::Path::new("out.wav"), &result);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["output"], "out.wav");
    assert_eq!(value["sample_rate"], 44100);
    assert_eq!(value["num_digits"], 3);
    assert_eq!(value["num_samples"], 22050 * 3);
    assert_eq!(value["pcm_hash"].as_str().unwrap().len(), 64);
}
