//! Dialtone - command-line DTMF wave file generator
//!
//! Takes an output path, a tone length and a digit string, and writes a
//! canonical PCM WAVE file of DTMF tones.

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use dialtone_cli::cli_args::Cli;
use dialtone_cli::{commands, usage};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            // Wrong argument count or shape: the usage contract, not clap's
            // own diagnostics.
            usage::print_usage();
            return ExitCode::FAILURE;
        }
    };

    match commands::generate::run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
