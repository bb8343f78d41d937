//! `internwatch` command-line entry point.
//!
//! # Responsibility
//! - Run one applicant command against the JSON data file and exit.
//! - Map failures to a non-zero exit code with the message on stderr.

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
