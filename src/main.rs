//! rcheck-validate: check that `R CMD check --as-cran` produced only expected output.
//!
//! CRAN's check tool reports problems in free text that is hard to gate on in
//! automation. This binary scans the check log against a fixed allow-list and
//! exits non-zero on the first unexpected line, echoing the rest of the log.

mod allowlist;
mod cli;
mod commands;
mod config;
mod context;
mod error;
mod exit_codes;
mod validate;

#[cfg(test)]
mod test_support;

use cli::Cli;
use error::CheckError;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Cli::parse_args().into_config();

    match commands::dispatch(config) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            report_error(&err, &mut io::stdout().lock());
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Print a user-facing error line. Write failures (closed stdout) are ignored
/// so the exit code still reaches the caller.
fn report_error<W: Write>(err: &CheckError, out: &mut W) {
    // The failure report has already been written for validation failures.
    if matches!(err, CheckError::ValidationFailure { .. }) {
        return;
    }
    let _ = writeln!(out, "ERROR: {}", err);
}
