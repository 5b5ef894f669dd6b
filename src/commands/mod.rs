//! Command implementation for rcheck-validate.
//!
//! Resolves the check directory, validates the log against the built-in
//! allow-list, and turns a rejected line into a `ValidationFailure`.


use crate::allowlist::CompiledAllowList;
use crate::config::CheckConfig;
use crate::context::require_check_dir;
use crate::error::{CheckError, Result};
use crate::validate::{LineValidator, ValidationOutcome};
use std::io::{self, Write};

/// Run the check, writing the failure report to stdout and the summary to stderr.
pub fn dispatch(config: CheckConfig) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_check(&config, &mut stdout.lock(), &mut stderr.lock())
}

/// Run the check, writing the failure report to `out`.
///
/// With `verbose` set, a one-line summary of a passing run goes to `log`.
///
/// # Exit Codes
///
/// - 0: Every log line matched
/// - 1: Check directory missing or log unreadable (nothing is read when the directory is missing)
/// - 2: A log line matched no allowed pattern
pub fn run_check<W: Write, L: Write>(
    config: &CheckConfig,
    out: &mut W,
    log: &mut L,
) -> Result<()> {
    let ctx = require_check_dir(config)?;
    let allow_list = CompiledAllowList::default_list();
    let validator = LineValidator::new(allow_list);

    match validator.validate_path(&ctx.log_path, out)? {
        ValidationOutcome::Valid { lines } => {
            if config.verbose {
                writeln!(
                    log,
                    "checked {} lines of {} against {} patterns: OK",
                    lines,
                    ctx.log_path.display(),
                    allow_list.len()
                )
                .map_err(|e| CheckError::io("<stderr>", e))?;
            }
            Ok(())
        }
        ValidationOutcome::Invalid { line_number, .. } => Err(CheckError::ValidationFailure {
            path: ctx.log_path,
            line_number,
        }),
    }
}
