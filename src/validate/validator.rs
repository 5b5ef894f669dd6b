//! Core validation logic for check logs.

use crate::allowlist::CompiledAllowList;
use crate::error::{CheckError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use super::lines::{LogLine, LogLines};
use super::types::ValidationOutcome;

/// Prefix written before every echoed line after a rejection.
pub const CONTEXT_MARKER: &str = "    >>> ";

/// Scans a check log against an allow-list.
///
/// Holds no per-run state, so validating the same input twice gives the
/// same outcome.
#[derive(Debug, Clone, Copy)]
pub struct LineValidator<'a> {
    allow_list: &'a CompiledAllowList,
}

impl<'a> LineValidator<'a> {
    pub fn new(allow_list: &'a CompiledAllowList) -> Self {
        Self { allow_list }
    }

    /// Validate the log file at `path`, writing any failure report to `out`.
    ///
    /// # Returns
    ///
    /// * `Ok(ValidationOutcome::Valid)` - Every line matched (including an empty file)
    /// * `Ok(ValidationOutcome::Invalid)` - First rejected line; the report was written
    /// * `Err(CheckError::Io)` - The file could not be opened or read
    pub fn validate_path<W: Write>(&self, path: &Path, out: &mut W) -> Result<ValidationOutcome> {
        let file = File::open(path).map_err(|e| CheckError::io(path, e))?;
        self.validate_reader(path, BufReader::new(file), out)
    }

    /// Validate lines from `reader`; `path` only names the log in the report.
    ///
    /// This function implements the scan:
    /// 1. Read one line and match it (terminator removed) against the allow-list
    /// 2. If any pattern matches, continue with the next line
    /// 3. Otherwise write the report header, then the rejected line and every
    ///    remaining line, each prefixed with [`CONTEXT_MARKER`], and stop
    pub fn validate_reader<R: BufRead, W: Write>(
        &self,
        path: &Path,
        reader: R,
        out: &mut W,
    ) -> Result<ValidationOutcome> {
        let mut lines = LogLines::new(reader);

        while let Some(line) = lines.next() {
            let line = line.map_err(|e| CheckError::io(path, e))?;
            let text = line.text();

            if self.allow_list.is_allowed(&text) {
                continue;
            }

            let outcome = ValidationOutcome::Invalid {
                line_number: line.number,
                line: text.into_owned(),
            };
            write_failure_report(path, &line, &mut lines, out)?;
            return Ok(outcome);
        }

        Ok(ValidationOutcome::Valid {
            lines: lines.lines_read(),
        })
    }
}

/// Write the failure header, the rejected line and the rest of the log.
fn write_failure_report<R: BufRead, W: Write>(
    path: &Path,
    rejected: &LogLine,
    rest: &mut LogLines<R>,
    out: &mut W,
) -> Result<()> {
    let stdout_err = |e: io::Error| CheckError::io("<output>", e);

    writeln!(
        out,
        "ERROR Illegal output found {} line {}",
        path.display(),
        rejected.number
    )
    .map_err(stdout_err)?;
    write_context_line(out, rejected).map_err(stdout_err)?;

    for line in rest {
        let line = line.map_err(|e| CheckError::io(path, e))?;
        write_context_line(out, &line).map_err(stdout_err)?;
    }

    out.flush().map_err(stdout_err)
}

fn write_context_line<W: Write>(out: &mut W, line: &LogLine) -> io::Result<()> {
    out.write_all(CONTEXT_MARKER.as_bytes())?;
    out.write_all(&line.raw)
}
