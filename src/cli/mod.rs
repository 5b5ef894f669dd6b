//! CLI argument parsing for rcheck-validate.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Every option defaults to the layout `R CMD check` produces for h2o,
//! so running with no arguments validates `h2o.Rcheck/00check.log`.

use crate::config::{CheckConfig, DEFAULT_CHECK_DIR, DEFAULT_LOG_FILE};
use clap::Parser;
use std::path::PathBuf;

/// Validate `R CMD check --as-cran` output against the expected lines.
///
/// Run from the generated R package source directory. Exits 0 when every
/// line of the check log is expected, 1 when the check directory or log is
/// missing, and 2 when unexpected output is found.
#[derive(Parser, Debug)]
#[command(name = "rcheck-validate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory produced by `R CMD check`.
    #[arg(long, default_value = DEFAULT_CHECK_DIR)]
    pub check_dir: PathBuf,

    /// Log file to validate, relative to the check directory.
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Print a summary to stderr when validation passes.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Build the run configuration from parsed arguments.
    pub fn into_config(self) -> CheckConfig {
        CheckConfig {
            check_dir: self.check_dir,
            log_file: self.log_file,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args_uses_defaults() {
        let cli = Cli::try_parse_from(["rcheck-validate"]).unwrap();
        assert_eq!(cli.into_config(), CheckConfig::default());
    }

    #[test]
    fn parse_overrides() {
        let cli = Cli::try_parse_from([
            "rcheck-validate",
            "--check-dir",
            "mypkg.Rcheck",
            "--log-file",
            "check.log",
            "-v",
        ])
        .unwrap();
        let config = cli.into_config();
        assert_eq!(config.check_dir, PathBuf::from("mypkg.Rcheck"));
        assert_eq!(config.log_file, PathBuf::from("check.log"));
        assert!(config.verbose);
    }

    #[test]
    fn positional_args_are_rejected() {
        assert!(Cli::try_parse_from(["rcheck-validate", "extra"]).is_err());
    }
}
