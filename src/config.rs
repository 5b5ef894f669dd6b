//! Run configuration for rcheck-validate.
//!
//! The allow-list itself is fixed at build time (see `allowlist`). The only
//! knobs are where the check output lives, and every default reproduces the
//! layout produced by `R CMD check` for the h2o package.

use std::path::{Path, PathBuf};

/// Default check output directory, relative to the working directory.
pub const DEFAULT_CHECK_DIR: &str = "h2o.Rcheck";

/// Default check log file name within the check directory.
pub const DEFAULT_LOG_FILE: &str = "00check.log";

/// Resolved settings for a single validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Directory produced by `R CMD check`.
    pub check_dir: PathBuf,
    /// Log file name, relative to `check_dir`.
    pub log_file: PathBuf,
    /// Print a progress summary to stderr.
    pub verbose: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            check_dir: PathBuf::from(DEFAULT_CHECK_DIR),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            verbose: false,
        }
    }
}

impl CheckConfig {
    /// Path of the log to validate.
    pub fn log_path(&self) -> PathBuf {
        self.check_dir.join(&self.log_file)
    }

    /// Resolve the check directory against a base directory.
    pub fn check_dir_in(&self, base: &Path) -> PathBuf {
        base.join(&self.check_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_match_r_cmd_check_layout() {
        let config = CheckConfig::default();
        assert_eq!(config.check_dir, PathBuf::from("h2o.Rcheck"));
        assert_eq!(config.log_path(), PathBuf::from("h2o.Rcheck/00check.log"));
        assert!(!config.verbose);
    }

    #[test]
    fn log_path_follows_overrides() {
        let config = CheckConfig {
            check_dir: PathBuf::from("mypkg.Rcheck"),
            log_file: PathBuf::from("check.log"),
            verbose: true,
        };
        assert_eq!(config.log_path(), PathBuf::from("mypkg.Rcheck/check.log"));
    }

    #[test]
    fn absolute_check_dir_ignores_base() {
        let config = CheckConfig {
            check_dir: PathBuf::from("/tmp/x.Rcheck"),
            ..Default::default()
        };
        assert_eq!(
            config.check_dir_in(Path::new("/work")),
            PathBuf::from("/tmp/x.Rcheck")
        );
    }
}
