//! Working-directory precondition for rcheck-validate.
//!
//! The tool must run from the directory where `R CMD check` left its output.
//! Resolution happens before any file is opened.

use crate::config::CheckConfig;
use crate::error::{CheckError, Result};
use std::path::{Path, PathBuf};

/// Resolved paths for a validation run.
#[derive(Debug, Clone)]
pub struct CheckContext {
    /// The log file to validate.
    pub log_path: PathBuf,
}

/// Require the check directory to exist under the current working directory.
///
/// Paths in the returned context stay relative when the config is relative,
/// so diagnostics name the file the way the user would.
pub fn require_check_dir(config: &CheckConfig) -> Result<CheckContext> {
    require_check_dir_in(Path::new(""), config)
}

/// Require the check directory to exist under `base`.
pub fn require_check_dir_in(base: &Path, config: &CheckConfig) -> Result<CheckContext> {
    let check_dir = config.check_dir_in(base);

    if !check_dir.is_dir() {
        return Err(CheckError::Precondition(
            "You must run this script inside the generated R package source directory."
                .to_string(),
        ));
    }

    Ok(CheckContext {
        log_path: base.join(config.log_path()),
    })
}
