use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Create a package directory holding `h2o.Rcheck/00check.log` with `log`.
pub(crate) fn create_check_dir(log: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let check_dir = temp_dir.path().join("h2o.Rcheck");
    std::fs::create_dir(&check_dir).unwrap();
    std::fs::write(check_dir.join("00check.log"), log).unwrap();
    temp_dir
}

/// A check log that a clean CRAN submission of h2o produces.
pub(crate) const CLEAN_LOG: &str = "\
* using log directory '/home/jenkins/h2o-3/h2o-r/h2o.Rcheck'
* using R version 3.2.2 (2015-08-14)
* using platform: x86_64-pc-linux-gnu (64-bit)
* using session charset: UTF-8
* using option '--as-cran'
* checking for file 'h2o/DESCRIPTION' ... OK
* checking extension type ... Package
* this is package 'h2o' version '3.6.0.3'
* checking CRAN incoming feasibility ... NOTE
Maintainer: 'Tom Kraljevic <tomk@0xdata.com>'

New submission

Package was archived on CRAN

CRAN repository db overrides:
  X-CRAN-Comment: Archived on 2014-09-23 as did not comply with CRAN
    policies on use of multiple threads.
* checking package namespace information ... OK
* checking installed package size ... NOTE
  installed size is 51.2Mb
  sub-directories of 1Mb or more:
    java  50.1Mb
* checking for unstated dependencies in examples ... OK
NOTE: There were 2 notes.
* DONE

Status: 2 NOTEs
";
