//! Exit code constants for rcheck-validate.
//!
//! - 0: Every log line matched the allow-list
//! - 1: User error (missing check directory, unreadable log, bad pattern)
//! - 2: Validation failure (a log line matched no allowed pattern)

/// Successful validation.
pub const SUCCESS: i32 = 0;

/// User error: the tool was run in the wrong place or the log could not be read.
pub const USER_ERROR: i32 = 1;

/// Validation failure: unexpected output found in the check log.
pub const VALIDATION_FAILURE: i32 = 2;
