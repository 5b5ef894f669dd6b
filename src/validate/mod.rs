//! Check log validation.
//!
//! Streams the log line by line and stops at the first line that the
//! allow-list does not accept:
//! - Lines are read lazily and never re-read
//! - The rejected line and everything after it are echoed for review
//! - Lines that are not valid UTF-8 are matched lossily and echoed verbatim

mod lines;
mod types;
mod validator;


pub use types::ValidationOutcome;
pub use validator::LineValidator;
