//! Allow-list of expected `R CMD check --as-cran` output lines.
//!
//! A check log passes only if every line matches at least one entry:
//! - Entries are regular expressions searched anywhere in the line
//! - Lines are matched without their line terminator
//! - The list is fixed at build time and compiled once per process

mod matcher;
mod patterns;


pub use matcher::CompiledAllowList;
