//! Compiled allow-list matching.

use crate::error::{CheckError, Result};
use regex::Regex;
use std::sync::LazyLock;

use super::patterns::ALLOWED_PATTERNS;

static DEFAULT_ALLOW_LIST: LazyLock<CompiledAllowList> = LazyLock::new(|| {
    CompiledAllowList::new(ALLOWED_PATTERNS).expect("built-in allow-list patterns must compile")
});

/// Compiled allow-list patterns for efficient matching.
///
/// Create once per run and share across every line of the log.
pub struct CompiledAllowList {
    /// The compiled regex patterns paired with their original string representations.
    patterns: Vec<(Regex, String)>,
}

impl std::fmt::Debug for CompiledAllowList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledAllowList")
            .field(
                "patterns",
                &self.patterns.iter().map(|(_, s)| s).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl CompiledAllowList {
    /// Compile an ordered list of patterns.
    ///
    /// # Returns
    ///
    /// * `Ok(CompiledAllowList)` - Successfully compiled patterns
    /// * `Err(CheckError::InvalidPattern)` - If any pattern fails to compile
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let regex = Regex::new(pattern).map_err(|source| CheckError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            compiled.push((regex, pattern.to_string()));
        }

        Ok(Self { patterns: compiled })
    }

    /// The built-in allow-list, compiled on first use.
    pub fn default_list() -> &'static CompiledAllowList {
        &DEFAULT_ALLOW_LIST
    }

    /// Check a line (without terminator) against every pattern in order.
    ///
    /// Returns the first pattern that matches anywhere in the line.
    pub fn matches(&self, line: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|(regex, _)| regex.is_match(line))
            .map(|(_, pattern)| pattern.as_str())
    }

    /// Whether any pattern accepts the line.
    pub fn is_allowed(&self, line: &str) -> bool {
        self.matches(line).is_some()
    }

    /// Number of patterns in the list.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}
