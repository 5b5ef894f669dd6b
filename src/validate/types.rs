//! Result type for a validation run.

/// Outcome of validating one check log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Every line matched the allow-list.
    Valid {
        /// Number of lines checked.
        lines: usize,
    },
    /// The first line that matched no allowed pattern.
    Invalid {
        /// Line number (1-based).
        line_number: usize,
        /// The rejected line, without terminator.
        line: String,
    },
}

impl ValidationOutcome {
    #[cfg(test)]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid { .. })
    }
}
