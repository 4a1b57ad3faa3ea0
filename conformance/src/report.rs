//! Conformance report: individual check results and their aggregation.

use std::fmt;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// Suspicious but non-blocking.
    Warning,
    /// The check failed; the suite does not pass.
    Failure,
}

impl Severity {
    /// Tag printed in front of each result line.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        }
    }
}

/// One check result.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Validator that produced the result, e.g. `"taxonomy/inventory"`.
    pub validator: &'static str,
    /// What was checked and how it went.
    pub message: String,
    /// Outcome.
    pub severity: Severity,
    /// Offending entries, one per line.
    pub details: Vec<String>,
}

impl TestResult {
    fn new(validator: &'static str, message: impl Into<String>, severity: Severity) -> Self {
        TestResult {
            validator,
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// A passing result.
    pub fn pass(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Pass)
    }

    /// A warning.
    pub fn warn(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Warning)
    }

    /// A failure.
    pub fn fail(validator: &'static str, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Failure)
    }

    /// A failure listing the offending entries.
    pub fn fail_with_details(
        validator: &'static str,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        TestResult {
            details,
            ..Self::fail(validator, message)
        }
    }

    /// Passes with `message` if `details` is empty, otherwise fails with them.
    pub fn from_violations(
        validator: &'static str,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        if details.is_empty() {
            Self::pass(validator, message)
        } else {
            Self::fail_with_details(validator, message, details)
        }
    }

    /// Returns true for a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity.label(), self.validator, self.message)?;
        for detail in &self.details {
            write!(f, "\n       {detail}")?;
        }
        Ok(())
    }
}

/// Results of every validator, in run order.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// All results.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// An empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one result.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Appends every result of `other`.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Number of results with `severity`.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Number of failures.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// True when nothing failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violations_decide_severity() {
        let ok = TestResult::from_violations("t", "fine", Vec::new());
        let bad = TestResult::from_violations("t", "broken", vec!["x".to_owned()]);
        assert_eq!(ok.severity, Severity::Pass);
        assert!(bad.is_failure());
        assert_eq!(bad.to_string(), "[FAIL] t: broken\n       x");
    }

    #[test]
    fn counts_by_severity() {
        let mut report = ConformanceReport::new();
        report.push(TestResult::pass("a", "ok"));
        report.push(TestResult::warn("a", "hmm"));
        let mut other = ConformanceReport::new();
        other.push(TestResult::fail("b", "no"));
        report.extend(other);
        assert_eq!(report.count(Severity::Pass), 1);
        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.all_passed());
    }
}
