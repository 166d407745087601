//! Core data model for lint run statistics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One linter run's persisted summary. Created once per invocation and
/// immutable once stored under its time key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    #[serde(default)]
    pub errors: u64,
    #[serde(default)]
    pub warnings: u64,
}

impl RunStats {
    pub fn new(errors: u64, warnings: u64) -> Self {
        Self { errors, warnings }
    }

    /// Combined issue count, the single scalar driving normalization.
    pub fn combined(&self) -> u64 {
        self.errors.saturating_add(self.warnings)
    }
}

/// Per-unit result handed in by the linting collaborator, one per analyzed
/// file. Field names match the upstream JSON shape; absent counts are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LintResult {
    pub error_count: u64,
    pub warning_count: u64,
}

impl LintResult {
    pub fn new(error_count: u64, warning_count: u64) -> Self {
        Self {
            error_count,
            warning_count,
        }
    }
}

/// The full historical record of runs, keyed by time key in insertion order.
/// Insertion order is the on-disk order and must survive load/save exactly.
pub type Series = IndexMap<String, RunStats>;

/// Reduce one invocation's per-unit results into a single run summary.
/// Never fails; an empty result set is a clean run.
pub fn summarize(results: &[LintResult]) -> RunStats {
    results.iter().fold(RunStats::default(), |acc, r| RunStats {
        errors: acc.errors.saturating_add(r.error_count),
        warnings: acc.warnings.saturating_add(r.warning_count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_sums_counts_across_units() {
        let results = vec![
            LintResult::new(2, 1),
            LintResult::new(0, 0),
            LintResult::new(3, 2),
        ];
        assert_eq!(summarize(&results), RunStats::new(5, 3));
    }

    #[test]
    fn summarize_of_empty_results_is_zero() {
        assert_eq!(summarize(&[]), RunStats::new(0, 0));
    }

    #[test]
    fn lint_result_defaults_missing_counts_to_zero() {
        let r: LintResult = serde_json::from_str(r#"{"errorCount": 4}"#).unwrap();
        assert_eq!(r, LintResult::new(4, 0));

        let r: LintResult = serde_json::from_str("{}").unwrap();
        assert_eq!(r, LintResult::new(0, 0));
    }

    #[test]
    fn combined_saturates_instead_of_overflowing() {
        let stats = RunStats::new(u64::MAX, 1);
        assert_eq!(stats.combined(), u64::MAX);
    }
}
