//! Normalization scale for the trend graph.

use crate::core::Series;

/// Maximum combined issue count across all stored runs, used as the
/// denominator when normalizing runs onto a common 0-100 scale. An empty
/// series (or one with only issue-free runs) scales to 0.
pub fn combined_max(series: &Series) -> u64 {
    series.values().map(|stats| stats.combined()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RunStats;

    #[test]
    fn empty_series_has_zero_max() {
        assert_eq!(combined_max(&Series::new()), 0);
    }

    #[test]
    fn max_is_the_largest_combined_count() {
        let mut series = Series::new();
        series.insert("a".to_string(), RunStats::new(2, 3));
        series.insert("b".to_string(), RunStats::new(10, 0));
        series.insert("c".to_string(), RunStats::new(4, 4));
        assert_eq!(combined_max(&series), 10);
    }

    #[test]
    fn max_dominates_every_run() {
        let mut series = Series::new();
        series.insert("a".to_string(), RunStats::new(1, 7));
        series.insert("b".to_string(), RunStats::new(3, 3));
        let max = combined_max(&series);
        assert!(series.values().all(|s| s.combined() <= max));
    }

    #[test]
    fn all_issue_free_runs_scale_to_zero() {
        let mut series = Series::new();
        series.insert("a".to_string(), RunStats::new(0, 0));
        series.insert("b".to_string(), RunStats::new(0, 0));
        assert_eq!(combined_max(&series), 0);
    }
}
