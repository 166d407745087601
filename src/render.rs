//! Per-run visual descriptors for the trend graph.
//!
//! Each stored run becomes one [`GraphPoint`]: a horizontal slot in series
//! order plus percentages normalized against the series-wide maximum. All
//! divisions have defined zero fallbacks so the rendering layer never sees a
//! non-finite number.

use crate::core::Series;
use serde::Serialize;

/// Horizontal width of one run's slot in the rendered graph, in pixels.
pub const UNIT_WIDTH: usize = 60;

/// One run's render data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphPoint {
    /// Ordinal slot position: `unit_width * index`.
    pub left: usize,
    /// Distance from the top of the graph area: `100 - (100 * combined / max)`.
    /// A taller bar means more issues. Defined as 100 when `max` is 0.
    pub top: f64,
    pub errors: u64,
    pub warnings: u64,
    /// Errors' share of this run's own combined count; 0 for a clean run.
    pub errors_percent: f64,
    /// Warnings' share of this run's own combined count; 0 for a clean run.
    pub warnings_percent: f64,
}

/// Transform the series into render data, one point per run in insertion
/// order. Produces a finite, restartable sequence sized exactly to the
/// series length.
pub fn render_series(series: &Series, max: u64, unit_width: usize) -> Vec<GraphPoint> {
    series
        .values()
        .enumerate()
        .map(|(index, stats)| {
            let combined = stats.combined();
            let filled = if max == 0 {
                0.0
            } else {
                (100.0 * combined as f64) / max as f64
            };
            let (errors_percent, warnings_percent) = if combined == 0 {
                (0.0, 0.0)
            } else {
                (
                    (100.0 * stats.errors as f64) / combined as f64,
                    (100.0 * stats.warnings as f64) / combined as f64,
                )
            };
            GraphPoint {
                left: unit_width * index,
                top: 100.0 - filled,
                errors: stats.errors,
                warnings: stats.warnings,
                errors_percent,
                warnings_percent,
            }
        })
        .collect()
}
