//! Report generation pipeline.
//!
//! [`ReportBuilder`] ties the pieces together for one invocation: load the
//! persisted series, fold the current run in, persist, normalize, and hand
//! the render data to a [`TemplateEngine`]. The engine is a trait seam so the
//! core never depends on a concrete template syntax; [`HtmlTemplates`] is the
//! built-in implementation over compile-time-embedded markup.

use crate::core::{summarize, LintResult};
use crate::render::{render_series, GraphPoint, UNIT_WIDTH};
use crate::scale::combined_max;
use crate::store::{merge, StatsStore};
use crate::timekey::derive_key;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use html_escape::encode_text;

/// The two documents a report is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    /// The full report page.
    Report,
    /// One run's graph fragment.
    GraphItem,
}

/// Pure rendering capability: substitute named values into the template
/// identified by `id` and return the resulting text.
pub trait TemplateEngine {
    fn render(&self, id: TemplateId, values: &[(&str, String)]) -> Result<String>;
}

/// Built-in HTML engine. Templates are embedded at compile time; values are
/// spliced in by `{{{NAME}}}` placeholder replacement.
#[derive(Debug, Clone)]
pub struct HtmlTemplates {
    report: &'static str,
    item: &'static str,
}

impl Default for HtmlTemplates {
    fn default() -> Self {
        Self {
            report: include_str!("templates/report.html"),
            item: include_str!("templates/graph_item.html"),
        }
    }
}

impl TemplateEngine for HtmlTemplates {
    fn render(&self, id: TemplateId, values: &[(&str, String)]) -> Result<String> {
        let template = match id {
            TemplateId::Report => self.report,
            TemplateId::GraphItem => self.item,
        };
        let mut output = template.to_string();
        for (name, value) in values {
            output = output.replace(&format!("{{{{{{{name}}}}}}}"), value);
        }
        Ok(output)
    }
}

/// Orchestrates one reporting invocation. Stateless across invocations; all
/// durable state lives in the [`StatsStore`].
pub struct ReportBuilder<E: TemplateEngine> {
    store: StatsStore,
    engine: E,
}

impl ReportBuilder<HtmlTemplates> {
    pub fn new(store: StatsStore) -> Self {
        Self::with_engine(store, HtmlTemplates::default())
    }
}

impl<E: TemplateEngine> ReportBuilder<E> {
    pub fn with_engine(store: StatsStore, engine: E) -> Self {
        Self { store, engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Generate the report for the current run, keyed by the current local
    /// time. See [`generate_at`](Self::generate_at).
    pub fn generate(&self, results: &[LintResult]) -> Result<String> {
        self.generate_at(results, Local::now())
    }

    /// Generate the report for the current run at an explicit timestamp.
    /// The series is persisted before any rendering happens; a persistence
    /// failure aborts the invocation with no partial report.
    pub fn generate_at(&self, results: &[LintResult], now: DateTime<Local>) -> Result<String> {
        let series = self.store.load();
        let summary = summarize(results);
        let key = derive_key(&now);
        let series = merge(series, key, summary);
        self.store
            .save(&series)
            .context("cannot persist lint run history")?;

        let max = combined_max(&series);
        let points = render_series(&series, max, UNIT_WIDTH);

        let items = points
            .iter()
            .map(|point| self.engine.render(TemplateId::GraphItem, &item_values(point)))
            .collect::<Result<Vec<_>>>()?
            .join("\n");

        self.engine.render(
            TemplateId::Report,
            &[
                (
                    "DATE",
                    encode_text(&now.format("%Y-%m-%d %H:%M:%S").to_string()).into_owned(),
                ),
                ("RESULTS", items),
            ],
        )
    }
}

fn item_values(point: &GraphPoint) -> Vec<(&'static str, String)> {
    vec![
        ("LEFT", point.left.to_string()),
        ("TOP", format_percent(point.top)),
        ("ERRORS", point.errors.to_string()),
        ("WARNINGS", point.warnings.to_string()),
        ("ERRORS_PERCENT", format_percent(point.errors_percent)),
        ("WARNINGS_PERCENT", format_percent(point.warnings_percent)),
    ]
}

/// Render a percentage without trailing noise: whole values lose the
/// fractional part, others keep it ("62.5", not "62.50000000000001").
fn format_percent(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.2}", value)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_substituted() {
        let engine = HtmlTemplates::default();
        let out = engine
            .render(
                TemplateId::GraphItem,
                &[
                    ("LEFT", "60".to_string()),
                    ("TOP", "0".to_string()),
                    ("ERRORS", "5".to_string()),
                    ("WARNINGS", "3".to_string()),
                    ("ERRORS_PERCENT", "62.5".to_string()),
                    ("WARNINGS_PERCENT", "37.5".to_string()),
                ],
            )
            .unwrap();
        assert!(out.contains("left: 60px"));
        assert!(out.contains("62.5%"));
        assert!(!out.contains("{{{"));
    }

    #[test]
    fn report_template_embeds_date_and_results() {
        let engine = HtmlTemplates::default();
        let out = engine
            .render(
                TemplateId::Report,
                &[
                    ("DATE", "2024-01-01 12:00:00".to_string()),
                    ("RESULTS", "<div>item</div>".to_string()),
                ],
            )
            .unwrap();
        assert!(out.contains("2024-01-01 12:00:00"));
        assert!(out.contains("<div>item</div>"));
    }

    #[test]
    fn format_percent_drops_float_noise() {
        assert_eq!(format_percent(62.5), "62.5");
        assert_eq!(format_percent(100.0), "100");
        assert_eq!(format_percent(0.0), "0");
        assert_eq!(format_percent(100.0 / 3.0), "33.33");
    }
}
