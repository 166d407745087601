// Export modules for library usage
pub mod core;
pub mod render;
pub mod report;
pub mod scale;
pub mod store;
pub mod timekey;

// Re-export commonly used types
pub use crate::core::{summarize, LintResult, RunStats, Series};
pub use crate::render::{render_series, GraphPoint, UNIT_WIDTH};
pub use crate::report::{HtmlTemplates, ReportBuilder, TemplateEngine, TemplateId};
pub use crate::scale::combined_max;
pub use crate::store::{merge, StatsStore, StoreConfig, StoreError, DEFAULT_STATS_PATH};
pub use crate::timekey::derive_key;
