//! Persistence of the run series.
//!
//! The durable state is a single JSON object mapping time keys to run
//! summaries, pretty-printed with 2-space indentation. Key order in the file
//! is insertion order and must survive a load/save cycle byte for byte.

use crate::core::{RunStats, Series};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the stats file, relative to the working directory.
pub const DEFAULT_STATS_PATH: &str = "reports/eslint-graph.json";

/// Persistence failures surfaced by [`StatsStore::save`]. Read-side problems
/// are recovered internally and never reach callers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize stats series")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to create stats directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write stats file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Explicit storage configuration, passed in at construction rather than
/// read from ambient process state.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STATS_PATH),
        }
    }
}

/// Reads and writes the persisted run series.
#[derive(Debug, Clone)]
pub struct StatsStore {
    config: StoreConfig,
}

impl StatsStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Load the persisted series. A missing or unreadable file means "no
    /// prior history": an empty series is returned and immediately written
    /// back so the store exists on disk from first access onward. A failed
    /// healing write is logged and does not abort the invocation.
    pub fn load(&self) -> Series {
        match read_series(&self.config.path) {
            Some(series) => {
                log::debug!(
                    "Loaded {} runs from {}",
                    series.len(),
                    self.config.path.display()
                );
                series
            }
            None => {
                let empty = Series::new();
                if let Err(e) = self.save(&empty) {
                    log::warn!(
                        "Failed to initialize stats file {}: {}",
                        self.config.path.display(),
                        e
                    );
                }
                empty
            }
        }
    }

    /// Persist the full series, overwriting prior content. Serialization is
    /// deterministic: keys are written in insertion order, so saving an
    /// unchanged series reproduces the file exactly.
    pub fn save(&self, series: &Series) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(series).map_err(StoreError::Serialize)?;
        if let Some(parent) = self.config.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        fs::write(&self.config.path, json).map_err(|source| StoreError::Write {
            path: self.config.path.clone(),
            source,
        })?;
        log::debug!(
            "Saved {} runs to {}",
            series.len(),
            self.config.path.display()
        );
        Ok(())
    }
}

/// Insert or overwrite `key` with `stats`. Pure value transformation; an
/// existing key keeps its position in the series, so re-merging the same
/// run never grows the history.
pub fn merge(mut series: Series, key: String, stats: RunStats) -> Series {
    series.insert(key, stats);
    series
}

fn read_series(path: &Path) -> Option<Series> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            // A store that simply does not exist yet is the normal first run.
            if e.kind() != io::ErrorKind::NotFound {
                log::warn!("Failed to read stats file {}: {}", path.display(), e);
            }
            return None;
        }
    };
    match serde_json::from_str(&contents) {
        Ok(series) => Some(series),
        Err(e) => {
            log::warn!(
                "Stats file {} is corrupt ({}); starting fresh",
                path.display(),
                e
            );
            None
        }
    }
}
