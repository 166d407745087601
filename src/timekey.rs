//! Time key derivation for run identification.
//!
//! A key is the run's calendar timestamp at second precision, rendered as
//! `YYYYMMDD_HHMMSS`. Fixed-width zero padding makes keys lexicographically
//! sortable in chronological order for runs at least one second apart; two
//! runs inside the same second share a key and the later one wins.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Derive the sortable key identifying a run. Pure function of the supplied
/// timestamp; callers inject the clock value.
pub fn derive_key<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String {
    format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        timestamp.year(),
        timestamp.month(),
        timestamp.day(),
        timestamp.hour(),
        timestamp.minute(),
        timestamp.second()
    )
}
