//! Date string to epoch conversion for chart x-axes.
//!
//! The backend sends calendar dates ("2024-01-01") and timestamps
//! ("2024-01-01 10:00:00"). Both are read as UTC and turned into
//! milliseconds since the epoch, then rescaled to whatever unit the chart
//! collaborator reads. SciChart's date axis reads seconds; feeding it
//! milliseconds yields an empty or wildly stretched chart.

use crate::error::{DashboardError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Unit of a numeric epoch timestamp.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum EpochUnit {
    Milliseconds,
    #[default]
    Seconds,
}

impl EpochUnit {
    /// Rescale an epoch-millisecond value into this unit.
    pub fn from_millis(&self, millis: i64) -> f64 {
        match self {
            EpochUnit::Milliseconds => millis as f64,
            EpochUnit::Seconds => millis as f64 / 1000.0,
        }
    }
}

/// Parse a backend date string into epoch milliseconds (UTC).
pub fn parse_epoch_millis(value: &str) -> Result<i64> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .ok_or_else(|| DashboardError::Timestamp(value.to_string()));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT) {
        return Ok(dt.and_utc().timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.timestamp_millis());
    }
    Err(DashboardError::Timestamp(value.to_string()))
}

/// Convert a whole date axis to `unit`, failing on the first bad entry.
pub fn to_epoch(dates: &[String], unit: EpochUnit) -> Result<Vec<f64>> {
    dates
        .iter()
        .map(|d| parse_epoch_millis(d).map(|ms| unit.from_millis(ms)))
        .collect()
}
