use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Linear unit the caller expresses timestamps in.
///
/// Only the length of one day depends on it: that is the step used when no
/// minimum-step hint is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    #[default]
    Milliseconds,
    Seconds,
}

impl TimeUnit {
    /// Length of one calendar day expressed in this unit.
    #[must_use]
    pub fn day_length(self) -> f64 {
        let day = TimeDelta::days(1);
        match self {
            Self::Milliseconds => day.num_milliseconds() as f64,
            Self::Seconds => day.num_seconds() as f64,
        }
    }

    #[must_use]
    pub fn datetime_to_value(self, time: DateTime<Utc>) -> f64 {
        let millis = time.timestamp_millis() as f64;
        match self {
            Self::Milliseconds => millis,
            Self::Seconds => millis / 1000.0,
        }
    }

    /// Converts a tick value back into a UTC datetime, truncated to millisecond precision.
    ///
    /// Returns `None` for non-finite values or values outside chrono's range.
    #[must_use]
    pub fn value_to_datetime(self, value: f64) -> Option<DateTime<Utc>> {
        if !value.is_finite() {
            return None;
        }
        let millis = match self {
            Self::Milliseconds => value,
            Self::Seconds => value * 1000.0,
        };
        if millis.abs() >= i64::MAX as f64 {
            return None;
        }
        DateTime::from_timestamp_millis(millis.round() as i64)
    }
}
