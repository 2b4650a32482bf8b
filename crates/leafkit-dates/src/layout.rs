//! Date layouts and conversions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use leafkit_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// A supported date layout, named by its reference rendering.
///
/// The reference date is 2 January 2006, 15:04:05; a layout's name is how
/// that moment looks in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateLayout {
    /// `2006-01-02`
    #[serde(rename = "2006-01-02")]
    YearMonthDay,
    /// `2006-01-02T15:04:05`
    #[serde(rename = "2006-01-02T15:04:05")]
    YearMonthDayTime,
}

impl DateLayout {
    /// Every layout, shortest first.
    pub const ALL: [DateLayout; 2] = [DateLayout::YearMonthDay, DateLayout::YearMonthDayTime];

    /// The reference rendering, e.g. `"2006-01-02"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateLayout::YearMonthDay => "2006-01-02",
            DateLayout::YearMonthDayTime => "2006-01-02T15:04:05",
        }
    }

    /// The equivalent `chrono` format string.
    pub fn chrono_format(&self) -> &'static str {
        match self {
            DateLayout::YearMonthDay => "%Y-%m-%d",
            DateLayout::YearMonthDayTime => "%Y-%m-%dT%H:%M:%S",
        }
    }

    fn has_time(&self) -> bool {
        matches!(self, DateLayout::YearMonthDayTime)
    }
}

impl fmt::Display for DateLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateLayout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DateLayout::ALL
            .into_iter()
            .find(|layout| layout.as_str() == s)
            .ok_or_else(|| Error::parse(format!("unknown date layout '{s}'")))
    }
}

/// Parse `input` in `layout` as a UTC timestamp.
///
/// Date-only layouts give midnight UTC.
///
/// # Errors
///
/// [`Error::Parse`] with a message starting `failed to parse date:`.
///
/// # Example
///
/// ```
/// use leafkit_dates::{DateLayout, parse};
///
/// let dt = parse(DateLayout::YearMonthDay, "2024-03-09")?;
/// assert_eq!(dt.to_rfc3339(), "2024-03-09T00:00:00+00:00");
/// # Ok::<(), leafkit_core::Error>(())
/// ```
pub fn parse(layout: DateLayout, input: &str) -> Result<DateTime<Utc>> {
    let pattern = layout.chrono_format();
    let naive = if layout.has_time() {
        NaiveDateTime::parse_from_str(input, pattern)
    } else {
        NaiveDate::parse_from_str(input, pattern).map(|date| date.and_time(NaiveTime::default()))
    };
    naive
        .map(|dt| dt.and_utc())
        .map_err(|e| Error::parse(format!("failed to parse date: '{input}' as {layout}: {e}")))
}

/// Render `dt` in `layout`.
pub fn format(layout: DateLayout, dt: &DateTime<Utc>) -> String {
    dt.format(layout.chrono_format()).to_string()
}
