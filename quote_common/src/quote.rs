//! Quote data model and timestamp helpers.
//!
//! A `Quote` is what users submit and what the retrieval boundary returns. The
//! `time` field is stored as text so that records edited by hand (or damaged)
//! still load; [`parse_time`] is the single place that interprets it.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format of `Quote::time` as written by this crate: ISO-8601, second precision,
/// local time without offset. Fixed width and zero padded, so string order is
/// chronological order.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single user-submitted quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Display name of the submitter. Untrusted.
    pub name: String,
    /// Quote text. Untrusted.
    pub message: String,
    /// Submission time, see [`TIME_FORMAT`].
    pub time: String,
}

impl Quote {
    /// Build a quote stamped with `now`, truncated to whole seconds.
    pub fn new(name: impl Into<String>, message: impl Into<String>, now: NaiveDateTime) -> Self {
        Quote {
            name: name.into(),
            message: message.into(),
            time: now.format(TIME_FORMAT).to_string(),
        }
    }

    /// Parsed `time`, or `None` when the stored value is not a timestamp.
    pub fn parsed_time(&self) -> Option<NaiveDateTime> {
        parse_time(&self.time)
    }
}

/// Interpret a stored timestamp.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS` with an optional fraction, the same with a
/// space separator, RFC 3339 with an offset (converted to local time), and a
/// bare `YYYY-MM-DD` (midnight).
pub fn parse_time(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(t) = raw.parse::<NaiveDateTime>() {
        return Some(t);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(t);
        }
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Local).naive_local());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
