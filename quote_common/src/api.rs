//! Request and response payloads exchanged between client and server.
use serde::{Deserialize, Serialize};

use crate::filter::MaxAge;
use crate::result::Result;

/// Form body of a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitForm {
    /// Display name.
    pub name: String,
    /// Quote text.
    pub message: String,
}

/// Query string of a retrieval. Kept signed so that a negative window reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgeQuery {
    /// Max age of quotes in days. `0` or absent means all time.
    #[serde(default, alias = "maxAgeDays", skip_serializing_if = "Option::is_none")]
    pub max_age_days: Option<i64>,
}

impl AgeQuery {
    /// Validated window; rejects negative values.
    pub fn max_age(&self) -> Result<Option<MaxAge>> {
        self.max_age_days.map(MaxAge::try_from).transpose()
    }
}

/// Body of an error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub error: String,
}

/// Body of the health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Always `"ok"` when the server answers.
    pub status: String,
    /// Number of stored quotes.
    pub quotes: usize,
    /// Seconds since the server started.
    pub uptime_secs: u64,
}
