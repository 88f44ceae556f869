// Wire and domain types for the three lookups.
//
// Response envelopes stay private to the crate; callers only see the
// extracted values.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Coordinates ──────────────────────────────────────────────────────

/// One coordinate exactly as the geolocation service sent it.
///
/// Some providers return numbers, others strings. The value is carried
/// through untouched and rendered verbatim into the pass-prediction query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<String> for Coordinate {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Coordinate {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Latitude/longitude pair from the geolocation lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
}

impl Coordinates {
    pub fn new(latitude: impl Into<Coordinate>, longitude: impl Into<Coordinate>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

// ── Pass times ───────────────────────────────────────────────────────

/// A single predicted ISS pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassTime {
    /// Unix timestamp (seconds) when the station rises above the horizon.
    pub risetime: i64,
    /// Visible duration in seconds.
    pub duration: u64,
}

impl PassTime {
    /// Rise time as a UTC instant, or `None` if the timestamp is out of range.
    pub fn rise_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.risetime, 0)
    }
}

// ── Response envelopes ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct IpResponse {
    pub ip: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PassTimesResponse {
    pub response: Vec<PassTime>,
}
