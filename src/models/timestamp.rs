//! ISO-8601 timestamp encoding for persisted entries
//!
//! Timestamps are local wall-clock times without an offset, written with
//! microsecond precision (`2024-03-05T14:07:09.123456`). Reading also accepts
//! a space separator, a missing fraction, and RFC 3339 text with an offset,
//! which is converted to local time.

use chrono::{DateTime, Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Deserializer, Serializer};

const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const SPACE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Current local time, truncated to the precision that survives a round trip
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

/// Format a timestamp the way it is stored on disk
pub fn format(ts: &NaiveDateTime) -> String {
    ts.format(WRITE_FORMAT).to_string()
}

/// Parse a stored timestamp
pub fn parse(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    s.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(s, SPACE_FORMAT).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
}

pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(ts))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", raw)))
}
