//! Flexible timestamp parsing.
//!
//! The two datasets disagree on textual form: the remote service emits
//! ISO-8601 (with or without a trailing offset, depending on whether the
//! upstream datetime carried a timezone), while the legacy dataset was
//! authored as `YYYY-MM-DD HH:MM:SS`. All forms normalize to the same
//! `DateTime<Utc>` instant; naive forms are taken as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, de};

use crate::error::Error;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Parse a timestamp in any accepted textual form into a UTC instant.
pub fn parse_flexible(raw: &str) -> Result<DateTime<Utc>, Error> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
    return Ok(dt.with_timezone(&Utc));
  }
  for format in NAIVE_FORMATS {
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
      return Ok(naive.and_utc());
    }
  }
  Err(Error::Timestamp(raw.to_string()))
}

/// Serde adaptor for wire fields: `#[serde(deserialize_with =
/// "timestamp::deserialize_flexible")]`.
pub fn deserialize_flexible<'de, D>(
  deserializer: D,
) -> Result<DateTime<Utc>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = String::deserialize(deserializer)?;
  parse_flexible(&raw).map_err(de::Error::custom)
}
