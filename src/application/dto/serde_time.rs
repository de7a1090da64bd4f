//! ISO-8601 timestamps with an explicit offset (`2024-01-01T00:00:00+00:00`).
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

pub fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, false)
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}
