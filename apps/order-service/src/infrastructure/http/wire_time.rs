//! Serde helpers for `orderTime`.
//!
//! Written as `HH:MM:SS`; read as either `HH:MM` or `HH:MM:SS`.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

const OUTPUT_FORMAT: &str = "%H:%M:%S";
const INPUT_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Parse a wire time in any accepted format.
pub(crate) fn parse(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
}

pub(crate) fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match time {
        Some(t) => serializer.serialize_str(&t.format(OUTPUT_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse(&raw).map(Some).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid time '{raw}', expected HH:MM or HH:MM:SS"))
    })
}
