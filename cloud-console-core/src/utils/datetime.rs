//! Datetime serialization/deserialization helpers.
//!
//! Mock timestamps are plain wall-clock values without a timezone, so they
//! travel as `NaiveDateTime` and serialize in the console display format:
//! - Serialization: `NaiveDateTime` -> "YYYY-MM-DD HH:MM:SS"
//! - Deserialization: the same format, or "YYYY-MM-DD HH:MM"

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

/// Canonical display/storage format.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Minute-precision variant accepted on input.
const FORMAT_MINUTES: &str = "%Y-%m-%d %H:%M";

/// Serializes `NaiveDateTime` as "YYYY-MM-DD HH:MM:SS".
pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.format(FORMAT).to_string())
}

/// Deserializes `NaiveDateTime` from second- or minute-precision strings.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(|()| Error::custom(format!("Invalid timestamp: {s}")))
}

/// Parses a timestamp in either accepted precision.
pub(crate) fn parse(s: &str) -> Result<NaiveDateTime, ()> {
    NaiveDateTime::parse_from_str(s, FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, FORMAT_MINUTES))
        .map_err(|_| ())
}

/// `Option<NaiveDateTime>` serializer/deserializer helpers.
pub mod option {
    use super::{Deserialize, Deserializer, FORMAT, NaiveDateTime, Serializer, parse};

    /// Serializes `Option<NaiveDateTime>` as a formatted string or `null`.
    pub fn serialize<S>(dt: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => serializer.serialize_str(&dt.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes `Option<NaiveDateTime>` from a formatted string or `null`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let value: Option<String> = Option::deserialize(deserializer)?;
        match value {
            Some(s) => parse(&s)
                .map(Some)
                .map_err(|()| Error::custom(format!("Invalid timestamp: {s}"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_precisions() {
        assert!(parse("2024-02-15 14:35:22").is_ok());
        assert!(parse("2024-02-15 08:00").is_ok());
        assert!(parse("not a timestamp").is_err());
    }
}
