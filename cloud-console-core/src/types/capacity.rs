//! Structured storage quantities
//!
//! Sizes are kept as value + unit instead of display strings, so aggregate
//! math never re-parses formatted text. Units are decimal throughout:
//! 1 TB = 1000 GB.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Storage unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityUnit {
    Gb,
    Tb,
}

impl CapacityUnit {
    /// Display suffix
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Gb => "GB",
            Self::Tb => "TB",
        }
    }
}

/// Storage quantity with an explicit unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    pub value: u64,
    pub unit: CapacityUnit,
}

impl Capacity {
    /// Quantity in gigabytes
    #[must_use]
    pub const fn gb(value: u64) -> Self {
        Self {
            value,
            unit: CapacityUnit::Gb,
        }
    }

    /// Quantity in terabytes
    #[must_use]
    pub const fn tb(value: u64) -> Self {
        Self {
            value,
            unit: CapacityUnit::Tb,
        }
    }

    /// Normalized value in gigabytes (1 TB = 1000 GB)
    #[must_use]
    pub const fn gigabytes(&self) -> u64 {
        match self.unit {
            CapacityUnit::Gb => self.value,
            CapacityUnit::Tb => self.value * 1000,
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.suffix())
    }
}

impl FromStr for Capacity {
    type Err = CoreError;

    /// Parses a formatted quantity: leading digits followed by a `GB`/`TB`
    /// suffix, with optional whitespace in between ("100 GB", "1TB").
    ///
    /// Malformed input is a hard error; a quantity is never silently read
    /// as zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (digits, rest) = trimmed.split_at(digits_end);

        let value: u64 = digits
            .parse()
            .map_err(|_| CoreError::InvalidQuantity(s.to_string()))?;

        let unit = match rest.trim().to_ascii_uppercase().as_str() {
            "GB" => CapacityUnit::Gb,
            "TB" => CapacityUnit::Tb,
            _ => return Err(CoreError::InvalidQuantity(s.to_string())),
        };

        Ok(Self { value, unit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_gigabytes() {
        let c: Capacity = "100 GB".parse().unwrap();
        assert_eq!(c, Capacity::gb(100));
        assert_eq!(c.gigabytes(), 100);
    }

    #[test]
    fn parse_terabytes_decimal() {
        let c: Capacity = "1 TB".parse().unwrap();
        assert_eq!(c, Capacity::tb(1));
        assert_eq!(c.gigabytes(), 1000);
    }

    #[test]
    fn parse_without_space() {
        let c: Capacity = "50GB".parse().unwrap();
        assert_eq!(c, Capacity::gb(50));
    }

    #[test]
    fn parse_rejects_missing_digits() {
        let err = "GB".parse::<Capacity>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidQuantity(_)));
    }

    #[test]
    fn parse_rejects_unknown_unit() {
        let err = "12 XB".parse::<Capacity>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidQuantity(_)));
        assert!("".parse::<Capacity>().is_err());
    }

    #[test]
    fn display_round_trip() {
        let c = Capacity::tb(2);
        assert_eq!(c.to_string(), "2 TB");
        assert_eq!(c.to_string().parse::<Capacity>().unwrap(), c);
    }
}
