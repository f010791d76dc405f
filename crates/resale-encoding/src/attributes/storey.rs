//! Storey range buckets.
//!
//! HDB transactions report the floor as a three-storey bucket such as
//! `"07 TO 09"`. The model uses the bucket midpoint as a continuous proxy
//! for height.

use crate::error::{EncodingError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const SEPARATOR: &str = " TO ";

/// A `"NN TO MM"` storey bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreyRange {
    low: u16,
    high: u16,
}

impl StoreyRange {
    /// The 17 buckets offered for input, lowest first.
    pub const STANDARD: [Self; 17] = [
        Self::new(1, 3),
        Self::new(4, 6),
        Self::new(7, 9),
        Self::new(10, 12),
        Self::new(13, 15),
        Self::new(16, 18),
        Self::new(19, 21),
        Self::new(22, 24),
        Self::new(25, 27),
        Self::new(28, 30),
        Self::new(31, 33),
        Self::new(34, 36),
        Self::new(37, 39),
        Self::new(40, 42),
        Self::new(43, 45),
        Self::new(46, 48),
        Self::new(49, 51),
    ];

    /// Create a bucket from its bounds.
    pub const fn new(low: u16, high: u16) -> Self {
        Self { low, high }
    }

    /// Lowest storey of the bucket.
    pub const fn low(&self) -> u16 {
        self.low
    }

    /// Highest storey of the bucket.
    pub const fn high(&self) -> u16 {
        self.high
    }

    /// Midpoint of the bucket.
    pub fn median(&self) -> f64 {
        (f64::from(self.low) + f64::from(self.high)) / 2.0
    }

    /// Whether this is one of the [`StoreyRange::STANDARD`] buckets.
    pub fn is_standard(&self) -> bool {
        Self::STANDARD.contains(self)
    }
}

fn parse_bound(input: &str, part: &str) -> Result<u16> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EncodingError::Parse {
            input: input.to_string(),
            reason: "bounds must be unsigned integers",
        });
    }
    part.parse().map_err(|_| EncodingError::Parse {
        input: input.to_string(),
        reason: "bound is too large",
    })
}

impl FromStr for StoreyRange {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self> {
        let (low, high) = s
            .trim()
            .split_once(SEPARATOR)
            .ok_or_else(|| EncodingError::Parse {
                input: s.to_string(),
                reason: "expected \"NN TO MM\"",
            })?;
        Ok(Self::new(parse_bound(s, low)?, parse_bound(s, high)?))
    }
}

/// Midpoint of a `"NN TO MM"` storey range string.
///
/// # Errors
///
/// Returns [`EncodingError::Parse`] if the string is not two unsigned
/// integers separated by `" TO "`.
pub fn storey_median(range: &str) -> Result<f64> {
    range.parse::<StoreyRange>().map(|r| r.median())
}

impl fmt::Display for StoreyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{SEPARATOR}{:02}", self.low, self.high)
    }
}

impl Serialize for StoreyRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StoreyRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
