// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute-or-percentage lengths.

extern crate alloc;

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::LayoutError;

/// A length given either in pixels or as a percentage of a reference length.
///
/// Percentages are stored as authored (`50%` is `Percent(50.0)`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PolarLength {
    /// A length in chart coordinate units, used as-is.
    Absolute(f64),
    /// A percentage of whatever reference the consumer resolves against.
    Percent(f64),
}

impl PolarLength {
    /// Shorthand for [`PolarLength::Percent`].
    pub fn percent(p: f64) -> Self {
        Self::Percent(p)
    }

    /// Returns `true` for percentage lengths.
    pub fn is_percent(self) -> bool {
        matches!(self, Self::Percent(_))
    }

    /// Resolves this length against `reference`.
    ///
    /// Absolute lengths ignore the reference.
    pub fn resolve(self, reference: f64) -> f64 {
        match self {
            Self::Absolute(v) => v,
            Self::Percent(p) => reference * p / 100.0,
        }
    }
}

impl Default for PolarLength {
    fn default() -> Self {
        Self::Absolute(0.0)
    }
}

impl From<f64> for PolarLength {
    fn from(value: f64) -> Self {
        Self::Absolute(value)
    }
}

impl From<i32> for PolarLength {
    fn from(value: i32) -> Self {
        Self::Absolute(f64::from(value))
    }
}

impl FromStr for PolarLength {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || LayoutError::InvalidLength {
            input: s.to_string(),
        };
        let (number, is_percent) = match trimmed.strip_suffix('%') {
            Some(rest) => (rest.trim_end(), true),
            None => (trimmed, false),
        };
        let value: f64 = number.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(if is_percent {
            Self::Percent(value)
        } else {
            Self::Absolute(value)
        })
    }
}

impl fmt::Display for PolarLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(v) => write!(f, "{v}"),
            Self::Percent(p) => write!(f, "{p}%"),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PolarLength {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct LengthVisitor;

        impl serde::de::Visitor<'_> for LengthVisitor {
            type Value = PolarLength;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a percentage string such as \"80%\"")
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(PolarLength::Absolute(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(PolarLength::Absolute(v as f64))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(PolarLength::Absolute(v as f64))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(LengthVisitor)
    }
}
