//! Conversion from the user-facing search radius to the meters the backend
//! expects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownUnitError;

pub const METERS_PER_MILE: f64 = 1609.34;
pub const METERS_PER_KILOMETER: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
}

impl DistanceUnit {
    #[must_use]
    pub fn meters_per_unit(self) -> f64 {
        match self {
            DistanceUnit::Miles => METERS_PER_MILE,
            DistanceUnit::Kilometers => METERS_PER_KILOMETER,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceUnit::Miles => write!(f, "miles"),
            DistanceUnit::Kilometers => write!(f, "kilometers"),
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = UnknownUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "miles" | "mile" | "mi" => Ok(DistanceUnit::Miles),
            "kilometers" | "kilometer" | "km" => Ok(DistanceUnit::Kilometers),
            _ => Err(UnknownUnitError(s.to_owned())),
        }
    }
}

/// Converts `value` in `unit` to whole meters, rounding to the nearest meter.
///
/// Negative, zero, and non-finite inputs all yield `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_meters(value: f64, unit: DistanceUnit) -> u64 {
    let meters = (value * unit.meters_per_unit()).round();
    if !meters.is_finite() || meters <= 0.0 {
        return 0;
    }
    meters as u64
}
