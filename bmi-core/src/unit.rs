//! Weight and height units with canonical conversion factors
//!
//! The BMI formula always operates on kilograms and meters. Each unit
//! carries its linear factor to the canonical unit; conversions are exact
//! modulo floating-point rounding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for unit symbol parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitParseError {
    #[error("Unknown weight unit: '{0}' (expected kg or lb)")]
    UnknownWeightUnit(String),

    #[error("Unknown height unit: '{0}' (expected m, cm, or in)")]
    UnknownHeightUnit(String),
}

/// Unit a weight value is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kilogram,
    Pound,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 2] = [WeightUnit::Kilogram, WeightUnit::Pound];

    /// The unit symbol (e.g., "kg", "lb")
    pub fn symbol(&self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kg",
            WeightUnit::Pound => "lb",
        }
    }

    /// The unit name (e.g., "kilogram", "pound")
    pub fn name(&self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kilogram",
            WeightUnit::Pound => "pound",
        }
    }

    /// Convert a value in this unit to kilograms
    pub fn to_kilograms(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kilogram => value,
            WeightUnit::Pound => value * 0.453592,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for WeightUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilogram),
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Pound),
            other => Err(UnitParseError::UnknownWeightUnit(other.to_string())),
        }
    }
}

/// Unit a height value is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    Meter,
    Centimeter,
    Inch,
}

impl HeightUnit {
    pub const ALL: [HeightUnit; 3] = [
        HeightUnit::Meter,
        HeightUnit::Centimeter,
        HeightUnit::Inch,
    ];

    /// The unit symbol (e.g., "m", "cm", "in")
    pub fn symbol(&self) -> &'static str {
        match self {
            HeightUnit::Meter => "m",
            HeightUnit::Centimeter => "cm",
            HeightUnit::Inch => "in",
        }
    }

    /// The unit name (e.g., "meter", "centimeter", "inch")
    pub fn name(&self) -> &'static str {
        match self {
            HeightUnit::Meter => "meter",
            HeightUnit::Centimeter => "centimeter",
            HeightUnit::Inch => "inch",
        }
    }

    /// Convert a value in this unit to meters
    pub fn to_meters(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Meter => value,
            HeightUnit::Centimeter => value / 100.0,
            HeightUnit::Inch => value * 0.0254,
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for HeightUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" => Ok(HeightUnit::Meter),
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Centimeter),
            "in" | "inch" | "inches" => Ok(HeightUnit::Inch),
            other => Err(UnitParseError::UnknownHeightUnit(other.to_string())),
        }
    }
}
